mod common;

use assert_matches::assert_matches;
use labstock_api::{entities::Role, errors::ServiceError};

#[tokio::test]
async fn seeded_users_log_in_with_exact_credentials() {
    let services = common::setup_services().await;
    let auth = &services.auth;

    for (username, password, role) in [
        ("admin", "admin123", Role::Admin),
        ("hod", "hod123", Role::Hod),
        ("principal", "principal123", Role::Principal),
    ] {
        let response = auth.login(username, password).await.unwrap();
        assert_eq!(response.username, username);
        assert_eq!(response.role, role);

        let session = auth.session(&response.token).expect("session resolves");
        assert_eq!(session.username, username);
        assert_eq!(session.role, role);
    }
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let services = common::setup_services().await;
    let auth = &services.auth;

    assert_matches!(
        auth.login("admin", "wrong").await,
        Err(ServiceError::Unauthorized(_))
    );
    assert_matches!(
        auth.login("nobody", "admin123").await,
        Err(ServiceError::Unauthorized(_))
    );
    // Exact match only: no case folding
    assert_matches!(
        auth.login("Admin", "admin123").await,
        Err(ServiceError::Unauthorized(_))
    );
}

#[tokio::test]
async fn revoked_tokens_no_longer_resolve() {
    let services = common::setup_services().await;
    let auth = &services.auth;

    let response = auth.login("hod", "hod123").await.unwrap();
    assert!(auth.session(&response.token).is_some());

    assert!(auth.revoke(&response.token));
    assert!(auth.session(&response.token).is_none());

    // Second revoke is a no-op
    assert!(!auth.revoke(&response.token));
}

#[tokio::test]
async fn unknown_tokens_do_not_resolve() {
    let services = common::setup_services().await;
    assert!(services.auth.session("not-a-token").is_none());
}
