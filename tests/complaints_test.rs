mod common;

use assert_matches::assert_matches;
use labstock_api::{
    entities::{ComplaintStatus, Role},
    errors::ServiceError,
    services::complaints::NewComplaint,
};

#[tokio::test]
async fn complaints_are_recorded_open_with_session_identity() {
    let services = common::setup_services().await;
    let principal = common::session("principal", Role::Principal);

    let entry = services
        .complaints
        .raise(
            &principal,
            NewComplaint {
                title: "Lab 2 PC not booting".to_string(),
                description: "System 2003 shows no display".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(entry.raised_by, "principal");
    assert_eq!(entry.role, Role::Principal);
    assert_eq!(entry.status, ComplaintStatus::Open);
}

#[tokio::test]
async fn only_admin_lists_complaints() {
    let services = common::setup_services().await;
    let hod = common::session("hod", Role::Hod);
    let admin = common::session("admin", Role::Admin);

    for title in ["First", "Second"] {
        services
            .complaints
            .raise(
                &hod,
                NewComplaint {
                    title: title.to_string(),
                    description: "details".to_string(),
                },
            )
            .await
            .unwrap();
    }

    let all = services.complaints.list_all(&admin).await.unwrap();
    assert_eq!(all.len(), 2);
    // Newest first
    assert_eq!(all[0].title, "Second");

    assert_matches!(
        services.complaints.list_all(&hod).await,
        Err(ServiceError::Forbidden(_))
    );
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let services = common::setup_services().await;
    let hod = common::session("hod", Role::Hod);

    let result = services
        .complaints
        .raise(
            &hod,
            NewComplaint {
                title: String::new(),
                description: "details".to_string(),
            },
        )
        .await;

    assert_matches!(result, Err(ServiceError::ValidationError(_)));
}
