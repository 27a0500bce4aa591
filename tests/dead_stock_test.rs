mod common;

use assert_matches::assert_matches;
use labstock_api::{
    entities::{Quality, Role, SystemStatus},
    errors::ServiceError,
    services::dead_stock::DeadStockRequest,
    services::register::NewItem,
};

fn new_item(name: &str, quantity: i32) -> NewItem {
    NewItem {
        name: name.to_string(),
        quantity,
        quality: Quality::Poor,
        status: SystemStatus::NotWorking,
    }
}

#[tokio::test]
async fn hod_moves_item_into_the_archive() {
    let services = common::setup_services().await;
    let hod = common::session("hod", Role::Hod);

    let item = services
        .register
        .add_item(new_item("CRT Monitor", 1))
        .await
        .unwrap();

    let entry = services
        .dead_stock
        .move_to_dead_stock(
            &hod,
            DeadStockRequest {
                system_no: item.system_no,
                reason: "Screen burn-in".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(entry.system_no, item.system_no);
    assert_eq!(entry.name, "CRT Monitor");
    assert_eq!(entry.reason, "Screen burn-in");
    assert_eq!(entry.accepted_by, "hod");

    // Removed from the register, exactly one archive record
    assert_matches!(
        services.register.get(item.system_no).await,
        Err(ServiceError::NotFound(_))
    );
    let archive = services.dead_stock.list().await.unwrap();
    assert_eq!(archive.len(), 1);
}

#[tokio::test]
async fn non_hod_roles_are_rejected_and_register_is_untouched() {
    let services = common::setup_services().await;

    let item = services
        .register
        .add_item(new_item("Old Printer", 1))
        .await
        .unwrap();

    for role in [Role::Admin, Role::Principal] {
        let session = common::session("someone", role);
        let result = services
            .dead_stock
            .move_to_dead_stock(
                &session,
                DeadStockRequest {
                    system_no: item.system_no,
                    reason: "Worn out".to_string(),
                },
            )
            .await;

        assert_matches!(result, Err(ServiceError::Forbidden(_)));
    }

    assert!(services.register.get(item.system_no).await.is_ok());
    assert!(services.dead_stock.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn moving_a_missing_item_is_not_found() {
    let services = common::setup_services().await;
    let hod = common::session("hod", Role::Hod);

    let result = services
        .dead_stock
        .move_to_dead_stock(
            &hod,
            DeadStockRequest {
                system_no: 2999,
                reason: "Does not exist".to_string(),
            },
        )
        .await;

    assert_matches!(result, Err(ServiceError::NotFound(_)));
    assert!(services.dead_stock.list().await.unwrap().is_empty());
}
