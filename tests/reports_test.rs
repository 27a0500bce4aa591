mod common;

use labstock_api::{
    entities::{Quality, SystemStatus},
    services::register::NewItem,
};

#[tokio::test]
async fn stock_report_covers_only_active_items() {
    let services = common::setup_services().await;

    for (name, quantity, status) in [
        ("Desktop", 10, SystemStatus::Working),
        ("Monitor", 5, SystemStatus::Working),
        ("Switch", 1, SystemStatus::NotWorking),
        ("Depleted", 0, SystemStatus::Working),
    ] {
        services
            .register
            .add_item(NewItem {
                name: name.to_string(),
                quantity,
                quality: Quality::Good,
                status,
            })
            .await
            .unwrap();
    }

    let report = services.reports.stock_report().await.unwrap();

    // Zero-quantity rows are invisible to reporting
    assert_eq!(report.quantity_by_name.len(), 3);
    assert!(report
        .quantity_by_name
        .iter()
        .all(|item| item.name != "Depleted"));

    let desktop = report
        .quantity_by_name
        .iter()
        .find(|item| item.name == "Desktop")
        .expect("desktop in report");
    assert_eq!(desktop.quantity, 10);

    assert_eq!(report.status_breakdown.get("Working"), Some(&2));
    assert_eq!(report.status_breakdown.get("Not Working"), Some(&1));
}

#[tokio::test]
async fn empty_register_yields_an_empty_report() {
    let services = common::setup_services().await;

    let report = services.reports.stock_report().await.unwrap();
    assert!(report.quantity_by_name.is_empty());
    assert!(report.status_breakdown.is_empty());
}
