//! End-to-end test of the orchestrated system: the lifecycle wiring from
//! this crate around the controller from `dashboard-core`, with the
//! remote API scripted.

use dashboard_core::mock::{MockGateway, RecordingSink};
use dashboard_core::{FormField, Product, ProductId, Severity, SubmitOutcome};
use dashboard_app::lifecycle::DashboardSystem;
use std::sync::Arc;

fn product(id: &str, name: &str, price: f64) -> Product {
    Product::new(
        ProductId::from(id),
        name,
        format!("{name} description"),
        price,
        "Home",
        format!("https://example.com/{id}.png"),
    )
}

#[tokio::test]
async fn full_crud_walk_through_the_system() {
    let gateway = Arc::new(MockGateway::new());
    let sink = Arc::new(RecordingSink::new());
    let system = DashboardSystem::start(gateway.clone(), sink.clone());
    let dashboard = &system.dashboard;

    // Load.
    gateway
        .expect_list()
        .return_ok(vec![product("a", "Lamp", 19.5)]);
    assert!(dashboard.load_products().await.unwrap());

    // Create.
    assert!(dashboard.open_create().await.unwrap());
    for (field, value) in [
        (FormField::Name, "Mug"),
        (FormField::Description, "Stoneware mug"),
        (FormField::Price, "4.5"),
        (FormField::Category, "Kitchen"),
        (FormField::Image, "https://example.com/mug.png"),
    ] {
        dashboard.edit_field(field, value).await.unwrap();
    }
    gateway.expect_create().return_ok(product("b", "Mug", 4.5));
    assert_eq!(dashboard.submit().await.unwrap(), SubmitOutcome::Saved);

    // Edit.
    assert!(dashboard.open_edit(ProductId::from("b")).await.unwrap());
    dashboard.edit_field(FormField::Price, "5.0").await.unwrap();
    gateway
        .expect_update(ProductId::from("b"))
        .return_ok(product("b", "Mug", 5.0));
    assert_eq!(dashboard.submit().await.unwrap(), SubmitOutcome::Saved);

    // Delete.
    gateway.expect_delete(ProductId::from("a")).return_ok();
    assert!(dashboard.delete(ProductId::from("a")).await.unwrap());

    let snapshot = dashboard.snapshot().await.unwrap();
    assert_eq!(snapshot.products.len(), 1);
    assert_eq!(snapshot.products[0].price, 5.0);

    assert_eq!(
        sink.messages(),
        vec![
            (Severity::Success, "Product created".to_string()),
            (Severity::Success, "Product updated".to_string()),
            (Severity::Success, "Product deleted".to_string()),
        ]
    );
    gateway.verify();

    system.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn shutdown_waits_for_the_controller_task() {
    let gateway = Arc::new(MockGateway::new());
    let sink = Arc::new(RecordingSink::new());
    let system = DashboardSystem::start(gateway, sink);

    system.shutdown().await.expect("clean shutdown");
}
