//! # Product Dashboard
//!
//! Scripted walk through the dashboard controller against a live product
//! API: load the catalog, create a product through the dialog flow, edit
//! it, delete it. Remote failures are reported through the notification
//! sink and the walk continues; a missing backend never crashes the
//! binary.
//!
//! Point it at an API with `PRODUCT_API_URL`, e.g.:
//!
//! ```bash
//! PRODUCT_API_URL=http://localhost:3000/api RUST_LOG=info cargo run
//! ```

use dashboard_app::config::DashboardConfig;
use dashboard_app::lifecycle::{setup_tracing, DashboardSystem};
use dashboard_core::{FormField, SubmitOutcome};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = DashboardConfig::from_env();
    info!("Starting product dashboard");
    let system = DashboardSystem::from_config(&config);
    // Borrow rather than clone: shutdown relies on every handle being
    // dropped before the controller task is awaited.
    let dashboard = &system.dashboard;

    // Initial read-all; a failure is reported and leaves the list empty.
    let loaded = async { dashboard.load_products().await.map_err(|e| e.to_string()) }
        .instrument(tracing::info_span!("initial_load"))
        .await?;
    if !loaded {
        warn!("Continuing with an empty catalog");
    }

    // Create a product through the dialog flow.
    let created = async {
        dashboard.open_create().await.map_err(|e| e.to_string())?;
        for (field, value) in [
            (FormField::Name, "Walnut Desk Lamp"),
            (FormField::Description, "Warm light, solid walnut base"),
            (FormField::Price, "49.90"),
            (FormField::Category, "Lighting"),
            (FormField::Image, "https://example.com/walnut-lamp.png"),
        ] {
            dashboard
                .edit_field(field, value)
                .await
                .map_err(|e| e.to_string())?;
        }
        dashboard.submit().await.map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("create_flow"))
    .await?;

    if created != SubmitOutcome::Saved {
        // The failure was already reported; drop the draft and move on.
        dashboard.cancel().await.map_err(|e| e.to_string())?;
    }

    let snapshot = dashboard.snapshot().await.map_err(|e| e.to_string())?;
    info!(products = snapshot.products.len(), "Catalog after create");

    // Edit and then delete the product we just created, if it made it in.
    if let Some(product) = snapshot.products.last() {
        let id = product.id.clone();

        let edited = async {
            dashboard
                .open_edit(id.clone())
                .await
                .map_err(|e| e.to_string())?;
            dashboard
                .edit_field(FormField::Price, "44.90")
                .await
                .map_err(|e| e.to_string())?;
            dashboard.submit().await.map_err(|e| e.to_string())
        }
        .instrument(tracing::info_span!("edit_flow"))
        .await?;

        if edited != SubmitOutcome::Saved {
            dashboard.cancel().await.map_err(|e| e.to_string())?;
        }

        async { dashboard.delete(id).await.map_err(|e| e.to_string()) }
            .instrument(tracing::info_span!("delete_flow"))
            .await?;
    }

    system.shutdown().await?;
    info!("Dashboard walk completed");
    Ok(())
}
