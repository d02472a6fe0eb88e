//! End-to-end walkthrough of the cart and checkout flow.
//!
//! Loads the static JSON fixtures, fills a cart, and drives a full
//! checkout against the mock gateway, printing the receipt at the end.

use anyhow::{anyhow, Result};
use likha_commerce::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

static PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");
static ARTISANS_JSON: &str = include_str!("../fixtures/artisans.json");

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let catalog = Catalog::from_json(PRODUCTS_JSON)?;
    let artisans = ArtisanDirectory::from_json(ARTISANS_JSON)?;
    tracing::info!(products = catalog.len(), "catalog fixtures loaded");

    // Fill the cart: two totes and a bag of coffee.
    let mut store = CartStore::new();
    let tote = catalog
        .get(&ProductId::new("abaca-tote"))
        .ok_or_else(|| anyhow!("abaca-tote missing from fixture"))?;
    let beans = catalog
        .get(&ProductId::new("barako-beans"))
        .ok_or_else(|| anyhow!("barako-beans missing from fixture"))?;
    store.add_item(tote);
    store.add_item(tote);
    store.add_item(beans);

    println!("Cart ({} items):", store.item_count());
    for item in store.items() {
        let by = artisans
            .name_of(&item.artisan_id)
            .unwrap_or("unknown artisan");
        println!(
            "  {} x {} by {} @ {} = {}",
            item.quantity,
            item.name,
            by,
            item.unit_price,
            item.line_total()
        );
    }
    println!("Cart total: {}\n", store.total());

    // Walk the checkout stages.
    let mut flow = CheckoutFlow::new();
    flow.proceed_to_address(&store)?;
    flow.submit_address(ShippingAddress {
        full_name: "Juan Dela Cruz".to_string(),
        line1: "123 Rizal St".to_string(),
        line2: None,
        city: "Manila".to_string(),
        province: "NCR".to_string(),
        postal_code: Some("1000".to_string()),
        phone: "0912 345 6789".to_string(),
        email: "juan@example.ph".to_string(),
    })?;
    flow.select_payment(PaymentDetails::Cash)?;

    let gateway = MockPaymentGateway::with_delay(Duration::from_millis(300));
    flow.confirm(&store, &gateway).await?;

    let order = flow.view_receipt()?;
    println!("{}", order.receipt_text());
    println!("Exported order record:\n{}", order.export_json()?);

    flow.finish(&mut store)?;
    tracing::info!(cart_empty = store.is_empty(), "back to shop");

    Ok(())
}
