//! Demo: stocks a small cafe and walks through ordering and restocking.
//!
//! 1. One Latte uses all the milk, which is then low.
//! 2. Two Lattes need more milk than is left; nothing changes.
//! 3. Espresso and Americano each fit the beans alone, but not together.
//! 4. Restocking Bagels clears their low-stock flag.

use cafe_inventory::config::CafeConfig;
use cafe_inventory::lifecycle::{setup_tracing, CafeSystem};
use cafe_inventory::model::{
    CategoryCreate, MenuItemCreate, MenuItemPayload, OrderLine, RecipeLine, ResourceCreate, Unit,
};
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

fn resource(name: &str, unit: Unit, quantity: i64, minimum: i64) -> ResourceCreate {
    ResourceCreate {
        name: name.to_string(),
        unit,
        quantity: Decimal::from(quantity),
        minimum: Decimal::from(minimum),
        cost_per_unit: Decimal::ZERO,
        supplier: None,
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = CafeConfig::from_env();
    info!(?config, "Starting cafe demo");
    let system = CafeSystem::with_config(&config);

    // Catalog
    let milk = system
        .stock
        .create(resource("Milk", Unit::Ml, 240, 50))
        .await
        .map_err(|e| e.to_string())?;
    let beans = system
        .stock
        .create(resource("Coffee Beans", Unit::G, 30, 100))
        .await
        .map_err(|e| e.to_string())?;
    let bagels = system
        .stock
        .create(resource("Bagels", Unit::Pcs, 5, 20))
        .await
        .map_err(|e| e.to_string())?;

    let coffee = system
        .categories
        .create(CategoryCreate {
            name: "Coffee".to_string(),
            description: "Espresso based drinks".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;

    let latte = system
        .menu
        .create(MenuItemCreate {
            name: "Latte".to_string(),
            price: Decimal::new(450, 2),
            category: coffee,
            description: String::new(),
            recipe: vec![RecipeLine::new(milk, Decimal::from(240))],
        })
        .await
        .map_err(|e| e.to_string())?;
    let espresso = system
        .menu
        .create_from_payload(MenuItemPayload {
            name: "Espresso".to_string(),
            price: Decimal::new(300, 2),
            category: coffee,
            description: String::new(),
            ingredients: format!(r#"[{{"resourceId": {}, "quantity": 18}}]"#, beans.0),
        })
        .await
        .map_err(|e| e.to_string())?;
    let americano = system
        .menu
        .create_from_payload(MenuItemPayload {
            name: "Americano".to_string(),
            price: Decimal::new(350, 2),
            category: coffee,
            description: String::new(),
            ingredients: format!(r#"[{{"resourceId": {}, "quantity": "18"}}]"#, beans.0),
        })
        .await
        .map_err(|e| e.to_string())?;

    let demo_orders = [
        ("one_latte", vec![OrderLine::new(latte, 1)]),
        ("two_lattes", vec![OrderLine::new(latte, 2)]),
        (
            "espresso_and_americano",
            vec![OrderLine::new(espresso, 1), OrderLine::new(americano, 1)],
        ),
    ];
    let orders = &system.orders;
    for (name, lines) in demo_orders {
        let span = tracing::info_span!("order", demo = name);
        async move {
            match orders.place_order(lines).await {
                Ok(receipt) => info!(
                    order_id = %receipt.order_id,
                    processed_count = receipt.processed_count,
                    "Order accepted"
                ),
                Err(e) => warn!(error = %e, details = ?e, "Order rejected"),
            }
        }
        .instrument(span)
        .await;
    }

    match system.stock.low_stock().await {
        Ok(low) => {
            let names: Vec<_> = low.iter().map(|r| r.name.as_str()).collect();
            info!(?names, "Low stock after orders");
        }
        Err(e) => error!(error = %e, "Low stock query failed"),
    }

    let span = tracing::info_span!("restock", item = "bagels");
    async {
        match system.stock.restock(bagels, Decimal::from(30)).await {
            Ok(snapshot) => info!(
                current = %snapshot.current_quantity,
                minimum = %snapshot.minimum_quantity,
                low = snapshot.current_quantity <= snapshot.minimum_quantity,
                "Bagels restocked"
            ),
            Err(e) => error!(error = %e, "Restock failed"),
        }
    }
    .instrument(span)
    .await;

    match system.stock.snapshots().await {
        Ok(snapshots) => match serde_json::to_string_pretty(&snapshots) {
            Ok(json) => info!("Final stock:\n{}", json),
            Err(e) => error!(error = %e, "Could not render stock"),
        },
        Err(e) => error!(error = %e, "Stock listing failed"),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
