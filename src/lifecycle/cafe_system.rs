use crate::clients::{CategoryClient, MenuClient, OrderClient, StockClient};
use crate::config::CafeConfig;
use tracing::{error, info};

/// Owns the running actors of the cafe and the clients used to reach them.
///
/// # Architecture
///
/// - **Resource actor**: inventory and stock movements (`Context = ()`)
/// - **Category actor**: menu sections (`Context = ()`)
/// - **Menu actor**: menu items and recipes (`Context = (StockClient, CategoryClient)`)
/// - **Order actor**: placed orders (`Context = ()`); placement itself runs in
///   [`OrderClient`], which holds the menu and stock clients
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::new();
///
/// let milk = system.stock.create(milk_params).await?;
/// let latte = system.menu.create(latte_params).await?;
/// let receipt = system.orders.place_order(vec![OrderLine::new(latte, 1)]).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    pub stock: StockClient,
    pub categories: CategoryClient,
    pub menu: MenuClient,
    pub orders: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Starts every actor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&CafeConfig::default())
    }

    /// Starts every actor. Must be called inside a Tokio runtime.
    pub fn with_config(config: &CafeConfig) -> Self {
        let (resource_actor, stock) = crate::resource_actor::new(config.actor_buffer);
        let (category_actor, categories) = crate::category_actor::new(config.actor_buffer);
        let (menu_actor, menu) = crate::menu_actor::new(config.actor_buffer);
        let (order_actor, orders) = crate::order_actor::new(
            config.actor_buffer,
            menu.clone(),
            stock.clone(),
            config.order_max_attempts,
        );

        let resource_handle = tokio::spawn(resource_actor.run(()));
        let category_handle = tokio::spawn(category_actor.run(()));
        let menu_handle = tokio::spawn(menu_actor.run((stock.clone(), categories.clone())));
        let order_handle = tokio::spawn(order_actor.run(()));

        info!(
            actor_buffer = config.actor_buffer,
            order_max_attempts = config.order_max_attempts,
            "Cafe system started"
        );

        Self {
            stock,
            categories,
            menu,
            orders,
            handles: vec![order_handle, menu_handle, category_handle, resource_handle],
        }
    }

    /// Drops every client and waits for the actors to drain their mailboxes and stop.
    ///
    /// The menu actor holds stock and category clients as its context, and the order
    /// client holds menu and stock clients, so the actors stop in dependency order:
    /// orders and menu first, then categories and resources.
    ///
    /// Clients cloned out of the system keep their actors alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cafe system...");

        drop(self.orders);
        drop(self.menu);
        drop(self.categories);
        drop(self.stock);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cafe system shutdown complete.");
        Ok(())
    }
}

impl Default for CafeSystem {
    fn default() -> Self {
        Self::new()
    }
}
