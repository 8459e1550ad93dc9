use crate::clients::{MenuClient, StockClient};
use crate::model::{
    MenuItem, MenuItemId, Order, OrderCreate, OrderId, OrderLine, OrderReceipt, Resource,
    ResourceId,
};
use crate::order_actor::OrderError;
use crate::resource_actor::ResourceError;
use crate::stock::{check_lines, plan_order, DeductionPlan};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

/// Client for placing and looking up orders.
///
/// Placement runs here rather than in an `Order` hook: the caller's task reads the menu
/// and stock, plans the deduction, and sends it to the resource actor as one
/// transaction. Only the finished order is sent to the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menu: MenuClient,
    stock: StockClient,
    max_attempts: u32,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        menu: MenuClient,
        stock: StockClient,
        max_attempts: u32,
    ) -> Self {
        Self {
            inner,
            menu,
            stock,
            max_attempts: max_attempts.max(1),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl OrderClient {
    /// Checks an order against current stock without changing anything.
    ///
    /// Loads the referenced menu items and the resources their recipes use, then runs
    /// [`plan_order`] on those snapshots.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn validate(&self, lines: &[OrderLine]) -> Result<DeductionPlan, OrderError> {
        check_lines(lines)?;

        let mut menu: HashMap<MenuItemId, MenuItem> = HashMap::new();
        for line in lines {
            if menu.contains_key(&line.menu_item_id) {
                continue;
            }
            if let Some(item) = self.menu.get(line.menu_item_id).await? {
                menu.insert(item.id, item);
            }
        }

        let mut resources: HashMap<ResourceId, Resource> = HashMap::new();
        for recipe_line in menu.values().flat_map(|item| item.recipe.iter()) {
            if resources.contains_key(&recipe_line.resource_id) {
                continue;
            }
            if let Some(resource) = self.stock.get(recipe_line.resource_id).await? {
                resources.insert(resource.id, resource);
            }
        }

        debug!(
            menu_items = menu.len(),
            resources = resources.len(),
            "Snapshot loaded"
        );
        plan_order(lines, &menu, &resources)
    }

    /// Validates and deducts an order, then records it.
    ///
    /// If the deduction loses a race with another order (`ConcurrentModification`), the
    /// whole order is validated again, up to the configured number of attempts. The
    /// retry usually ends in `InsufficientStock`. Every validation or deduction error
    /// leaves stock untouched.
    ///
    /// The order is recorded after its stock has been deducted. If only that write
    /// fails, the result is an `ActorCommunicationError` whose message starts with
    /// `stock deducted`: the deduction stands, so the order must not be placed again.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn place_order(&self, lines: Vec<OrderLine>) -> Result<OrderReceipt, OrderError> {
        let mut attempt = 1;
        let resources_updated = loop {
            let plan = self.validate(&lines).await?;
            match self.stock.apply_plan(plan).await {
                Ok(updated) => break updated,
                Err(ResourceError::ConcurrentModification { resource_id, .. })
                    if attempt < self.max_attempts =>
                {
                    warn!(attempt, %resource_id, "Stock changed during deduction, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        };

        let processed_count = lines.len();
        let order_id = self
            .inner
            .create(OrderCreate {
                lines,
                resources_updated,
            })
            .await
            .map_err(|e| {
                error!(resources_updated, error = %e, "Stock deducted but order not recorded");
                OrderError::ActorCommunicationError(format!(
                    "stock deducted but order not recorded: {}",
                    e
                ))
            })?;

        info!(%order_id, processed_count, resources_updated, attempt, "Order placed");
        Ok(OrderReceipt {
            order_id,
            processed_count,
            resources_updated,
        })
    }

    /// Every recorded order, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}
