use crate::model::{Resource, ResourceCreate, ResourceId, ResourceSnapshot, ResourceUpdate};
use crate::resource_actor::{ResourceAction, ResourceActionResult, ResourceError};
use crate::stock::DeductionPlan;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

/// Client for interacting with the Resource actor.
#[derive(Clone)]
pub struct StockClient {
    inner: ResourceClient<Resource>,
}

impl StockClient {
    pub fn new(inner: ResourceClient<Resource>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Resource> for StockClient {
    type Error = ResourceError;

    fn inner(&self) -> &ResourceClient<Resource> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ResourceError::NotFound(id),
            other => other
                .downcast_entity::<ResourceError>()
                .unwrap_or_else(|e| ResourceError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl StockClient {
    #[instrument(skip(self))]
    pub async fn create(&self, params: ResourceCreate) -> Result<ResourceId, ResourceError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ResourceId,
        update: ResourceUpdate,
    ) -> Result<Resource, ResourceError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Current quantity of one resource.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ResourceId) -> Result<Decimal, ResourceError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ResourceAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ResourceActionResult::CheckStock(quantity) => Ok(quantity),
            other => Err(ResourceError::ActorCommunicationError(format!(
                "unexpected result for CheckStock: {:?}",
                other
            ))),
        }
    }

    /// Adds `quantity` to a resource and returns its new snapshot.
    #[instrument(skip(self))]
    pub async fn restock(
        &self,
        id: ResourceId,
        quantity: Decimal,
    ) -> Result<ResourceSnapshot, ResourceError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ResourceAction::Restock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ResourceActionResult::Restock(resource) => {
                info!(%id, quantity = %resource.quantity, "Restocked");
                Ok(resource.snapshot())
            }
            other => Err(ResourceError::ActorCommunicationError(format!(
                "unexpected result for Restock: {:?}",
                other
            ))),
        }
    }

    /// Snapshots of every resource, ordered by id.
    #[instrument(skip(self))]
    pub async fn snapshots(&self) -> Result<Vec<ResourceSnapshot>, ResourceError> {
        let mut resources = self.list().await?;
        resources.sort_by_key(|r| r.id);
        Ok(resources.iter().map(Resource::snapshot).collect())
    }

    /// Resources at or below their minimum, ordered by id.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<ResourceSnapshot>, ResourceError> {
        let mut low: Vec<Resource> = self.list().await?.into_iter().filter(Resource::is_low).collect();
        low.sort_by_key(|r| r.id);
        debug!(count = low.len(), "Low stock");
        Ok(low.iter().map(Resource::snapshot).collect())
    }

    /// Applies a validated plan as one all-or-nothing transaction and returns the
    /// number of resources decremented.
    ///
    /// Fails with `ConcurrentModification` if any resource no longer has its planned
    /// amount, and with `NotFound` if one was deleted. Either way nothing is deducted.
    #[instrument(skip(self, plan), fields(resources = plan.len()))]
    pub async fn apply_plan(&self, plan: DeductionPlan) -> Result<usize, ResourceError> {
        if plan.is_empty() {
            return Ok(0);
        }
        let results = self
            .inner
            .transact(plan.into_actions())
            .await
            .map_err(Self::map_error)?;
        info!(updated = results.len(), "Plan applied");
        Ok(results.len())
    }
}
