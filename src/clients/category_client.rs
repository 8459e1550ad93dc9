use crate::category_actor::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            other => other
                .downcast_entity::<CategoryError>()
                .unwrap_or_else(|e| CategoryError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create(&self, params: CategoryCreate) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
