use crate::menu_actor::MenuError;
use crate::model::{
    parse_recipe_lines, MenuItem, MenuItemCreate, MenuItemId, MenuItemPayload, MenuItemUpdate,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            other => other
                .downcast_entity::<MenuError>()
                .unwrap_or_else(|e| MenuError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Creates a menu item from the admin form, parsing its ingredients string first.
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create_from_payload(
        &self,
        payload: MenuItemPayload,
    ) -> Result<MenuItemId, MenuError> {
        let recipe = parse_recipe_lines(&payload.ingredients)?;
        self.create(MenuItemCreate {
            name: payload.name,
            price: payload.price,
            category: payload.category,
            description: payload.description,
            recipe,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_availability(
        &self,
        id: MenuItemId,
        available: bool,
    ) -> Result<MenuItem, MenuError> {
        self.update(
            id,
            MenuItemUpdate {
                available: Some(available),
                ..Default::default()
            },
        )
        .await
    }
}
