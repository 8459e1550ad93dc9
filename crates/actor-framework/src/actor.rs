//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity kind and processes requests
//! sequentially, so no request ever observes another one half-applied.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// Each actor runs in its own Tokio task and handles one message at a time. The store
/// needs no `Mutex`: exclusive ownership inside the task is the lock. Different actors
/// run in parallel.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Bin { id: u32, grams: u32 }
/// #[derive(Debug)] struct BinCreate { grams: u32 }
/// #[derive(Debug)] struct BinUpdate;
/// #[derive(Debug)] struct Take(u32);
/// #[derive(Debug, thiserror::Error)] #[error("empty")] struct Empty;
///
/// #[async_trait]
/// impl ActorEntity for Bin {
///     type Id = u32;
///     type Create = BinCreate;
///     type Update = BinUpdate;
///     type Action = Take;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = Empty;
///
///     fn from_create_params(id: u32, p: BinCreate) -> Result<Self, Empty> { Ok(Self { id, grams: p.grams }) }
///     async fn on_update(&mut self, _: BinUpdate, _: &()) -> Result<(), Empty> { Ok(()) }
///     async fn handle_action(&mut self, take: Take, _: &()) -> Result<u32, Empty> {
///         self.grams = self.grams.checked_sub(take.0).ok_or(Empty)?;
///         Ok(self.grams)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Bin>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let a = client.create(BinCreate { grams: 30 }).await.unwrap();
///     let b = client.create(BinCreate { grams: 5 }).await.unwrap();
///
///     // The second step fails, so the first one is rolled back too.
///     assert!(client.transact(vec![(a, Take(18)), (b, Take(18))]).await.is_err());
///     assert_eq!(client.get(a).await.unwrap().unwrap().grams, 30);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: generate the next id, build via `from_create_params`, run `on_create`, store.
/// * **Get** / **List**: return clones of stored entities.
/// * **Update**: run `on_update` on the stored entity, return the new state.
/// * **Delete**: run `on_delete`, then remove.
/// * **Action**: run `handle_action` on the stored entity.
/// * **Transaction**: stage clones of every touched entity, run each action against
///   its staged clone in order, and write the staged clones back only if all actions
///   succeeded.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Resource" instead of "cafe_inventory::model::resource::Resource"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Hooks validate as they go; work on a copy so a rejected update
                    // cannot leave a half-applied entity behind.
                    let mut updated = item.clone();
                    if let Err(e) = updated.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), updated.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    // Single actions are one-step transactions: a failing action
                    // must not leave partial state on the stored entity.
                    let result = self
                        .transact(vec![(id.clone(), action)], &context)
                        .await
                        .map(|mut results| results.remove(0));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Transaction {
                    actions,
                    respond_to,
                } => {
                    let steps = actions.len();
                    debug!(entity_type, steps, ?actions, "Transaction");
                    let result = self.transact(actions, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, steps, "Transaction committed"),
                        Err(e) => warn!(entity_type, steps, error = %e, "Transaction rolled back"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Applies `actions` in order against staged copies and commits them together.
    ///
    /// The store is only written after the last action succeeded.
    async fn transact(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: HashMap<T::Id, T> = HashMap::with_capacity(actions.len());
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => match self.store.get(&id) {
                    Some(current) => entry.insert(current.clone()),
                    None => return Err(FrameworkError::NotFound(id.to_string())),
                },
            };
            let result = item
                .handle_action(action, context)
                .await
                .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
            results.push(result);
        }

        self.store.extend(staged);
        Ok(results)
    }
}
