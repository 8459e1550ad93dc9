use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Canister {
    id: u32,
    label: String,
    grams: u32,
}

#[derive(Debug)]
struct CanisterCreate {
    label: String,
    grams: u32,
}

#[derive(Debug)]
struct CanisterUpdate {
    label: Option<String>,
    grams: Option<u32>,
}

#[derive(Debug)]
enum CanisterAction {
    Take(u32),
    Fill(u32),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum CanisterError {
    #[error("not enough in {label}: wanted {wanted}, have {have}")]
    Short { label: String, wanted: u32, have: u32 },
    #[error("label must not be empty")]
    EmptyLabel,
}

#[async_trait]
impl ActorEntity for Canister {
    type Id = u32;
    type Create = CanisterCreate;
    type Update = CanisterUpdate;
    type Action = CanisterAction;
    type ActionResult = u32;
    type Context = ();
    type Error = CanisterError;

    fn from_create_params(id: u32, params: CanisterCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            grams: params.grams,
        })
    }

    async fn on_update(
        &mut self,
        update: CanisterUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        // Applies grams before validating the label, so a rejected update
        // exercises the actor's copy-on-update behaviour.
        if let Some(grams) = update.grams {
            self.grams = grams;
        }
        if let Some(label) = update.label {
            if label.is_empty() {
                return Err(CanisterError::EmptyLabel);
            }
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CanisterAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            CanisterAction::Take(n) => {
                if n > self.grams {
                    return Err(CanisterError::Short {
                        label: self.label.clone(),
                        wanted: n,
                        have: self.grams,
                    });
                }
                self.grams -= n;
            }
            CanisterAction::Fill(n) => self.grams += n,
        }
        Ok(self.grams)
    }
}

async fn canister(
    client: &actor_framework::ResourceClient<Canister>,
    label: &str,
    grams: u32,
) -> u32 {
    client
        .create(CanisterCreate {
            label: label.into(),
            grams,
        })
        .await
        .unwrap()
}

/// Routes actor logs to the test harness. Run with `RUST_LOG=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    init_tracing();
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let id = canister(&client, "beans", 30).await;
    assert_eq!(id, 1);

    let left = client
        .perform_action(id, CanisterAction::Take(12))
        .await
        .unwrap();
    assert_eq!(left, 18);

    let updated = client
        .update(
            id,
            CanisterUpdate {
                label: Some("espresso beans".into()),
                grams: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "espresso beans");
    assert_eq!(updated.grams, 18);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_returns_every_entity() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    canister(&client, "milk", 1000).await;
    canister(&client, "oat milk", 500).await;

    let mut labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.label)
        .collect();
    labels.sort();
    assert_eq!(labels, vec!["milk", "oat milk"]);
}

#[tokio::test]
async fn test_rejected_update_leaves_entity_unchanged() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let id = canister(&client, "sugar", 100).await;
    let result = client
        .update(
            id,
            CanisterUpdate {
                label: Some(String::new()),
                grams: Some(0),
            },
        )
        .await;
    assert!(result.is_err());

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.grams, 100);
    assert_eq!(stored.label, "sugar");
}

#[tokio::test]
async fn test_transaction_commits_all_steps() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let beans = canister(&client, "beans", 30).await;
    let milk = canister(&client, "milk", 240).await;

    let results = client
        .transact(vec![
            (beans, CanisterAction::Take(18)),
            (milk, CanisterAction::Take(200)),
            (beans, CanisterAction::Take(10)),
        ])
        .await
        .unwrap();
    assert_eq!(results, vec![12, 40, 2]);

    assert_eq!(client.get(beans).await.unwrap().unwrap().grams, 2);
    assert_eq!(client.get(milk).await.unwrap().unwrap().grams, 40);
}

#[tokio::test]
async fn test_transaction_rolls_back_on_entity_error() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let beans = canister(&client, "beans", 30).await;
    let milk = canister(&client, "milk", 240).await;

    // Two 18g steps on the same canister: the second sees the staged 12g.
    let err = client
        .transact(vec![
            (milk, CanisterAction::Take(240)),
            (beans, CanisterAction::Take(18)),
            (beans, CanisterAction::Take(18)),
        ])
        .await
        .unwrap_err();

    let entity_err = err.downcast_entity::<CanisterError>().unwrap();
    assert_eq!(
        entity_err,
        CanisterError::Short {
            label: "beans".into(),
            wanted: 18,
            have: 12
        }
    );

    assert_eq!(client.get(beans).await.unwrap().unwrap().grams, 30);
    assert_eq!(client.get(milk).await.unwrap().unwrap().grams, 240);
}

#[tokio::test]
async fn test_transaction_rolls_back_on_missing_entity() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let milk = canister(&client, "milk", 240).await;
    let err = client
        .transact(vec![
            (milk, CanisterAction::Fill(10)),
            (99, CanisterAction::Take(1)),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "99"));
    assert_eq!(client.get(milk).await.unwrap().unwrap().grams, 240);
}

#[tokio::test]
async fn test_failed_single_action_keeps_state() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let id = canister(&client, "cocoa", 5).await;
    assert!(client
        .perform_action(id, CanisterAction::Take(6))
        .await
        .is_err());
    assert_eq!(client.get(id).await.unwrap().unwrap().grams, 5);
}

#[tokio::test]
async fn test_concurrent_transactions_never_overdraw() {
    init_tracing();
    let (actor, client) = ResourceActor::new(64);
    tokio::spawn(actor.run(()));

    let beans = canister(&client, "beans", 100).await;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.transact(vec![(beans, CanisterAction::Take(18))]).await
        }));
    }

    let mut committed = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            committed += 1;
        }
    }

    // 100 / 18 = 5 full shots
    assert_eq!(committed, 5);
    assert_eq!(client.get(beans).await.unwrap().unwrap().grams, 10);
}
