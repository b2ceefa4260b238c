//! # Generic Actor Server
//!
//! The [`ResourceActor`] owns one collection of records and processes requests
//! strictly one at a time, so every mutation (including a full restore) is atomic
//! from the point of view of any other client of the same store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::sequencer::IdentitySequencer;
use crate::snapshot::StoreSnapshot;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// This is the "server" half: it owns the records, their insertion order, the
/// identifier sequencer and the receiving end of the request channel. The
/// matching [`ResourceClient`] is returned from [`ResourceActor::new`].
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass the store's collaborators to `actor.run(context)`.
/// 3.  **Run**: spawn the future returned by `run` on the Tokio runtime.
///
/// # Operations
///
/// * **Create** - builds the record with the sequencer's *next* id, checks it
///   against every live record, runs `on_create`, inserts it, and only then
///   advances the sequencer. A rejected create does not burn an id.
/// * **Put** - same hooks, but under a caller-supplied id; an existing record with
///   that id is overwritten in place and keeps its position.
/// * **Update** - runs `on_update` on a clone and swaps the clone in on success.
/// * **Delete** - runs `on_delete`, then removes the record.
/// * **Snapshot** / **Restore** - copy out / replace the records and sequencer.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    sequencer: IdentitySequencer,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` whose first issued id is `1`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_sequencer(buffer_size, IdentitySequencer::default())
    }

    /// Creates a new `ResourceActor` that issues ids from `sequencer`.
    pub fn with_sequencer(
        buffer_size: usize,
        sequencer: IdentitySequencer,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Item" rather than "contract_api::model::item::Item"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            sequencer,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, next_id = self.sequencer.peek(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &context).await;
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle(&mut self, msg: ResourceRequest<T>, ctx: &T::Context) {
        // A dropped receiver only means the caller gave up waiting.
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                let _ = respond_to.send(self.create(params, ctx).await);
            }
            ResourceRequest::Put {
                id,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(self.put(id, params, ctx).await);
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type = self.entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::List { respond_to } => {
                debug!(entity_type = self.entity_type, size = self.store.len(), "List");
                let _ = respond_to.send(Ok(self.list()));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                let _ = respond_to.send(self.update(id, update, ctx).await);
            }
            ResourceRequest::Delete { id, respond_to } => {
                let _ = respond_to.send(self.delete(id, ctx).await);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                let _ = respond_to.send(self.action(id, action, ctx).await);
            }
            ResourceRequest::Snapshot { respond_to } => {
                let snapshot = self.snapshot();
                debug!(
                    entity_type = self.entity_type,
                    size = snapshot.len(),
                    next_id = snapshot.next_id(),
                    "Snapshot"
                );
                let _ = respond_to.send(Ok(snapshot));
            }
            ResourceRequest::Restore {
                snapshot,
                respond_to,
            } => {
                self.restore(snapshot);
                let _ = respond_to.send(Ok(()));
            }
        }
    }

    async fn create(&mut self, params: T::Create, ctx: &T::Context) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");
        let id = T::Id::from(self.sequencer.peek());

        let item = self.build(id.clone(), params, ctx).await?;
        self.sequencer.next();
        self.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    async fn put(
        &mut self,
        id: T::Id,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?params, "Put");

        let item = self.build(id.clone(), params, ctx).await?;
        let replaced = self.insert(id.clone(), item.clone());
        info!(entity_type, %id, replaced, size = self.store.len(), "Stored");
        Ok(item)
    }

    /// Runs the create-side hooks. Conflict checks skip a record with the same id
    /// so that `put` can overwrite.
    async fn build(
        &self,
        id: T::Id,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::entity(e)
        })?;

        for (existing_id, existing) in &self.store {
            if *existing_id == id {
                continue;
            }
            if let Err(e) = item.check_conflict(existing) {
                warn!(entity_type, %existing_id, error = %e, "Conflict");
                return Err(FrameworkError::entity(e));
            }
        }

        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::entity(e));
        }
        Ok(item)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?update, "Update");
        let Some(current) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut draft = current.clone();
        if let Err(e) = draft.on_update(update, ctx).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::entity(e));
        }
        *current = draft.clone();
        info!(entity_type, %id, "Updated");
        Ok(draft)
    }

    async fn delete(&mut self, id: T::Id, ctx: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, "Delete");
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::entity(e));
        }
        self.store.remove(&id);
        self.order.retain(|existing| *existing != id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?action, "Action");
        let Some(current) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut draft = current.clone();
        match draft.handle_action(action, ctx).await {
            Ok(result) => {
                *current = draft;
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(FrameworkError::entity(e))
            }
        }
    }

    fn list(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.store.get(id))
            .cloned()
            .collect()
    }

    fn snapshot(&self) -> StoreSnapshot<T> {
        let entries = self
            .order
            .iter()
            .filter_map(|id| self.store.get(id).map(|item| (id.clone(), item.clone())))
            .collect();
        StoreSnapshot::new(entries, self.sequencer.peek())
    }

    fn restore(&mut self, snapshot: StoreSnapshot<T>) {
        let (entries, next_id) = snapshot.into_parts();
        self.store.clear();
        self.order.clear();
        for (id, item) in entries {
            self.insert(id, item);
        }
        self.sequencer.reset(next_id);
        info!(
            entity_type = self.entity_type,
            size = self.store.len(),
            next_id,
            "Restored"
        );
    }

    /// Returns `true` when an existing record was replaced.
    fn insert(&mut self, id: T::Id, item: T) -> bool {
        let replaced = self.store.insert(id.clone(), item).is_some();
        if !replaced {
            self.order.push(id);
        }
        replaced
    }
}
