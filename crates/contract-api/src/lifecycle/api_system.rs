use super::{seed, SystemError};
use crate::auth::{AuthError, SessionTokenIssuer};
use crate::clients::{CredentialClient, ItemClient, UserClient};
use crate::config::StoreConfig;
use crate::credential_actor::{self, CredentialStore};
use crate::item_actor::{self, Clock, ItemError};
use crate::model::{
    Credential, Item, ItemCreate, ItemId, ItemUpdate, Secret, User, UserId, UserRegistration,
};
use crate::user_actor::{self, UserError};
use crate::validation;
use resource_framework::{ActorClient, StoreSnapshot};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Store contents captured right after seeding.
struct Baseline {
    items: StoreSnapshot<Item>,
    users: StoreSnapshot<User>,
    credentials: StoreSnapshot<Credential>,
}

/// The running service core: item, user, and credential stores plus the token
/// issuer, behind one facade.
///
/// Constructed once per process and shared by reference (usually in an `Arc`).
pub struct ApiSystem {
    items: ItemClient,
    users: UserClient,
    credentials: CredentialClient,
    issuer: SessionTokenIssuer,
    baseline: Baseline,
    gate: RwLock<()>,
    handles: Vec<JoinHandle<()>>,
}

impl ApiSystem {
    /// Starts the stores with the wall clock.
    pub async fn start(config: &StoreConfig) -> Result<Self, SystemError> {
        Self::start_with_clock(config, item_actor::system_clock()).await
    }

    /// Starts the stores, seeds them if configured, and captures the reset
    /// baseline.
    pub async fn start_with_clock(config: &StoreConfig, clock: Clock) -> Result<Self, SystemError> {
        let buffer = config.channel_buffer;

        // 1. Create actors
        let (item_actor, items) = item_actor::new(buffer);
        let (user_actor, users) = user_actor::new(buffer);
        let (credential_actor, credentials) = credential_actor::new(buffer);

        // 2. Start them with their context
        let handles = vec![
            tokio::spawn(item_actor.run(clock)),
            tokio::spawn(user_actor.run(())),
            tokio::spawn(credential_actor.run(())),
        ];

        // 3. Seed
        if config.seed_data {
            for params in seed::items() {
                items
                    .create_item(params)
                    .await
                    .map_err(|e| SystemError::Seed(e.to_string()))?;
            }
            for registration in seed::users() {
                register(&users, &credentials, registration)
                    .await
                    .map_err(|e| SystemError::Seed(e.to_string()))?;
            }
        }

        // 4. Capture the baseline
        let baseline = Baseline {
            items: items
                .snapshot()
                .await
                .map_err(|e| SystemError::Snapshot(e.to_string()))?,
            users: users
                .snapshot()
                .await
                .map_err(|e| SystemError::Snapshot(e.to_string()))?,
            credentials: credentials
                .snapshot()
                .await
                .map_err(|e| SystemError::Snapshot(e.to_string()))?,
        };
        info!(
            items = baseline.items.len(),
            users = baseline.users.len(),
            "System started"
        );

        let issuer = SessionTokenIssuer::new(users.clone(), Arc::new(credentials.clone()));

        Ok(Self {
            items,
            users,
            credentials,
            issuer,
            baseline,
            gate: RwLock::new(()),
            handles,
        })
    }

    // --- Items ---

    pub async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        let _shared = self.gate.read().await;
        self.items.list().await
    }

    pub async fn get_item(&self, id: ItemId) -> Result<Item, ItemError> {
        let _shared = self.gate.read().await;
        self.items.get(id).await
    }

    pub async fn create_item(&self, params: ItemCreate) -> Result<Item, ItemError> {
        let _shared = self.gate.read().await;
        self.items.create_item(params).await
    }

    pub async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, ItemError> {
        let _shared = self.gate.read().await;
        self.items.update_item(id, update).await
    }

    pub async fn delete_item(&self, id: ItemId) -> Result<(), ItemError> {
        let _shared = self.gate.read().await;
        self.items.delete(id).await
    }

    // --- Users ---

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        let _shared = self.gate.read().await;
        self.users.list().await
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        let _shared = self.gate.read().await;
        self.users.get(id).await
    }

    /// Creates the user and stores its secret as one step; readers never see
    /// a user without a credential.
    pub async fn create_user(&self, registration: UserRegistration) -> Result<User, UserError> {
        let _exclusive = self.gate.write().await;
        register(&self.users, &self.credentials, registration).await
    }

    // --- Auth ---

    pub async fn login(&self, username: &str, secret: &Secret) -> Result<&'static str, AuthError> {
        let _shared = self.gate.read().await;
        self.issuer.login(username, secret).await
    }

    pub fn authorize(&self, header: Option<&str>) -> Result<(), AuthError> {
        self.issuer.authorize(header)
    }

    // --- Reset ---

    /// Puts every store back to its post-startup contents and next id.
    pub async fn reset_all(&self) -> Result<(), SystemError> {
        let _exclusive = self.gate.write().await;
        info!("Resetting state");
        self.items
            .restore(&self.baseline.items)
            .await
            .map_err(|e| SystemError::Reset(e.to_string()))?;
        self.users
            .restore(&self.baseline.users)
            .await
            .map_err(|e| SystemError::Reset(e.to_string()))?;
        self.credentials
            .restore(&self.baseline.credentials)
            .await
            .map_err(|e| SystemError::Reset(e.to_string()))?;
        Ok(())
    }

    /// Drops every client so the actors exit, then waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        let Self {
            items,
            users,
            credentials,
            issuer,
            handles,
            ..
        } = self;
        drop(issuer);
        drop(items);
        drop(users);
        drop(credentials);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Validates the password, creates the user, then stores the secret. If the
/// secret cannot be stored the user is removed again.
async fn register(
    users: &UserClient,
    credentials: &CredentialClient,
    registration: UserRegistration,
) -> Result<User, UserError> {
    validation::password(&registration.password)?;
    let (profile, secret) = registration.into_parts();

    let user = users.create_user(profile).await?;
    if let Err(e) = credentials.set_secret(user.id, secret).await {
        warn!(user_id = %user.id, error = %e, "Storing credential failed, removing user");
        if let Err(rollback) = users.delete(user.id).await {
            error!(user_id = %user.id, error = %rollback, "Rollback failed");
        }
        return Err(UserError::Store(e.to_string()));
    }
    info!(user_id = %user.id, username = %user.username, "Registered");
    Ok(user)
}
