//! Typed wrappers around [`ResourceClient`](resource_framework::ResourceClient),
//! one per store. Generic reads come from
//! [`ActorClient`](resource_framework::ActorClient); each wrapper adds the
//! operations specific to its record.

pub mod credential_client;
pub mod item_client;
pub mod user_client;

pub use credential_client::CredentialClient;
pub use item_client::ItemClient;
pub use user_client::UserClient;
