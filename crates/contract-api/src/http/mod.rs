//! HTTP surface of the service.
//!
//! Handlers translate requests into [`ApiSystem`](crate::lifecycle::ApiSystem)
//! calls and map each error kind to a status code; see [`error::ApiError`].

pub mod api;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod types;

pub use api::build_router;
pub use error::ApiError;
pub use server::ApiServer;
pub use state::AppState;
