//! # System Lifecycle
//!
//! Starts the three store actors, wires them together, seeds them, and keeps
//! the post-seed snapshots that [`ApiSystem::reset_all`] rewinds to.
//!
//! ```rust
//! use contract_api::config::StoreConfig;
//! use contract_api::lifecycle::ApiSystem;
//! use contract_api::model::ItemCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = ApiSystem::start(&StoreConfig::default()).await?;
//!
//!     let item = system.create_item(ItemCreate::new("A", None)).await?;
//!     assert_eq!(item.id.0, 3);
//!
//!     system.reset_all().await?;
//!     assert_eq!(system.list_items().await?.len(), 2);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency across stores
//!
//! Each store is consistent on its own because its actor handles one request at
//! a time. Registering a user writes two stores and a reset writes all three, so
//! `ApiSystem` also holds a read/write gate: single-store calls take it shared,
//! registration and reset take it exclusively.

pub mod api_system;
pub mod error;
pub mod seed;

pub use api_system::*;
pub use error::*;
