//! # Contract API Library
//!
//! A small item/user HTTP service used to exercise API-contract tests. Each
//! collection lives in its own store actor from `resource_framework`; this crate
//! adds the records, their validation, placeholder token auth, reset to the
//! seeded state, and the axum routes.
//!
//! - **[model]**: [`Item`](model::Item), [`User`](model::User),
//!   [`Credential`](model::Credential) and their payloads.
//! - **[item_actor]**, **[user_actor]**, **[credential_actor]**: store
//!   factories, entity hooks, and per-record errors.
//! - **[clients]**: typed wrappers over the generic store client.
//! - **[auth]**: the [`SessionTokenIssuer`](auth::SessionTokenIssuer).
//! - **[lifecycle]**: [`ApiSystem`](lifecycle::ApiSystem), which starts,
//!   seeds, resets, and stops the stores.
//! - **[config]** and **[http]**: service configuration and the HTTP layer.

pub mod auth;
pub mod clients;
pub mod config;
pub mod credential_actor;
pub mod http;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
pub mod validation;
