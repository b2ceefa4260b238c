//! Records and payloads. Each record implements
//! [`ActorEntity`](resource_framework::ActorEntity) in its `*_actor` module.

pub mod credential;
pub mod item;
pub mod user;

pub use credential::*;
pub use item::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that was present in the body, keeping `null` as
/// `Some(None)`. Combined with `#[serde(default)]` an absent field stays `None`,
/// which is how patch payloads tell "omitted" apart from "cleared".
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
