use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of an [`Item`]. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored item.
///
/// `id` and `created_at` are set once on creation and never change afterwards.
/// See [`impl ActorEntity for Item`](#impl-ActorEntity-for-Item) for the create
/// and update rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemCreate {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

/// Partial update for an item.
///
/// Each field is `None` when omitted from the body and `Some(..)` when present,
/// including an explicit `null` (`Some(None)`). A `null` description clears it;
/// a `null` name is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemUpdate {
    #[serde(default, deserialize_with = "super::present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub description: Option<Option<String>>,
}

impl ItemUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = Some(description.map(str::to_string));
        self
    }
}
