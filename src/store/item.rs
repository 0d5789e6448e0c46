//! Item types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single managed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier. Unique, never reused, never mutated.
    pub id: i64,
    /// Display name. Always non-empty.
    pub name: String,
    /// Optional free-form description. Omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for creating an item. The store assigns the `id`.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    /// Display name. Must be non-empty.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
}
