//! Item Entity
//!
//! One shopping-list entry as stored in the remote `items` table.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier
///
/// The remote table may key rows by bigint or uuid, so both shapes decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// A shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the remote store
    pub id: ItemId,
    /// User-editable text
    pub name: String,
    /// Checked off
    pub completed: bool,
    /// Assigned by the remote store; only used for the initial ordering
    pub created_at: DateTime<Utc>,
}

/// Insert payload. The remote store fills in `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub completed: bool,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// Partial update sent with `update_where`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn renamed(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Write the present fields onto `item`, leaving the rest alone
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}

/// Sort direction for `select_all`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub column: String,
    pub direction: Direction,
}

impl SortOrder {
    /// Creation timestamp, most recent first
    pub fn newest_first() -> Self {
        Self {
            column: "created_at".to_string(),
            direction: Direction::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes_numeric_and_text_ids() {
        let numeric: Item = serde_json::from_str(
            r#"{"id":7,"name":"Milk","completed":false,"created_at":"2024-03-01T10:00:00.123456+00:00"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, ItemId::Number(7));

        let uuid: Item = serde_json::from_str(
            r#"{"id":"5f0c6a2e-0000-4000-8000-000000000001","name":"Eggs","completed":true,"created_at":"2024-03-01T10:00:00Z","owner":null}"#,
        )
        .unwrap();
        assert_eq!(uuid.id, ItemId::from("5f0c6a2e-0000-4000-8000-000000000001"));
        assert!(uuid.completed);
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let json = serde_json::to_string(&ItemPatch::completed(true)).unwrap();
        assert_eq!(json, r#"{"completed":true}"#);

        let json = serde_json::to_string(&ItemPatch::renamed("Bread")).unwrap();
        assert_eq!(json, r#"{"name":"Bread"}"#);
    }

    #[test]
    fn test_patch_apply_touches_only_present_fields() {
        let mut item = Item {
            id: ItemId::Number(1),
            name: "Milk".to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        let before = item.clone();

        ItemPatch::completed(true).apply_to(&mut item);
        assert!(item.completed);
        assert_eq!(item.name, before.name);
        assert_eq!(item.created_at, before.created_at);
    }

    #[test]
    fn test_new_item_is_not_completed() {
        let item = NewItem::named("Coffee");
        assert_eq!(item.name, "Coffee");
        assert!(!item.completed);
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"Coffee","completed":false}"#
        );
    }
}
