//! In-Memory Gateway
//!
//! A single-table row store kept in memory. Assigns ids and creation
//! timestamps the way the hosted store does, records every call, and can be
//! told to fail the next call of a given kind.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::Gateway;
use crate::domain::{Direction, Item, ItemId, ItemPatch, NewItem, SortOrder};
use crate::error::{GatewayError, GatewayResult};

/// Which gateway method was called
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayCall {
    SelectAll,
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct MemoryTable {
    rows: Vec<Item>,
    next_id: i64,
    failures: HashMap<GatewayCall, String>,
    calls: Vec<GatewayCall>,
}

impl MemoryTable {
    /// Log the call and consume a pending failure for it, if any
    fn begin(&mut self, call: GatewayCall) -> GatewayResult<()> {
        self.calls.push(call);
        match self.failures.remove(&call) {
            Some(message) => Err(GatewayError::Transport(message)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryGateway {
    table: RefCell<MemoryTable>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows; new ids continue after the largest numeric id
    pub fn with_rows(rows: Vec<Item>) -> Self {
        let next_id = rows
            .iter()
            .filter_map(|row| match row.id {
                ItemId::Number(n) => Some(n),
                ItemId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            table: RefCell::new(MemoryTable {
                rows,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Make the next `call` fail with `message`
    pub fn fail_next(&self, call: GatewayCall, message: impl Into<String>) {
        self.table.borrow_mut().failures.insert(call, message.into());
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.table.borrow().calls.clone()
    }

    /// Forget the calls made so far
    pub fn clear_calls(&self) {
        self.table.borrow_mut().calls.clear();
    }

    /// Rows as currently stored (insertion order)
    pub fn rows(&self) -> Vec<Item> {
        self.table.borrow().rows.clone()
    }
}

fn creation_time(sequence: i64) -> DateTime<Utc> {
    DateTime::<Utc>::default() + Duration::seconds(sequence)
}

#[async_trait(?Send)]
impl Gateway for MemoryGateway {
    async fn select_all(&self, order: SortOrder) -> GatewayResult<Vec<Item>> {
        let mut table = self.table.borrow_mut();
        table.begin(GatewayCall::SelectAll)?;

        let mut rows = table.rows.clone();
        match order.column.as_str() {
            "name" => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            _ => rows.sort_by_key(|row| row.created_at),
        }
        if order.direction == Direction::Descending {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn insert(&self, item: &NewItem) -> GatewayResult<Vec<Item>> {
        let mut table = self.table.borrow_mut();
        table.begin(GatewayCall::Insert)?;

        table.next_id += 1;
        let row = Item {
            id: ItemId::Number(table.next_id),
            name: item.name.clone(),
            completed: item.completed,
            created_at: creation_time(table.next_id),
        };
        table.rows.push(row.clone());
        Ok(vec![row])
    }

    async fn update_where(&self, id: &ItemId, patch: &ItemPatch) -> GatewayResult<()> {
        let mut table = self.table.borrow_mut();
        table.begin(GatewayCall::Update)?;

        // Matching zero rows is not an error, same as the hosted store
        table
            .rows
            .iter_mut()
            .filter(|row| row.id == *id)
            .for_each(|row| patch.apply_to(row));
        Ok(())
    }

    async fn delete_where(&self, id: &ItemId) -> GatewayResult<()> {
        let mut table = self.table.borrow_mut();
        table.begin(GatewayCall::Delete)?;

        table.rows.retain(|row| row.id != *id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids_and_timestamps() {
        let gateway = MemoryGateway::new();
        let first = gateway.insert(&NewItem::named("Milk")).await.unwrap();
        let second = gateway.insert(&NewItem::named("Eggs")).await.unwrap();

        assert_eq!(first[0].id, ItemId::Number(1));
        assert_eq!(second[0].id, ItemId::Number(2));
        assert!(second[0].created_at > first[0].created_at);
    }

    #[tokio::test]
    async fn test_select_all_newest_first() {
        let gateway = MemoryGateway::new();
        for name in ["a", "b", "c"] {
            gateway.insert(&NewItem::named(name)).await.unwrap();
        }

        let rows = gateway.select_all(SortOrder::newest_first()).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_select_all_by_name() {
        let gateway = MemoryGateway::new();
        for name in ["b", "c", "a"] {
            gateway.insert(&NewItem::named(name)).await.unwrap();
        }

        let mut order = SortOrder {
            column: "name".to_string(),
            direction: Direction::Ascending,
        };
        let rows = gateway.select_all(order.clone()).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        order.direction = Direction::Descending;
        let rows = gateway.select_all(order).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_clear_calls_keeps_rows() {
        let gateway = MemoryGateway::new();
        gateway.insert(&NewItem::named("Milk")).await.unwrap();
        gateway.select_all(SortOrder::newest_first()).await.unwrap();
        assert_eq!(gateway.calls().len(), 2);

        gateway.clear_calls();
        assert!(gateway.calls().is_empty());
        assert_eq!(gateway.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_fail_next_is_one_shot() {
        let gateway = MemoryGateway::new();
        gateway.fail_next(GatewayCall::Insert, "network down");

        let err = gateway.insert(&NewItem::named("Eggs")).await.unwrap_err();
        assert_eq!(err.to_string(), "network down");
        assert!(gateway.rows().is_empty());

        assert!(gateway.insert(&NewItem::named("Eggs")).await.is_ok());
        assert_eq!(gateway.calls(), vec![GatewayCall::Insert, GatewayCall::Insert]);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_id() {
        let gateway = MemoryGateway::new();
        let created = gateway.insert(&NewItem::named("Milk")).await.unwrap();
        let id = created[0].id.clone();

        gateway.update_where(&id, &ItemPatch::renamed("Milk 2L")).await.unwrap();
        assert_eq!(gateway.rows()[0].name, "Milk 2L");

        gateway.delete_where(&id).await.unwrap();
        assert!(gateway.rows().is_empty());

        // Unknown ids match nothing and still succeed
        gateway.delete_where(&ItemId::Number(99)).await.unwrap();
    }

    #[test]
    fn test_with_rows_continues_numbering() {
        let gateway = MemoryGateway::with_rows(vec![Item {
            id: ItemId::Number(41),
            name: "Rice".to_string(),
            completed: false,
            created_at: creation_time(41),
        }]);
        assert_eq!(gateway.table.borrow().next_id, 41);
    }
}
