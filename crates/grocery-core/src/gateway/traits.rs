//! Gateway Layer - Core Trait
//!
//! Row-level access to the single `items` table.
//! Implementations talk to a hosted REST endpoint or keep rows in memory.

use async_trait::async_trait;

use crate::domain::{Item, ItemId, ItemPatch, NewItem, SortOrder};
use crate::error::GatewayResult;

/// Create/read/update/delete against one remote table
///
/// Every method is exactly one remote call: no retry, no batching, no caching.
/// Futures are not `Send` because browser fetch futures are not.
#[async_trait(?Send)]
pub trait Gateway {
    /// Read every row in the given order
    async fn select_all(&self, order: SortOrder) -> GatewayResult<Vec<Item>>;

    /// Insert one row, returning the created row(s) with server fields filled in
    async fn insert(&self, item: &NewItem) -> GatewayResult<Vec<Item>>;

    /// Apply `patch` to the row whose id equals `id`
    async fn update_where(&self, id: &ItemId, patch: &ItemPatch) -> GatewayResult<()>;

    /// Delete the row whose id equals `id`
    async fn delete_where(&self, id: &ItemId) -> GatewayResult<()>;
}
