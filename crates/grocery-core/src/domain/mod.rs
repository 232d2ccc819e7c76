//! Domain Layer
//!
//! Entities exchanged with the remote row store.

mod item;

pub use item::{Direction, Item, ItemId, ItemPatch, NewItem, SortOrder};
