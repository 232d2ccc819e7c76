//! Events and Commands
//!
//! Inputs to `ListState::handle` and the remote calls it asks for.

use crate::domain::{Item, ItemId, ItemPatch, NewItem, SortOrder};
use crate::error::GatewayError;
use crate::messages::Operation;

/// Update sequence number; only the latest update issued for a given
/// record field may reconcile it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    // ========================
    // User intents
    // ========================
    /// Fetch every record, newest first
    Load,
    /// Text in the add input changed
    DraftChanged(String),
    Add(String),
    ToggleComplete { id: ItemId, completed: bool },
    StartEdit(ItemId),
    /// Text in the edit input changed
    EditBufferChanged(String),
    SaveEdit,
    Delete(ItemId),
    /// Local-only splice; never sent to the row store
    Reorder { from: usize, to: usize },

    // ========================
    // Gateway responses
    // ========================
    Loaded {
        generation: u64,
        result: Result<Vec<Item>, GatewayError>,
    },
    Inserted {
        result: Result<Vec<Item>, GatewayError>,
    },
    Updated {
        op: Operation,
        id: ItemId,
        patch: ItemPatch,
        token: RequestToken,
        result: Result<(), GatewayError>,
    },
    Deleted {
        id: ItemId,
        result: Result<(), GatewayError>,
    },
}

/// A single gateway call to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchAll {
        generation: u64,
        order: SortOrder,
    },
    Insert {
        item: NewItem,
    },
    Update {
        op: Operation,
        id: ItemId,
        patch: ItemPatch,
        token: RequestToken,
    },
    Delete {
        id: ItemId,
    },
}
