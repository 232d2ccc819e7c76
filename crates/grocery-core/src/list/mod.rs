//! List Store
//!
//! Ordered shopping list kept in sync with the remote row store.

mod driver;
mod event;
mod state;


pub use driver::{execute, ListController};
pub use event::{Command, ListEvent, RequestToken};
pub use state::{EditSession, ListState, OperationError};
