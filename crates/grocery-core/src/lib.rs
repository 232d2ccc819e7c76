//! Grocery List Core
//!
//! Layered like the app that uses it:
//! - domain: entities exchanged with the row store
//! - gateway: remote row-store access (REST and in-memory)
//! - list: the list store as an event-driven state machine
//! - messages: localized user-visible strings

pub mod domain;
pub mod error;
pub mod gateway;
pub mod list;
pub mod messages;

pub use domain::{Item, ItemId, ItemPatch, NewItem, SortOrder};
pub use error::{ConfigError, GatewayError, GatewayResult};
pub use gateway::{Gateway, GatewayConfig, MemoryGateway, PostgrestGateway};
pub use list::{execute, Command, ListController, ListEvent, ListState, OperationError};
pub use messages::{Locale, Messages, Operation};
