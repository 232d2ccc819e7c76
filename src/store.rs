//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use grocery_core::{Command, ListEvent, ListState};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Shopping list with its loading flag, error and edit target
    pub list: ListState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply an event to the list; returns the gateway calls to issue
pub fn store_handle(store: &AppStore, event: ListEvent) -> Vec<Command> {
    store.list().write().handle(event)
}

/// Read the list, subscribing the caller to changes
pub fn store_with_list<T>(store: &AppStore, f: impl FnOnce(&ListState) -> T) -> T {
    store.list().with(f)
}

/// Read the list without subscribing (event handlers)
pub fn store_with_list_untracked<T>(store: &AppStore, f: impl FnOnce(&ListState) -> T) -> T {
    store.list().with_untracked(f)
}
