//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use grocery_core::{execute, ListEvent, Locale, Messages, PostgrestGateway};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_handle, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// List state
    pub store: AppStore,
    /// Remote row store; browser futures are not Send, so it stays local
    gateway: StoredValue<PostgrestGateway, LocalStorage>,
    /// Strings for the active locale
    pub messages: &'static Messages,
}

impl AppContext {
    pub fn new(store: AppStore, gateway: PostgrestGateway, locale: Locale) -> Self {
        Self {
            store,
            gateway: StoredValue::new_local(gateway),
            messages: locale.messages(),
        }
    }

    /// Feed an event to the list and run every gateway call it produces.
    /// Each response is dispatched back when it arrives.
    pub fn dispatch(&self, event: ListEvent) {
        for command in store_handle(&self.store, event) {
            let ctx = *self;
            spawn_local(async move {
                let gateway = ctx.gateway.get_value();
                let response = execute(&gateway, command).await;
                ctx.dispatch(response);
            });
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
