//! Grocery List App
//!
//! Root component: header, error banner, add form and the list.

use grocery_core::{GatewayConfig, ListEvent, Locale, PostgrestGateway};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorBanner, ItemList, NewItemForm};
use crate::config;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let locale = config::browser_locale();

    match config::gateway_config() {
        Ok(gateway_config) => {
            log::info!("[APP] Row store {} table {}", gateway_config.url, gateway_config.table);
            view! { <ShoppingList gateway_config=gateway_config locale=locale /> }.into_any()
        }
        Err(err) => {
            log::error!("[APP] Invalid configuration: {}", err);
            let messages = locale.messages();
            view! {
                <div class="container">
                    <h1>{messages.title}</h1>
                    <div class="error">{messages.config_error}{err.to_string()}</div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ShoppingList(gateway_config: GatewayConfig, locale: Locale) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, PostgrestGateway::new(gateway_config), locale);
    provide_context(ctx);

    // Load on mount; sets the loading flag before the first render
    ctx.dispatch(ListEvent::Load);

    view! {
        <div class="container">
            <h1>{ctx.messages.title}</h1>

            <ErrorBanner />

            <NewItemForm />

            <ItemList />
        </div>
    }
}
