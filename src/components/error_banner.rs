//! Error Banner Component
//!
//! Shows the most recent failed operation above the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_with_list;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    let text = move || {
        store_with_list(&ctx.store, |list| list.error().map(|err| err.display(ctx.messages)))
    };

    view! {
        {move || text().map(|text| view! { <div class="error">{text}</div> })}
    }
}
