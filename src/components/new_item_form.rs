//! New Item Form Component
//!
//! Text input plus submit button for adding an item.

use grocery_core::ListEvent;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_with_list, store_with_list_untracked};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let draft = move || store_with_list(&ctx.store, |list| list.draft().to_string());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = store_with_list_untracked(&ctx.store, |list| list.draft().to_string());
        ctx.dispatch(ListEvent::Add(name));
    };

    view! {
        <form class="form-container" on:submit=add_item>
            <input
                type="text"
                placeholder=ctx.messages.add_placeholder
                prop:value=draft
                on:input=move |ev| ctx.dispatch(ListEvent::DraftChanged(event_target_value(&ev)))
            />
            <button type="submit" title=ctx.messages.add_label>"+"</button>
        </form>
    }
}
