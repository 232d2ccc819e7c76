//! Item Row Component
//!
//! Checkbox, name and edit/delete buttons; or, for the edit target,
//! an input and a save button.

use grocery_core::{Item, ItemId, ListEvent};
use leptos::prelude::*;
use leptos_dragdrop::{click_suppressed, DndSignals};

use crate::context::use_app_context;
use crate::store::store_with_list;

#[component]
pub fn ItemRow(item: Item, dnd: DndSignals<ItemId>) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id.clone();
    let completed = item.completed;
    let name = item.name.clone();

    let editing = {
        let id = id.clone();
        move || store_with_list(&ctx.store, |list| list.is_editing(&id))
    };
    let buffer = move || {
        store_with_list(&ctx.store, |list| {
            list.editing().map(|session| session.buffer.clone()).unwrap_or_default()
        })
    };

    let viewing = move || {
        let toggle_id = id.clone();
        let edit_id = id.clone();
        let delete_id = id.clone();
        view! {
            // Checkbox flips only after the row store confirms
            <input
                type="checkbox"
                class="item-checkbox"
                prop:checked=completed
                on:click=move |ev| {
                    ev.prevent_default();
                    if click_suppressed(&dnd) {
                        return;
                    }
                    ctx.dispatch(ListEvent::ToggleComplete { id: toggle_id.clone(), completed });
                }
            />
            <span class=if completed { "item-text completed" } else { "item-text" }>
                {name.clone()}
            </span>
            <div class="item-actions">
                <button
                    class="edit-btn"
                    title=ctx.messages.edit_label
                    on:click=move |_| {
                        if !click_suppressed(&dnd) {
                            ctx.dispatch(ListEvent::StartEdit(edit_id.clone()));
                        }
                    }
                >
                    "✎"
                </button>
                <button
                    class="delete-btn"
                    title=ctx.messages.delete_label
                    on:click=move |_| {
                        if !click_suppressed(&dnd) {
                            ctx.dispatch(ListEvent::Delete(delete_id.clone()));
                        }
                    }
                >
                    "×"
                </button>
            </div>
        }
    };

    view! {
        <Show when=editing fallback=viewing>
            <div class="edit-form">
                <input
                    type="text"
                    class="edit-input"
                    prop:value=buffer
                    on:input=move |ev| ctx.dispatch(ListEvent::EditBufferChanged(event_target_value(&ev)))
                />
                <button class="save-btn" on:click=move |_| ctx.dispatch(ListEvent::SaveEdit)>
                    {ctx.messages.save}
                </button>
            </div>
        </Show>
    }
}
