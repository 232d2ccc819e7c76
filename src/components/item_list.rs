//! Item List Component
//!
//! Loading text, empty-state text, or one row per item.
//! Rows can be dragged; hovering another row swaps the two in memory only,
//! so the order is lost on the next load.

use grocery_core::{Item, ItemId, ListEvent};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::store::{store_with_list, store_with_list_untracked};

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();

    // Create DnD signals
    let dnd = create_dnd_signals::<ItemId>();
    bind_global_handlers(dnd);

    let on_swap = move |dragged: ItemId, hovered: ItemId| {
        let positions = store_with_list_untracked(&ctx.store, |list| {
            (list.index_of(&dragged), list.index_of(&hovered))
        });
        if let (Some(from), Some(to)) = positions {
            log::debug!("[DND] Swap {} -> {}", from, to);
            ctx.dispatch(ListEvent::Reorder { from, to });
        }
    };

    let loading = move || store_with_list(&ctx.store, |list| list.is_loading());
    let is_empty = move || store_with_list(&ctx.store, |list| list.items().is_empty());
    let items = move || store_with_list(&ctx.store, |list| list.items().to_vec());

    view! {
        <Show
            when=move || !loading()
            fallback=move || view! { <div class="loading">{ctx.messages.loading}</div> }
        >
            <ul class="item-list">
                <Show
                    when=move || !is_empty()
                    fallback=move || view! { <div class="loading">{ctx.messages.empty}</div> }
                >
                    <For
                        each=items
                        // Key on every displayed field so an edit re-renders the row
                        key=|item: &Item| (item.id.clone(), item.name.clone(), item.completed)
                        children=move |item: Item| {
                            let id = item.id.clone();
                            let on_mousedown = make_on_mousedown(dnd, id.clone());
                            let on_mouseenter = make_on_row_mouseenter(dnd, id.clone(), on_swap);

                            let is_dragging = move || dnd.dragging_read.with(|d| d.as_ref() == Some(&id));
                            let row_class = move || if is_dragging() { "item dragging" } else { "item" };

                            view! {
                                <li
                                    class=row_class
                                    on:mousedown=on_mousedown
                                    on:mouseenter=on_mouseenter
                                >
                                    <ItemRow item=item dnd=dnd />
                                </li>
                            }
                        }
                    />
                </Show>
            </ul>
        </Show>
    }
}
