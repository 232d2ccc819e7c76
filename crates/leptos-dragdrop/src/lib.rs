//! Leptos DragDrop Utilities
//!
//! Mouse-driven list reordering for Leptos.
//! Uses a movement threshold to tell a click from a drag, and reports a
//! hover-swap whenever the dragged row passes over another row.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks stay suppressed after a drag ends
const CLICK_SUPPRESS_MS: u32 = 100;

/// DnD state signals, keyed by whatever identifies a row
pub struct DndSignals<K: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

// Manual impls: signals are Copy whatever the key is
impl<K: Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndSignals<K> {}

pub fn create_dnd_signals<K: Clone + Send + Sync + 'static>() -> DndSignals<K> {
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Whether a click landing now is the tail of a drag and should be ignored
pub fn click_suppressed<K: Send + Sync + 'static>(dnd: &DndSignals<K>) -> bool {
    dnd.drag_just_ended_read.get_untracked()
}

/// Clear drag state; returns true when a drag (not just a press) ended
fn finish_drag<K: Clone + Send + Sync + 'static>(dnd: &DndSignals<K>) -> bool {
    let was_dragging = dnd.dragging_read.get_untracked().is_some();
    dnd.dragging_write.set(None);
    dnd.pending_write.set(None);
    if was_dragging {
        dnd.drag_just_ended_write.set(true);
    }
    was_dragging
}

/// End drag operation
pub fn end_drag<K: Clone + Send + Sync + 'static>(dnd: &DndSignals<K>) {
    if finish_drag(dnd) {
        let clear = dnd.drag_just_ended_write;
        Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(key.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows
///
/// While a drag is active and the pointer enters a different row,
/// `on_swap(dragged, hovered)` fires.
pub fn make_on_row_mouseenter<K, F>(dnd: DndSignals<K>, key: K, on_swap: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(K, K) + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragged) = dnd.dragging_read.get_untracked() {
            // Don't swap with self
            if dragged != key {
                on_swap(dragged, key.clone());
            }
        }
    }
}

/// Bind document-level mousemove (starts a drag past the threshold)
/// and mouseup (ends it)
pub fn bind_global_handlers<K>(dnd: DndSignals<K>)
where
    K: Clone + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        end_drag(&dnd);
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (10, 10)));
        assert!(!exceeds_threshold((10, 10), (15, 5)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_click_suppressed_only_after_drag() {
        let owner = Owner::new();
        owner.set();
        let dnd = create_dnd_signals::<u32>();

        // Press and release without moving is a plain click
        dnd.pending_write.set(Some(1));
        assert!(!finish_drag(&dnd));
        assert!(!click_suppressed(&dnd));

        dnd.pending_write.set(Some(1));
        dnd.dragging_write.set(Some(1));
        assert!(finish_drag(&dnd));
        assert!(click_suppressed(&dnd));
        assert_eq!(dnd.dragging_read.get_untracked(), None);
        assert_eq!(dnd.pending_read.get_untracked(), None);
    }
}
