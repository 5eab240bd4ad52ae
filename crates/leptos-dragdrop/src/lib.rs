//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Generic over the drop target type so each board can name its own zones.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Anything that can identify a drop zone
pub trait DropTarget: Copy + PartialEq + Send + Sync + 'static {}

impl<T> DropTarget for T where T: Copy + PartialEq + Send + Sync + 'static {}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<T: DropTarget> {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Zone currently under the pointer while dragging
    pub hover_target_read: ReadSignal<Option<T>>,
    pub hover_target_write: WriteSignal<Option<T>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<T: DropTarget> DndSignals<T> {
    /// Is a drag currently hovering `target`
    pub fn is_over(&self, target: T) -> bool {
        self.dragging_id_read.get().is_some() && self.hover_target_read.get() == Some(target)
    }

    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.dragging_id_read.get() == Some(item_id)
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Has the pointer moved far enough from the press point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<T: DropTarget>() -> DndSignals<T> {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (hover_target_read, hover_target_write) = signal(None::<T>);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hover_target_read,
        hover_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<T: DropTarget>(dnd: &DndSignals<T>) {
    dnd.dragging_id_write.set(None);
    dnd.hover_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<T: DropTarget>(dnd: DndSignals<T>, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Keep text selection from starting under the pointer
            ev.prevent_default();
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<T: DropTarget>(dnd: DndSignals<T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Signals are gone once the owning view unmounts
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else { return };
        let Some(dragging) = dnd.dragging_id_read.try_get_untracked() else { return };

        if pending.is_some() && dragging.is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop zone
pub fn make_on_target_mouseenter<T: DropTarget>(dnd: DndSignals<T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.hover_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler for a drop zone
pub fn make_on_target_mouseleave<T: DropTarget>(dnd: DndSignals<T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.hover_target_read.get_untracked() == Some(target) {
            dnd.hover_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: DropTarget,
    F: Fn(u32, T) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else { return };
        let hover_target = dnd.hover_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(target)) = (dragging_id, hover_target) {
            end_drag(&dnd);
            on_drop(dragged, target);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_stay_clicks() {
        assert!(!exceeds_threshold((10, 10), (10, 10)));
        assert!(!exceeds_threshold((10, 10), (15, 5)));
    }

    #[test]
    fn test_either_axis_starts_drag() {
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
