//! Draggable Card Component
//!
//! One unclassified item on the board.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};
use terra_core::Category;

#[component]
pub fn DraggableCard<C: Category>(dnd: DndSignals<C>, item_id: u32, label: &'static str) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, item_id);

    let card_class = move || {
        let mut c = String::from("drag-card");
        if dnd.is_dragging(item_id) { c.push_str(" dragging"); }
        c
    };

    view! {
        <div class=card_class on:mousedown=on_mousedown>
            <p>{label}</p>
        </div>
    }
}
