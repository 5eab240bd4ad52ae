//! Drop Bin Component
//!
//! One of the two classification targets. Hover only changes the highlight;
//! any item can be released here and is judged afterwards.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_target_mouseenter, make_on_target_mouseleave, DndSignals};
use terra_core::{BinSpec, Category};

#[component]
pub fn DropBin<C: Category>(dnd: DndSignals<C>, bin: BinSpec<C>) -> impl IntoView {
    let on_mouseenter = make_on_target_mouseenter(dnd, bin.category);
    let on_mouseleave = make_on_target_mouseleave(dnd, bin.category);

    let bin_class = move || {
        let mut c = format!("drop-bin drop-bin-{}", bin.tone);
        if dnd.is_over(bin.category) { c.push_str(" over"); }
        c
    };

    view! {
        <div class=bin_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <span class="drop-bin-icon">{bin.icon}</span>
            <p class="drop-bin-label">{bin.label}</p>
        </div>
    }
}
