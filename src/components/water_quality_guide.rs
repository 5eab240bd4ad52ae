//! Water Quality Guide Component
//!
//! Accordion of common household water problems.

use leptos::prelude::*;
use terra_core::content::{GUIDE_INTRO, GUIDE_TITLE, WATER_PROBLEMS};
use terra_core::Accordion;

#[component]
pub fn WaterQualityGuide() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section class="guide-card">
            <header class="card-header">
                <h2>"💧 "{GUIDE_TITLE}</h2>
            </header>
            <div class="card-body">
                <p class="guide-intro">{GUIDE_INTRO}</p>
                {WATER_PROBLEMS
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let expanded = move || accordion.with(|a| a.is_expanded(index));
                        view! {
                            <div class=move || if expanded() { "guide-entry expanded" } else { "guide-entry" }>
                                <button
                                    class="guide-toggle"
                                    on:click=move |_| accordion.update(|a| a.toggle(index))
                                >
                                    <span>"⚠ "{entry.problem}</span>
                                    <span>{move || if expanded() { "▲" } else { "▼" }}</span>
                                </button>
                                <Show when=expanded>
                                    <div class="guide-details">
                                        <h4>"Sintomas:"</h4>
                                        <ul>
                                            {entry.symptoms.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                                        </ul>
                                        <h4>"Solução:"</h4>
                                        <p>{entry.solution}</p>
                                        <h4>"Prevenção:"</h4>
                                        <p>{entry.prevention}</p>
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
