//! Good Practices Component
//!
//! Checklist of water-saving tips with a running total and level badge.
//! Progress survives reloads through localStorage.

use leptos::prelude::*;
use terra_core::content::{DAILY_TIPS, PRACTICES_TITLE};
use terra_core::practices::total_possible;

use crate::components::ProgressBar;
use crate::storage;

#[component]
pub fn GoodPractices() -> impl IntoView {
    let checklist = RwSignal::new(storage::load_checklist());

    // Save on every change
    Effect::new(move |_| {
        checklist.with(|c| storage::save_checklist(c, c.water_saved(&DAILY_TIPS)));
    });

    let water_saved = move || checklist.with(|c| c.water_saved(&DAILY_TIPS));
    let saved_percent = Signal::derive(move || checklist.with(|c| c.saved_percent(&DAILY_TIPS)));
    let level = move || checklist.with(|c| c.level(&DAILY_TIPS).label());
    let goal = total_possible(&DAILY_TIPS);

    view! {
        <section class="practices-card">
            <header class="card-header">
                <h2>"🌱 "{PRACTICES_TITLE}</h2>
            </header>
            <div class="card-body">
                <div class="practices-summary">
                    <p class="practices-saved">{move || format!("{} litros economizados", water_saved())}</p>
                    <span class="practices-level">{level}</span>
                </div>
                <ProgressBar percent=saved_percent />
                <p class="practices-goal">{format!("Meta Diária: {} litros", goal)}</p>

                <div class="practices-list">
                    {DAILY_TIPS
                        .iter()
                        .enumerate()
                        .map(|(index, tip)| {
                            let id = format!("tip-{}", index);
                            view! {
                                <div class="practice-item">
                                    <input
                                        type="checkbox"
                                        id=id.clone()
                                        prop:checked=move || checklist.with(|c| c.is_implemented(index))
                                        on:change=move |_| checklist.update(|c| c.toggle(&DAILY_TIPS, index))
                                    />
                                    <div class="practice-text">
                                        <label for=id>{tip.icon}" "{tip.title}</label>
                                        <p>{tip.description}</p>
                                        <p class="practice-saving">
                                            {format!("Economia: {} litros", tip.saving_litres)}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
