//! Completion Panel Component
//!
//! Summary shown once every item is classified.

use leptos::prelude::*;
use terra_core::{Completion, CompletionText};

#[component]
pub fn CompletionPanel(
    text: &'static CompletionText,
    completion: Completion,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let tier = completion.tier;

    view! {
        <div class="completion-panel">
            <h2 class="completion-heading">{text.heading(tier)}</h2>
            <p class="completion-score">
                {format!("Você acertou {} de {}", completion.score, completion.total)}
            </p>
            <p class="completion-message">{text.message(tier)}</p>
            <button
                class=format!("completion-reset {}", tier.tone())
                on:click=move |_| on_reset.run(())
            >
                {text.play_again}
            </button>
        </div>
    }
}
