//! Feedback Banner Component
//!
//! Shows the transient message after a drop, styled by its kind.

use leptos::prelude::*;
use terra_core::Feedback;

#[component]
pub fn FeedbackBanner(#[prop(into)] feedback: Signal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|f| {
            let (class, icon) = if f.is_correct() {
                ("feedback feedback-correct", "✔")
            } else {
                ("feedback feedback-explanation", "✖")
            };
            view! {
                <div class=class role="status">
                    <span class="feedback-icon">{icon}</span>
                    <span class="feedback-text">{f.message}</span>
                </div>
            }
        })
    }
}
