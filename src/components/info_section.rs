//! Info Section Component

use leptos::prelude::*;
use terra_core::content::InfoSection;

#[component]
pub fn InfoSectionView(section: &'static InfoSection) -> impl IntoView {
    view! {
        <section class="info-section">
            <h2 class="section-heading">{section.heading}</h2>
            <div class="info-cards">
                {section
                    .cards
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="info-card">
                                <h3>{card.icon}" "{card.title}</h3>
                                <ul>
                                    {card.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
