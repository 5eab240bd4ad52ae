//! Aventuras na Terra da Água App
//!
//! Single page: hero, info sections, guide, quiz, checklist and both games.

use leptos::prelude::*;
use terra_core::content::{
    CONSERVATION_GAME, FOOTER_NAME, HERO_SUBTITLE, HERO_TITLE, INFO_SECTIONS, SANITATION_GAME,
};

use crate::components::{DailyQuiz, GoodPractices, InfoSectionView, SortingGame, WaterQualityGuide};

#[component]
pub fn App() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="page">
            <header class="page-header">
                <span class="page-logo" aria-label="Logo">"💧"</span>
            </header>

            <main class="page-main">
                <section class="hero">
                    <h1>{HERO_TITLE}</h1>
                    <p>{HERO_SUBTITLE}</p>
                </section>

                {INFO_SECTIONS
                    .iter()
                    .map(|section| view! { <InfoSectionView section=section /> })
                    .collect_view()}

                <section class="page-block">
                    <h2 class="section-heading">"Qualidade da Água em Casa"</h2>
                    <WaterQualityGuide />
                </section>

                <section class="page-block">
                    <DailyQuiz />
                </section>

                <section class="page-block">
                    <GoodPractices />
                </section>

                <section class="page-block">
                    <SortingGame config=&SANITATION_GAME />
                </section>

                <section class="page-block">
                    <SortingGame config=&CONSERVATION_GAME />
                </section>
            </main>

            <footer class="page-footer">
                <p>{format!("©{} {}. Todos os direitos reservados.", year, FOOTER_NAME)}</p>
            </footer>
        </div>
    }
}
