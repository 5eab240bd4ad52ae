//! Sorting Game Component
//!
//! Drag-and-drop classification board shared by both mini-games. Everything
//! game-specific comes from the `GameConfig`.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use terra_core::{Category, GameConfig};

use crate::components::{CompletionPanel, DraggableCard, DropBin, FeedbackBanner, ProgressBar};
use crate::game_controller::{use_sorting_game, SortingGameHandle};

/// Game card; renders a notice instead of the board if the config is invalid
#[component]
pub fn SortingGame<C: Category>(config: &'static GameConfig<C>) -> impl IntoView {
    match use_sorting_game(config) {
        Ok(game) => view! { <SortingBoard config=config game=game /> }.into_any(),
        Err(e) => {
            log::error!("[GAME] {} catalog is invalid: {}", config.key, e);
            view! {
                <section class=format!("game-card {}", config.theme)>
                    <p class="game-error">"Este jogo está indisponível no momento."</p>
                </section>
            }
            .into_any()
        }
    }
}

#[component]
fn SortingBoard<C: Category>(config: &'static GameConfig<C>, game: SortingGameHandle<C>) -> impl IntoView {
    let session = game.session;

    let dnd = create_dnd_signals::<C>();
    bind_global_mouseup(dnd, move |item_id, target| game.drop_on(item_id, target));

    let total = session.with_untracked(|s| s.total());
    let score = move || session.with(|s| s.score());
    let remaining = move || session.with(|s| s.remaining_items());
    let is_complete = Memo::new(move |_| session.with(|s| s.is_complete()));
    let progress = Signal::derive(move || session.with(|s| s.progress_percent()));
    let feedback = Signal::derive(move || session.with(|s| s.feedback()));
    let completion = move || session.with(|s| s.completion());

    let on_reset = Callback::new(move |_: ()| game.reset());

    view! {
        <section class=format!("game-card {}", config.theme) id=config.key>
            <header class="card-header">
                <h2>{config.icon}" "{config.title}</h2>
            </header>
            <div class="card-body">
                <div class="game-status">
                    <p class="game-instructions">{config.instructions}</p>
                    <ProgressBar percent=progress />
                    <p class="game-score">{move || format!("Pontuação: {} de {}", score(), total)}</p>
                </div>

                <FeedbackBanner feedback=feedback />

                <div class="game-items">
                    <For
                        each=remaining
                        key=|item| item.id
                        children=move |item| {
                            view! { <DraggableCard dnd=dnd item_id=item.id label=item.label /> }
                        }
                    />
                </div>

                <Show when=move || !is_complete.get()>
                    <div class="drop-bins">
                        {config
                            .bins
                            .iter()
                            .map(|bin| view! { <DropBin dnd=dnd bin=*bin /> })
                            .collect_view()}
                    </div>
                </Show>

                {move || {
                    completion()
                        .map(|c| {
                            view! {
                                <CompletionPanel
                                    text=&config.completion
                                    completion=c
                                    on_reset=on_reset
                                />
                            }
                        })
                }}
            </div>
        </section>
    }
}
