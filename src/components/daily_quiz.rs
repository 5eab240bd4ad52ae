//! Daily Quiz Component
//!
//! Multiple-choice card. After submitting, the answer is revealed and the
//! next question appears once the reveal timer fires.

use leptos::prelude::*;
use terra_core::content::{QUIZ_QUESTIONS, QUIZ_TITLE};
use terra_core::QuizSession;

use crate::components::ProgressBar;
use crate::timers::TimerSlot;

#[component]
pub fn DailyQuiz() -> impl IntoView {
    let quiz = RwSignal::new(QuizSession::new(&QUIZ_QUESTIONS));
    let advance_timer = TimerSlot::new();

    on_cleanup(move || {
        quiz.try_update(|q| q.teardown());
    });

    let select = move |option: usize| {
        if let Some(Err(e)) = quiz.try_update(|q| q.select(option)) {
            log::debug!("[QUIZ] selection ignored: {}", e);
        }
    };

    let submit = move |_| match quiz.try_update(|q| q.submit()) {
        Some(Ok(outcome)) => {
            advance_timer.schedule(outcome.delay_ms, move || {
                quiz.try_update(|q| q.advance(outcome.ticket));
            });
        }
        Some(Err(e)) => log::debug!("[QUIZ] submit ignored: {}", e),
        None => {}
    };

    let restart = move |_| {
        advance_timer.cancel();
        quiz.update(|q| q.reset());
    };

    let completed = Memo::new(move |_| quiz.with(|q| q.is_completed()));
    let progress = Signal::derive(move || quiz.with(|q| q.progress_percent()));
    let score_percent = Signal::derive(move || quiz.with(|q| q.score_percent()));
    let total = QUIZ_QUESTIONS.len();

    let question_view = move || {
        quiz.with(|q| q.question().copied().map(|question| (question, q.question_number())))
            .map(|(question, number)| {
                let pending = move || quiz.with(|q| q.reveal().is_some());
                view! {
                    <p class="quiz-counter">{format!("Pergunta {} de {}", number, total)}</p>
                    <h3 class="quiz-prompt">{question.prompt}</h3>
                    <div class="quiz-options">
                        {question
                            .options
                            .iter()
                            .enumerate()
                            .map(|(index, option)| {
                                let id = format!("quiz-option-{}", index);
                                view! {
                                    <div class="quiz-option">
                                        <input
                                            type="radio"
                                            name="quiz-option"
                                            id=id.clone()
                                            prop:checked=move || quiz.with(|q| q.selected() == Some(index))
                                            disabled=pending
                                            on:change=move |_| select(index)
                                        />
                                        <label for=id>{*option}</label>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })
    };

    let reveal_view = move || {
        quiz.with(|q| q.reveal()).map(|reveal| {
            let (class, heading) = if reveal.correct {
                ("quiz-reveal correct", "Correto! 👏")
            } else {
                ("quiz-reveal wrong", "Incorreto")
            };
            view! {
                <div class=class>
                    <p class="quiz-reveal-heading">{heading}</p>
                    {reveal.explanation.map(|text| view! { <p class="quiz-explanation">{text}</p> })}
                </div>
            }
        })
    };

    let submit_label = move || {
        if quiz.with(|q| q.is_last_question()) { "Finalizar Quiz" } else { "Próxima Pergunta" }
    };
    let submit_disabled = move || quiz.with(|q| q.selected().is_none() || q.reveal().is_some());

    view! {
        <section class="quiz-card">
            <header class="card-header">
                <h2>"💧 "{QUIZ_TITLE}</h2>
            </header>
            <div class="card-body">
                <Show
                    when=move || !completed.get()
                    fallback=move || {
                        view! {
                            <div class="quiz-summary">
                                <h3>"Parabéns! Você completou o quiz diário!"</h3>
                                <p>
                                    {move || {
                                        format!(
                                            "Você acertou {} de {} perguntas.",
                                            quiz.with(|q| q.correct_answers()),
                                            total,
                                        )
                                    }}
                                </p>
                                <ProgressBar percent=score_percent />
                                <p class="quiz-comeback">"Volte amanhã para um novo desafio!"</p>
                            </div>
                        }
                    }
                >
                    <ProgressBar percent=progress />
                    {question_view}
                    {reveal_view}
                </Show>
            </div>
            <footer class="card-footer">
                <Show
                    when=move || !completed.get()
                    fallback=move || view! { <button class="quiz-restart" on:click=restart>"Reiniciar Quiz"</button> }
                >
                    <button class="quiz-submit" disabled=submit_disabled on:click=submit>
                        {submit_label}
                    </button>
                </Show>
            </footer>
        </section>
    }
}
