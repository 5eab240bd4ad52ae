//! Timed feedback against a virtual clock.
//!
//! The harness plays the role of the browser: every ticket the engine hands
//! out is scheduled at `now + delay` and delivered back in time order.

use std::sync::Arc;

use terra_core::content::{SanitationCategory, QUIZ_QUESTIONS, SANITATION_GAME};
use terra_core::quiz::{CORRECT_REVEAL_MS, WRONG_REVEAL_MS};
use terra_core::*;

/// Pending timer callbacks ordered by due time
#[derive(Default)]
struct VirtualClock {
    now: u64,
    pending: Vec<(u64, Ticket)>,
}

impl VirtualClock {
    fn schedule(&mut self, delay_ms: u32, ticket: Ticket) {
        self.pending.push((self.now + delay_ms as u64, ticket));
        self.pending.sort_by_key(|(due, _)| *due);
    }

    /// Advance to `at`, firing every timer due on the way
    fn run_until(&mut self, at: u64, mut fire: impl FnMut(Ticket)) {
        while let Some(&(due, ticket)) = self.pending.first() {
            if due > at {
                break;
            }
            self.pending.remove(0);
            self.now = due;
            fire(ticket);
        }
        self.now = at;
    }
}

fn sanitation() -> GameSession<SanitationCategory> {
    GameSession::new(Arc::new(SANITATION_GAME.catalog().unwrap()))
}

#[test]
fn feedback_expires_after_delay() {
    let mut clock = VirtualClock::default();
    let mut game = sanitation();

    let outcome = game.drop_on(1, SanitationCategory::Good).unwrap();
    clock.schedule(SANITATION_GAME.feedback_delay_ms, outcome.ticket);

    clock.run_until(4999, |t| {
        game.expire_feedback(t);
    });
    assert!(game.feedback().is_some());

    clock.run_until(5001, |t| {
        game.expire_feedback(t);
    });
    assert_eq!(game.feedback(), None);
}

#[test]
fn newer_feedback_survives_older_timer() {
    let mut clock = VirtualClock::default();
    let mut game = sanitation();

    let first = game.drop_on(1, SanitationCategory::Good).unwrap();
    clock.schedule(5000, first.ticket);

    clock.run_until(1000, |t| {
        game.expire_feedback(t);
    });
    let second = game.drop_on(2, SanitationCategory::Good).unwrap();
    clock.schedule(5000, second.ticket);

    clock.run_until(5001, |t| {
        game.expire_feedback(t);
    });
    assert_eq!(game.feedback(), Some(second.feedback));

    clock.run_until(6001, |t| {
        game.expire_feedback(t);
    });
    assert_eq!(game.feedback(), None);
}

#[test]
fn timer_after_teardown_changes_nothing() {
    let mut clock = VirtualClock::default();
    let mut game = sanitation();

    let outcome = game.drop_on(4, SanitationCategory::Bad).unwrap();
    clock.schedule(5000, outcome.ticket);
    game.teardown();

    let mut fired = 0;
    clock.run_until(10_000, |t| {
        fired += 1;
        assert!(!game.expire_feedback(t));
    });
    assert_eq!(fired, 1);
    assert_eq!(game.remaining_len(), 5);
    assert_eq!(game.score(), 1);
}

#[test]
fn reset_cancels_pending_feedback() {
    let mut clock = VirtualClock::default();
    let mut game = sanitation();

    let outcome = game.drop_on(1, SanitationCategory::Bad).unwrap();
    clock.schedule(5000, outcome.ticket);
    clock.run_until(2000, |_| {});
    game.reset();

    let mut cleared = false;
    clock.run_until(6000, |t| {
        cleared |= game.expire_feedback(t);
    });
    assert!(!cleared);
    assert_eq!(game.remaining_len(), 6);
}

#[test]
fn quiz_waits_longer_after_wrong_answers() {
    let mut clock = VirtualClock::default();
    let mut quiz = QuizSession::new(&QUIZ_QUESTIONS);

    quiz.select(QUIZ_QUESTIONS[0].correct).unwrap();
    let right = quiz.submit().unwrap();
    assert_eq!(right.delay_ms, CORRECT_REVEAL_MS);
    clock.schedule(right.delay_ms, right.ticket);
    clock.run_until(1500, |t| {
        quiz.advance(t);
    });
    assert_eq!(quiz.question_number(), 2);

    quiz.select(0).unwrap();
    let wrong = quiz.submit().unwrap();
    assert_eq!(wrong.delay_ms, WRONG_REVEAL_MS);
    assert_eq!(wrong.reveal.explanation, Some(QUIZ_QUESTIONS[1].explanation));
    clock.schedule(wrong.delay_ms, wrong.ticket);

    clock.run_until(1500 + 4999, |t| {
        quiz.advance(t);
    });
    assert_eq!(quiz.question_number(), 2);
    assert!(quiz.reveal().is_some());

    clock.run_until(1500 + 5000, |t| {
        quiz.advance(t);
    });
    assert_eq!(quiz.question_number(), 3);
    assert_eq!(quiz.reveal(), None);
}

#[test]
fn quiz_full_run_completes() {
    let mut clock = VirtualClock::default();
    let mut quiz = QuizSession::new(&QUIZ_QUESTIONS);

    while let Some(question) = quiz.question().copied() {
        quiz.select(question.correct).unwrap();
        let outcome = quiz.submit().unwrap();
        clock.schedule(outcome.delay_ms, outcome.ticket);
        let due = clock.now + outcome.delay_ms as u64;
        clock.run_until(due, |t| {
            quiz.advance(t);
        });
    }

    assert!(quiz.is_completed());
    assert_eq!(quiz.correct_answers(), QUIZ_QUESTIONS.len());
    assert_eq!(quiz.score_percent(), 100.0);
}
