//! Daily Quiz
//!
//! Multiple-choice flow: select an option, submit, look at the reveal for a
//! while, then move on. The reveal lives in an `ExpiringSlot` so the host
//! timer that advances the quiz can be superseded safely.

use thiserror::Error;

use crate::timer::{ExpiringSlot, Ticket};

/// How long a correct answer stays on screen before the next question
pub const CORRECT_REVEAL_MS: u32 = 1500;
/// Wrong answers stay longer so the explanation can be read
pub const WRONG_REVEAL_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no option selected")]
    NoSelection,
    #[error("option {0} does not exist")]
    OptionOutOfRange(usize),
    #[error("the previous answer is still being shown")]
    AnswerPending,
    #[error("the quiz is already finished")]
    Finished,
}

/// What the player sees right after submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub correct: bool,
    /// Only present for wrong answers
    pub explanation: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub reveal: Reveal,
    pub ticket: Ticket,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [Question],
    current: usize,
    selected: Option<usize>,
    correct_answers: usize,
    completed: bool,
    reveal: ExpiringSlot<Reveal>,
}

impl QuizSession {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            correct_answers: 0,
            completed: questions.is_empty(),
            reveal: ExpiringSlot::new(),
        }
    }

    pub fn select(&mut self, option: usize) -> Result<(), QuizError> {
        let question = self.question().ok_or(QuizError::Finished)?;
        if self.reveal.current().is_some() {
            return Err(QuizError::AnswerPending);
        }
        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange(option));
        }
        self.selected = Some(option);
        Ok(())
    }

    pub fn submit(&mut self) -> Result<AnswerOutcome, QuizError> {
        let question = *self.question().ok_or(QuizError::Finished)?;
        if self.reveal.current().is_some() {
            return Err(QuizError::AnswerPending);
        }
        let selected = self.selected.ok_or(QuizError::NoSelection)?;

        let correct = selected == question.correct;
        if correct {
            self.correct_answers += 1;
        }
        let reveal = Reveal {
            correct,
            explanation: (!correct).then_some(question.explanation),
        };
        let ticket = self.reveal.show(reveal).ok_or(QuizError::Finished)?;
        let delay_ms = if correct { CORRECT_REVEAL_MS } else { WRONG_REVEAL_MS };

        log::debug!(
            "[QUIZ] question {} answered with {}: correct={}",
            self.current + 1,
            selected,
            correct
        );
        Ok(AnswerOutcome { reveal, ticket, delay_ms })
    }

    /// Timer callback: next question, or finish after the last one
    pub fn advance(&mut self, ticket: Ticket) -> bool {
        if !self.reveal.expire(ticket) {
            return false;
        }
        self.selected = None;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.completed = true;
            log::debug!(
                "[QUIZ] finished with {}/{} correct",
                self.correct_answers,
                self.questions.len()
            );
        }
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.correct_answers = 0;
        self.completed = self.questions.is_empty();
        self.reveal.clear();
    }

    pub fn teardown(&mut self) {
        self.reveal.close();
    }

    /// Current question, `None` once completed
    pub fn question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn reveal(&self) -> Option<Reveal> {
        self.reveal.current().copied()
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 100.0;
        }
        100.0 * (self.current + 1) as f64 / self.questions.len() as f64
    }

    pub fn score_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        100.0 * self.correct_answers as f64 / self.questions.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static QUESTIONS: [Question; 2] = [
        Question {
            prompt: "Um?",
            options: ["a", "b", "c", "d"],
            correct: 2,
            explanation: "porque c",
        },
        Question {
            prompt: "Dois?",
            options: ["a", "b", "c", "d"],
            correct: 0,
            explanation: "porque a",
        },
    ];

    #[test]
    fn test_submit_without_selection_fails() {
        let mut quiz = QuizSession::new(&QUESTIONS);
        assert_eq!(quiz.submit(), Err(QuizError::NoSelection));
        assert_eq!(quiz.select(4), Err(QuizError::OptionOutOfRange(4)));
    }

    #[test]
    fn test_correct_answer_reveals_briefly() {
        let mut quiz = QuizSession::new(&QUESTIONS);
        quiz.select(2).unwrap();
        let outcome = quiz.submit().unwrap();

        assert!(outcome.reveal.correct);
        assert_eq!(outcome.reveal.explanation, None);
        assert_eq!(outcome.delay_ms, CORRECT_REVEAL_MS);
        assert_eq!(quiz.correct_answers(), 1);
    }

    #[test]
    fn test_wrong_answer_shows_explanation() {
        let mut quiz = QuizSession::new(&QUESTIONS);
        quiz.select(1).unwrap();
        let outcome = quiz.submit().unwrap();

        assert!(!outcome.reveal.correct);
        assert_eq!(outcome.reveal.explanation, Some("porque c"));
        assert_eq!(outcome.delay_ms, WRONG_REVEAL_MS);
        assert_eq!(quiz.correct_answers(), 0);
    }

    #[test]
    fn test_pending_reveal_blocks_resubmit() {
        let mut quiz = QuizSession::new(&QUESTIONS);
        quiz.select(2).unwrap();
        quiz.submit().unwrap();
        assert_eq!(quiz.submit(), Err(QuizError::AnswerPending));
        assert_eq!(quiz.select(0), Err(QuizError::AnswerPending));
        assert_eq!(quiz.correct_answers(), 1);
    }

    #[test]
    fn test_advance_walks_to_completion() {
        let mut quiz = QuizSession::new(&QUESTIONS);
        quiz.select(2).unwrap();
        let first = quiz.submit().unwrap();
        assert!(quiz.advance(first.ticket));
        assert_eq!(quiz.question_number(), 2);
        assert_eq!(quiz.selected(), None);
        assert!(quiz.is_last_question());

        quiz.select(3).unwrap();
        let second = quiz.submit().unwrap();
        assert!(!quiz.advance(first.ticket));
        assert!(quiz.advance(second.ticket));

        assert!(quiz.is_completed());
        assert!(quiz.question().is_none());
        assert_eq!(quiz.correct_answers(), 1);
        assert_eq!(quiz.score_percent(), 50.0);
        assert_eq!(quiz.submit(), Err(QuizError::Finished));
    }

    #[test]
    fn test_reset_discards_pending_advance() {
        let mut quiz = QuizSession::new(&QUESTIONS);
        quiz.select(2).unwrap();
        let outcome = quiz.submit().unwrap();
        quiz.reset();

        assert!(!quiz.advance(outcome.ticket));
        assert_eq!(quiz.question_number(), 1);
        assert_eq!(quiz.correct_answers(), 0);
        assert_eq!(quiz.progress_percent(), 50.0);
    }
}
