//! Game Session
//!
//! Owns the mutable state of one classification game: remaining items,
//! score and the expiring feedback. `drop_on` and `reset` are the only
//! mutators besides feedback expiry and teardown.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogEntry, Category, Item};
use crate::classify::{self, Feedback};
use crate::completion::Completion;
use crate::timer::{ExpiringSlot, Ticket};

/// Result of a drop that was actually applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome<C> {
    pub item: Item<C>,
    pub matched: bool,
    pub feedback: Feedback,
    /// Hand this back to `expire_feedback` once the delay has elapsed
    pub ticket: Ticket,
}

#[derive(Debug, Clone)]
pub struct GameSession<C> {
    catalog: Arc<Catalog<C>>,
    remaining: Vec<CatalogEntry<C>>,
    score: usize,
    feedback: ExpiringSlot<Feedback>,
}

impl<C: Category> GameSession<C> {
    pub fn new(catalog: Arc<Catalog<C>>) -> Self {
        let remaining = catalog.entries().to_vec();
        Self { catalog, remaining, score: 0, feedback: ExpiringSlot::new() }
    }

    pub fn catalog(&self) -> &Catalog<C> {
        &self.catalog
    }

    /// Classify `item_id` into `target`.
    ///
    /// Returns `None` without touching anything when the item is no longer
    /// on the board (duplicate or late drop event) or the session was torn down.
    pub fn drop_on(&mut self, item_id: u32, target: C) -> Option<DropOutcome<C>> {
        if self.feedback.is_closed() {
            return None;
        }
        let position = self.remaining.iter().position(|entry| entry.item.id == item_id)?;

        let entry = self.remaining.remove(position);
        let resolution = classify::resolve_drop(&entry, target, self.catalog.correct_message());
        if resolution.matched {
            self.score += 1;
        }
        let ticket = self.feedback.show(resolution.feedback)?;

        log::debug!(
            "[GAME] item {} dropped on {:?}: matched={}, score={}/{}",
            item_id,
            target,
            resolution.matched,
            self.score,
            self.catalog.len()
        );

        Some(DropOutcome {
            item: entry.item,
            matched: resolution.matched,
            feedback: resolution.feedback,
            ticket,
        })
    }

    /// Timer callback; stale tickets are ignored
    pub fn expire_feedback(&mut self, ticket: Ticket) -> bool {
        self.feedback.expire(ticket)
    }

    /// Back to the full catalog in its original order
    pub fn reset(&mut self) {
        if self.feedback.is_closed() {
            return;
        }
        self.remaining = self.catalog.entries().to_vec();
        self.score = 0;
        self.feedback.clear();
        log::debug!("[GAME] session reset with {} items", self.remaining.len());
    }

    /// The hosting view is going away; freeze the session
    pub fn teardown(&mut self) {
        self.feedback.close();
    }

    pub fn remaining(&self) -> impl Iterator<Item = &Item<C>> + '_ {
        self.remaining.iter().map(|entry| &entry.item)
    }

    pub fn remaining_items(&self) -> Vec<Item<C>> {
        self.remaining().copied().collect()
    }

    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback.current().copied()
    }

    pub fn pending_feedback(&self) -> Option<Ticket> {
        self.feedback.pending_ticket()
    }

    pub fn progress_percent(&self) -> f64 {
        100.0 * self.score as f64 / self.catalog.len() as f64
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Summary for the completion panel, available once the board is empty
    pub fn completion(&self) -> Option<Completion> {
        self.is_complete().then(|| Completion::new(self.score, self.catalog.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::FeedbackKind;
    use crate::completion::CompletionTier;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Bin {
        Good,
        Bad,
    }

    fn session() -> GameSession<Bin> {
        let catalog = Catalog::new(
            vec![
                Item { id: 1, label: "a", category: Bin::Good },
                Item { id: 2, label: "b", category: Bin::Bad },
                Item { id: 3, label: "c", category: Bin::Good },
            ],
            vec![(1, "why a"), (2, "why b"), (3, "why c")],
            [Bin::Good, Bin::Bad],
            "yes",
        )
        .unwrap();
        GameSession::new(Arc::new(catalog))
    }

    #[test]
    fn test_new_session_starts_full() {
        let s = session();
        assert_eq!(s.remaining_len(), 3);
        assert_eq!(s.score(), 0);
        assert_eq!(s.feedback(), None);
        assert!(!s.is_complete());
        assert_eq!(s.completion(), None);
    }

    #[test]
    fn test_wrong_drop_still_consumes_item() {
        let mut s = session();
        let outcome = s.drop_on(2, Bin::Good).unwrap();
        assert!(!outcome.matched);
        assert_eq!(outcome.feedback.kind, FeedbackKind::Explanation);
        assert_eq!(s.feedback().map(|f| f.message), Some("why b"));
        assert_eq!(s.score(), 0);
        assert_eq!(s.remaining_len(), 2);
    }

    #[test]
    fn test_duplicate_drop_is_noop() {
        let mut s = session();
        assert!(s.drop_on(1, Bin::Good).is_some());
        let before = s.clone().remaining_items();
        assert!(s.drop_on(1, Bin::Good).is_none());
        assert!(s.drop_on(99, Bin::Bad).is_none());
        assert_eq!(s.remaining_items(), before);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_reset_restores_order_and_clears_feedback() {
        let mut s = session();
        s.drop_on(3, Bin::Good);
        s.drop_on(1, Bin::Bad);
        let ticket = s.pending_feedback().unwrap();

        s.reset();
        let ids: Vec<u32> = s.remaining().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(s.score(), 0);
        assert_eq!(s.feedback(), None);
        assert!(!s.expire_feedback(ticket));
    }

    #[test]
    fn test_progress_and_completion() {
        let mut s = session();
        s.drop_on(1, Bin::Good);
        assert_eq!(s.progress_percent(), 100.0 * 1.0 / 3.0);
        s.drop_on(2, Bin::Bad);
        s.drop_on(3, Bin::Bad);

        assert!(s.is_complete());
        let completion = s.completion().unwrap();
        assert_eq!(completion.score, 2);
        assert_eq!(completion.tier, CompletionTier::Passing);
    }

    #[test]
    fn test_teardown_freezes_session() {
        let mut s = session();
        let outcome = s.drop_on(1, Bin::Good).unwrap();
        s.teardown();

        assert!(!s.expire_feedback(outcome.ticket));
        assert!(s.drop_on(2, Bin::Bad).is_none());
        s.reset();
        assert_eq!(s.remaining_len(), 2);
        assert_eq!(s.score(), 1);
    }
}
