//! Classification
//!
//! Compares an item's true category with the bin it was dropped on.
//! A wrong answer is a normal outcome carrying the item's explanation.

use crate::catalog::{CatalogEntry, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Explanation,
}

/// Transient message shown after a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: &'static str,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        self.kind == FeedbackKind::Correct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub matched: bool,
    pub feedback: Feedback,
}

/// Judge a single drop. The explanation is the same whichever wrong bin was used.
pub fn resolve_drop<C: Category>(
    entry: &CatalogEntry<C>,
    target: C,
    correct_message: &'static str,
) -> Resolution {
    let matched = entry.item.category == target;
    let feedback = if matched {
        Feedback { kind: FeedbackKind::Correct, message: correct_message }
    } else {
        Feedback { kind: FeedbackKind::Explanation, message: entry.explanation }
    };
    Resolution { matched, feedback }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Bin {
        Keep,
        Toss,
    }

    const ENTRY: CatalogEntry<Bin> = CatalogEntry {
        item: Item { id: 7, label: "Garrafa", category: Bin::Keep },
        explanation: "Garrafas podem ser reutilizadas.",
    };

    #[test]
    fn test_matching_bin_uses_affirmative_message() {
        let resolution = resolve_drop(&ENTRY, Bin::Keep, "Correto!");
        assert!(resolution.matched);
        assert!(resolution.feedback.is_correct());
        assert_eq!(resolution.feedback.message, "Correto!");
    }

    #[test]
    fn test_wrong_bin_uses_item_explanation() {
        let resolution = resolve_drop(&ENTRY, Bin::Toss, "Correto!");
        assert!(!resolution.matched);
        assert_eq!(resolution.feedback.kind, FeedbackKind::Explanation);
        assert_eq!(resolution.feedback.message, "Garrafas podem ser reutilizadas.");
    }
}
