//! Completion summary derived from the final score

/// Outcome band once every item has been classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTier {
    /// Every item classified correctly
    Perfect,
    /// At least half correct
    Passing,
    NeedsPractice,
}

impl CompletionTier {
    pub fn from_score(score: usize, total: usize) -> Self {
        if score >= total {
            CompletionTier::Perfect
        } else if score * 2 >= total {
            CompletionTier::Passing
        } else {
            CompletionTier::NeedsPractice
        }
    }

    /// CSS modifier for the reset button
    pub fn tone(self) -> &'static str {
        match self {
            CompletionTier::Perfect => "perfect",
            _ => "retry",
        }
    }
}

/// Per-game wording for the completion panel
#[derive(Debug, Clone, Copy)]
pub struct CompletionText {
    pub perfect_heading: &'static str,
    pub heading: &'static str,
    pub perfect: &'static str,
    pub passing: &'static str,
    pub needs_practice: &'static str,
    pub play_again: &'static str,
}

impl CompletionText {
    pub fn heading(&self, tier: CompletionTier) -> &'static str {
        match tier {
            CompletionTier::Perfect => self.perfect_heading,
            _ => self.heading,
        }
    }

    pub fn message(&self, tier: CompletionTier) -> &'static str {
        match tier {
            CompletionTier::Perfect => self.perfect,
            CompletionTier::Passing => self.passing,
            CompletionTier::NeedsPractice => self.needs_practice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub tier: CompletionTier,
    pub score: usize,
    pub total: usize,
}

impl Completion {
    pub fn new(score: usize, total: usize) -> Self {
        Self { tier: CompletionTier::from_score(score, total), score, total }
    }
}
