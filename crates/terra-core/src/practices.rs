//! Good Practices Checklist
//!
//! Tally of water-saving tips the player has adopted, plus the storage
//! format used to keep it between visits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Storage key for the implemented flags (JSON object, index -> bool)
pub const IMPLEMENTED_TIPS_KEY: &str = "implementedTips";
/// Storage key for the saved litres total
pub const WATER_SAVED_KEY: &str = "waterSaved";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Litres saved per day when adopted
    pub saving_litres: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaverLevel {
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl SaverLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 30.0 {
            SaverLevel::Beginner
        } else if percent < 60.0 {
            SaverLevel::Intermediate
        } else if percent < 90.0 {
            SaverLevel::Advanced
        } else {
            SaverLevel::Master
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SaverLevel::Beginner => "Iniciante",
            SaverLevel::Intermediate => "Intermediário",
            SaverLevel::Advanced => "Avançado",
            SaverLevel::Master => "Mestre da Economia",
        }
    }
}

/// Which tips are implemented, keyed by tip index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipChecklist {
    implemented: BTreeMap<usize, bool>,
}

impl TipChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from the stored JSON. Missing or malformed data starts empty.
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(checklist) => checklist,
            Err(e) => {
                log::warn!("[PRACTICES] ignoring stored checklist: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Flip one tip; indexes outside `tips` are ignored
    pub fn toggle(&mut self, tips: &[Tip], index: usize) {
        if index >= tips.len() {
            return;
        }
        let flag = self.implemented.entry(index).or_insert(false);
        *flag = !*flag;
    }

    pub fn is_implemented(&self, index: usize) -> bool {
        self.implemented.get(&index).copied().unwrap_or(false)
    }

    pub fn water_saved(&self, tips: &[Tip]) -> u32 {
        tips.iter()
            .enumerate()
            .filter(|(index, _)| self.is_implemented(*index))
            .map(|(_, tip)| tip.saving_litres)
            .sum()
    }

    pub fn saved_percent(&self, tips: &[Tip]) -> f64 {
        let total = total_possible(tips);
        if total == 0 {
            return 0.0;
        }
        100.0 * self.water_saved(tips) as f64 / total as f64
    }

    pub fn level(&self, tips: &[Tip]) -> SaverLevel {
        SaverLevel::from_percent(self.saved_percent(tips))
    }
}

/// Daily goal: every tip adopted
pub fn total_possible(tips: &[Tip]) -> u32 {
    tips.iter().map(|tip| tip.saving_litres).sum()
}
