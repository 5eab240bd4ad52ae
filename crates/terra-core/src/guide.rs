//! Water quality guide entries and the single-open accordion

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterProblem {
    pub problem: &'static str,
    pub symptoms: &'static [&'static str],
    pub solution: &'static str,
    pub prevention: &'static str,
}

/// At most one entry is expanded at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_and_closes() {
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        assert!(accordion.is_expanded(1));

        accordion.toggle(3);
        assert!(!accordion.is_expanded(1));
        assert_eq!(accordion.expanded(), Some(3));

        accordion.toggle(3);
        assert_eq!(accordion.expanded(), None);
    }
}
