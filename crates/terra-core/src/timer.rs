//! Expiring Slot
//!
//! Holds a value that disappears after a delay. The slot never touches a
//! clock itself: every `show` hands out a `Ticket`, the host schedules a
//! timer, and the timer callback calls `expire(ticket)`. Only the newest
//! ticket can clear the slot, so a superseded timer firing late is harmless.

/// Identifies one scheduled expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
enum SlotState<T> {
    Idle,
    Pending { ticket: Ticket, value: T },
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpiringSlot<T> {
    state: SlotState<T>,
    issued: u64,
}

impl<T> Default for ExpiringSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExpiringSlot<T> {
    pub fn new() -> Self {
        Self { state: SlotState::Idle, issued: 0 }
    }

    /// Replace the current value and invalidate any outstanding ticket.
    /// Returns `None` once the slot has been closed.
    pub fn show(&mut self, value: T) -> Option<Ticket> {
        if self.is_closed() {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = SlotState::Pending { ticket, value };
        Some(ticket)
    }

    /// Timer callback. Clears the value only if `ticket` is still current.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        match &self.state {
            SlotState::Pending { ticket: current, .. } if *current == ticket => {
                self.state = SlotState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop the value and cancel the pending expiry
    pub fn clear(&mut self) {
        if !self.is_closed() {
            self.state = SlotState::Idle;
        }
    }

    /// Teardown: nothing can be shown or expired afterwards
    pub fn close(&mut self) {
        self.state = SlotState::Closed;
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, SlotState::Closed)
    }

    pub fn current(&self) -> Option<&T> {
        match &self.state {
            SlotState::Pending { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        match &self.state {
            SlotState::Pending { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_with_current_ticket_clears() {
        let mut slot = ExpiringSlot::new();
        let ticket = slot.show("hello").unwrap();
        assert_eq!(slot.current(), Some(&"hello"));
        assert!(slot.expire(ticket));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_superseded_ticket_is_ignored() {
        let mut slot = ExpiringSlot::new();
        let first = slot.show("first").unwrap();
        let second = slot.show("second").unwrap();
        assert_ne!(first, second);

        assert!(!slot.expire(first));
        assert_eq!(slot.current(), Some(&"second"));
        assert!(slot.expire(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_clear_cancels_pending() {
        let mut slot = ExpiringSlot::new();
        let ticket = slot.show(1).unwrap();
        slot.clear();
        assert_eq!(slot.pending_ticket(), None);
        assert!(!slot.expire(ticket));
    }

    #[test]
    fn test_closed_slot_refuses_everything() {
        let mut slot = ExpiringSlot::new();
        let ticket = slot.show(1).unwrap();
        slot.close();

        assert!(!slot.expire(ticket));
        assert_eq!(slot.show(2), None);
        slot.clear();
        assert!(slot.is_closed());
        assert_eq!(slot.current(), None);
    }
}
