//! Sorting Game Controller
//!
//! Binds a `GameSession` to Leptos: the session lives in an `RwSignal`, the
//! feedback expiry runs on a browser timer, and unmounting freezes both.

use std::sync::Arc;

use leptos::prelude::*;
use terra_core::{CatalogError, Category, GameConfig, GameSession, Ticket};

use crate::timers::TimerSlot;

#[derive(Clone, Copy)]
pub struct SortingGameHandle<C: Category> {
    pub session: RwSignal<GameSession<C>>,
    feedback_timer: TimerSlot,
    feedback_delay_ms: u32,
}

/// Validate the config and start a session owned by the calling component
pub fn use_sorting_game<C: Category>(
    config: &'static GameConfig<C>,
) -> Result<SortingGameHandle<C>, CatalogError> {
    let catalog = Arc::new(config.catalog()?);
    let session = RwSignal::new(GameSession::new(catalog));
    let feedback_timer = TimerSlot::new();

    on_cleanup(move || {
        session.try_update(|s| s.teardown());
    });

    Ok(SortingGameHandle {
        session,
        feedback_timer,
        feedback_delay_ms: config.feedback_delay_ms,
    })
}

impl<C: Category> SortingGameHandle<C> {
    /// Drop handler for both bins
    pub fn drop_on(&self, item_id: u32, target: C) {
        let outcome = self.session.try_update(|s| s.drop_on(item_id, target)).flatten();
        if let Some(outcome) = outcome {
            self.schedule_clear(outcome.ticket);
        }
    }

    pub fn reset(&self) {
        self.feedback_timer.cancel();
        self.session.update(|s| s.reset());
    }

    fn schedule_clear(&self, ticket: Ticket) {
        let session = self.session;
        log::debug!("[GAME] clearing feedback in {}ms", self.feedback_delay_ms);
        self.feedback_timer.schedule(self.feedback_delay_ms, move || {
            session.try_update(|s| s.expire_feedback(ticket));
        });
    }
}
