use std::time::Duration;

use hanoi_game::Game;

use crate::{
    CONFETTI_DURATION, HINT_DISPLAY_DURATION,
    action::{Action, ActionRequestQueue},
    timer::Timer,
    ui::confetti::Confetti,
};

// AppState holds the game session. Only its puzzle is persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Game,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(game: Game) -> Self {
        Self { game, dirty: false }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

// UiState holds ephemeral timers and effects. It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) hint_timer: Timer,
    pub(crate) confetti_timer: Timer,
    pub(crate) confetti: Option<Confetti>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn show_hint(&mut self, now: f64) {
        self.hint_timer.schedule(now, HINT_DISPLAY_DURATION);
    }

    pub(crate) fn start_celebration(&mut self, now: f64) {
        self.confetti = Some(Confetti::burst(now));
        self.confetti_timer.schedule(now, CONFETTI_DURATION);
    }

    pub(crate) fn stop_celebration(&mut self) {
        self.confetti = None;
        self.confetti_timer.cancel();
    }

    /// Fires expired timers, turning an expired hint into an [`Action::ExpireHint`].
    pub(crate) fn poll_timers(&mut self, now: f64, action_queue: &mut ActionRequestQueue) {
        if self.hint_timer.poll(now) {
            action_queue.request(Action::ExpireHint);
        }
        if self.confetti_timer.poll(now) {
            self.confetti = None;
        }
    }

    #[must_use]
    pub(crate) fn is_animating(&self) -> bool {
        self.confetti.is_some() && self.confetti_timer.is_pending()
    }

    /// Time until the next pending timer fires.
    #[must_use]
    pub(crate) fn next_deadline(&self, now: f64) -> Option<Duration> {
        [self.hint_timer, self.confetti_timer]
            .iter()
            .filter_map(|timer| timer.remaining(now))
            .min()
    }
}
