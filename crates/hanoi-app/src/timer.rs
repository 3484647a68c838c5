//! One-shot deadlines measured on the frame clock.
//!
//! Times are seconds as reported by `egui::InputState::time`. A timer fires at
//! most once per `schedule` call; rescheduling replaces the pending deadline.

use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct Timer {
    deadline: Option<f64>,
}

impl Timer {
    pub(crate) fn schedule(&mut self, now: f64, delay: Duration) {
        self.deadline = Some(now + delay.as_secs_f64());
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub(crate) fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, zero once it has passed.
    #[must_use]
    pub(crate) fn remaining(&self, now: f64) -> Option<Duration> {
        self.deadline
            .map(|deadline| Duration::from_secs_f64((deadline - now).max(0.0)))
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub(crate) fn poll(&mut self, now: f64) -> bool {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
            return true;
        }
        false
    }
}
