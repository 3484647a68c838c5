use std::mem;

use hanoi_core::Peg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    ClickPeg(Peg),
    ClearSelection,
    RequestHint,
    ExpireHint,
    Undo,
    RetryLevel,
    NextLevel,
    ResetProgress,
    DismissCompletion,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
