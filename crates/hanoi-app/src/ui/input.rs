use eframe::egui::{InputState, Key};
use hanoi_core::Peg;

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(key: Key, command: bool, action: Action) -> Self {
        Self {
            trigger: Trigger { key, command },
            action,
        }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(key, true, action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(key, false, action)
    }
}

const SHORTCUTS: [Shortcut; 7] = [
    Shortcut::command(Key::Z, Action::Undo),
    Shortcut::plain(Key::Num1, Action::ClickPeg(Peg::Left)),
    Shortcut::plain(Key::Num2, Action::ClickPeg(Peg::Middle)),
    Shortcut::plain(Key::Num3, Action::ClickPeg(Peg::Right)),
    Shortcut::plain(Key::H, Action::RequestHint),
    Shortcut::plain(Key::R, Action::RetryLevel),
    Shortcut::plain(Key::Escape, Action::ClearSelection),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
