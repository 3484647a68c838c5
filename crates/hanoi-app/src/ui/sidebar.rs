use eframe::egui::{Button, RichText, Ui};
use hanoi_game::Level;

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarViewModel {
    pub(crate) level: Level,
    pub(crate) moves: u32,
    pub(crate) min_moves: u64,
    pub(crate) can_hint: bool,
    pub(crate) can_undo: bool,
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            stat(ui, "Level", &vm.level.to_string());
            stat(ui, "Moves", &vm.moves.to_string());
            stat(ui, "Best possible", &vm.min_moves.to_string());
        });

        ui.add_space(8.0);

        let buttons = [
            (
                "Hint",
                "Show a helpful move (H)",
                vm.can_hint,
                Action::RequestHint,
            ),
            ("Undo", "Undo last move (Ctrl+Z)", vm.can_undo, Action::Undo),
            (
                "Restart Level",
                "Start this level over (R)",
                true,
                Action::RetryLevel,
            ),
            (
                "Reset Progress",
                "Go back to the first level",
                true,
                Action::ResetProgress,
            ),
        ];
        for (label, tooltip, enabled, action) in buttons {
            let button = Button::new(label).min_size([ui.available_width(), 28.0].into());
            if ui
                .add_enabled(enabled, button)
                .on_hover_text(tooltip)
                .clicked()
            {
                action_queue.request(action);
            }
        }
    });
}

fn stat(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{label}:")).strong());
        ui.label(value);
    });
}
