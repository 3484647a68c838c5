use eframe::egui::{Context, Id, Modal, Response, Sides, Ui};
use hanoi_game::Level;

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CompletionViewModel {
    pub(crate) moves: u32,
    /// The level to advance to, or `None` on the last level.
    pub(crate) next_level: Option<Level>,
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

pub(crate) fn show_completion(
    ctx: &Context,
    vm: &CompletionViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    let modal = Modal::new(Id::new("completion")).show(ctx, |ui| {
        ui.heading("Great job!");
        ui.add_space(4.0);

        ui.label(format!("You solved it in {} moves.", vm.moves));
        ui.add_space(8.0);

        let mut level_chosen = false;
        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                let (label, action) = match vm.next_level {
                    Some(level) => (
                        format!("Next Level ({} disks)", level.disk_count()),
                        Action::NextLevel,
                    ),
                    None => ("Play Again".to_owned(), Action::RetryLevel),
                };
                let primary = ui.button(label);
                request_focus_if_none(ui, &primary);
                if primary.clicked() {
                    action_queue.request(action);
                    level_chosen = true;
                    ui.close();
                }

                if ui.button("Keep Looking").clicked() {
                    ui.close();
                }
            },
        );
        level_chosen
    });

    // Closing without picking a level keeps the solved board in view.
    if modal.should_close() && !modal.inner {
        action_queue.request(Action::DismissCompletion);
    }
}
