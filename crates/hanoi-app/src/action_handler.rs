use hanoi_core::UndoOutcome;
use hanoi_game::ClickOutcome;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    now: f64,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action, now);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action, now: f64) {
    let puzzle_snapshot = app_state.game.puzzle().clone();
    let game = &mut app_state.game;

    match action {
        Action::ClickPeg(peg) => {
            if let ClickOutcome::Moved { record, solved } = game.click_peg(peg) {
                log::debug!(
                    "moved disk {} from {} to {}",
                    record.disk,
                    record.from,
                    record.to
                );
                if solved {
                    log::info!(
                        "solved {} in {} moves",
                        game.level(),
                        game.puzzle().moves()
                    );
                    ui_state.start_celebration(now);
                }
            }
        }
        Action::ClearSelection => game.clear_selection(),
        Action::RequestHint => {
            if let Some(hint) = game.request_hint() {
                log::debug!("hint: {} -> {}", hint.from, hint.to);
                ui_state.show_hint(now);
            }
        }
        Action::ExpireHint => game.clear_hint(),
        Action::Undo => match game.undo() {
            UndoOutcome::Undone(record) => {
                log::debug!("undid move of disk {}", record.disk);
            }
            UndoOutcome::NothingToUndo => {}
            UndoOutcome::Inconsistent(record) => {
                log::warn!("move history does not match the board, cannot undo {record:?}");
            }
        },
        Action::RetryLevel => {
            game.retry_level();
            ui_state.stop_celebration();
        }
        Action::NextLevel => {
            game.next_level();
            log::info!("starting level {}", game.level());
            ui_state.stop_celebration();
        }
        Action::ResetProgress => {
            game.reset_progress();
            ui_state.stop_celebration();
        }
        Action::DismissCompletion => game.dismiss_completion(),
    }

    if app_state.game.hint().is_none() {
        ui_state.hint_timer.cancel();
    }
    if *app_state.game.puzzle() != puzzle_snapshot {
        app_state.mark_dirty();
    }
}
