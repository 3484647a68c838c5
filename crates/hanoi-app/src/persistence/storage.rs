use eframe::Storage;
use hanoi_game::Game;

use crate::{persistence::dto::PuzzleStateDto, state::AppState};

pub(crate) const STORAGE_KEY: &str = "hanoi-v1";

#[must_use]
pub(crate) fn load_state(storage: &dyn Storage) -> Option<AppState> {
    let Some(dto) = eframe::get_value::<PuzzleStateDto>(storage, STORAGE_KEY) else {
        log::debug!("no usable saved puzzle");
        return None;
    };
    match dto.into_puzzle() {
        Ok(puzzle) => {
            log::info!("restored puzzle with {} disks", puzzle.disk_count());
            Some(AppState::new(Game::from_puzzle(puzzle)))
        }
        Err(err) => {
            log::warn!("discarding saved puzzle: {err}");
            None
        }
    }
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    let dto = PuzzleStateDto::from_puzzle(app_state.game.puzzle());
    eframe::set_value(storage, STORAGE_KEY, &dto);
}
