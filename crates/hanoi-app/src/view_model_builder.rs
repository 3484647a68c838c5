use hanoi_core::{Disk, Peg};
use hanoi_game::Game;

use crate::{
    state::AppState,
    ui::{
        board::{BoardViewModel, PegViewModel, PegVisualState},
        dialogs::CompletionViewModel,
        game_screen::GameScreenViewModel,
        sidebar::SidebarViewModel,
    },
};

fn peg_visual_state(game: &Game, peg: Peg) -> PegVisualState {
    let mut vs = PegVisualState::empty();
    if game.selected() == Some(peg) {
        vs |= PegVisualState::SELECTED;
    }
    if let Some(hint) = game.hint() {
        if hint.from == peg {
            vs |= PegVisualState::HINT_FROM;
        }
        if hint.to == peg {
            vs |= PegVisualState::HINT_TO;
        }
    }
    vs
}

#[must_use]
pub(crate) fn build_board_vm(game: &Game) -> BoardViewModel {
    let puzzle = game.puzzle();
    BoardViewModel {
        pegs: Peg::ALL.map(|peg| PegViewModel {
            disks: puzzle.pile(peg).iter().map(Disk::size).collect(),
            visual_state: peg_visual_state(game, peg),
        }),
        disk_count: puzzle.disk_count(),
    }
}

#[must_use]
pub(crate) fn build_sidebar_vm(game: &Game) -> SidebarViewModel {
    let puzzle = game.puzzle();
    SidebarViewModel {
        level: game.level(),
        moves: puzzle.moves(),
        min_moves: puzzle.min_moves(),
        can_hint: game.can_hint(),
        can_undo: game.can_undo(),
    }
}

#[must_use]
pub(crate) fn build_game_screen_view_model(app_state: &AppState) -> GameScreenViewModel {
    GameScreenViewModel::new(
        build_board_vm(&app_state.game),
        build_sidebar_vm(&app_state.game),
    )
}

#[must_use]
pub(crate) fn build_completion_view_model(app_state: &AppState) -> Option<CompletionViewModel> {
    let game = &app_state.game;
    game.shows_completion().then(|| {
        let level = game.level();
        CompletionViewModel {
            moves: game.puzzle().moves(),
            next_level: (!level.is_max()).then(|| level.next()),
        }
    })
}
