//! Tower of Hanoi game session management.
//!
//! This crate wraps the puzzle state machine from `hanoi-core` with the
//! player-facing rules of a game: the level ladder, peg selection by clicking,
//! the hint on display, and the completion dialog.
//!
//! # Overview
//!
//! - [`Level`]: the disk count of a level, from [`Level::MIN`] to [`Level::MAX`]
//! - [`Game`]: one session, driven by [`Game::click_peg`] and friends
//! - [`ClickOutcome`]: what a peg click did, for the front-end to react to
//!
//! # Example
//!
//! ```
//! use hanoi_core::Peg;
//! use hanoi_game::{ClickOutcome, Game, Level};
//!
//! let mut game = Game::new(Level::MIN);
//!
//! // Clicking a peg with disks selects it; clicking another moves the top disk.
//! assert_eq!(game.click_peg(Peg::Left), ClickOutcome::Selected(Peg::Left));
//! assert!(game.click_peg(Peg::Right).is_moved());
//! assert_eq!(game.puzzle().moves(), 1);
//! ```

pub use self::{game::*, level::*};

mod game;
mod level;
