//! Core puzzle model for the Tower of Hanoi.
//!
//! This crate holds the rendering-independent puzzle state machine: three pegs,
//! a set of uniquely sized disks, legal-move validation, win detection, undo,
//! and a move hint heuristic. Front-ends drive it through [`PuzzleState`] and
//! read it back for rendering.
//!
//! # Overview
//!
//! 1. **Basic types**
//!    - [`peg`]: the three pegs, [`Peg::Left`] to [`Peg::Right`]
//!    - [`disk`]: disk sizes, where 1 is the smallest disk
//!    - [`pile`]: the ordered stack of disks on one peg
//!
//! 2. **State machine**
//!    - [`puzzle`]: [`PuzzleState`] with `try_move` and `undo`
//!    - [`record`]: move records and the outcomes of moves and undos
//!
//! 3. **Assistance**
//!    - [`hint`]: [`suggest_move`], a heuristic that always proposes a legal move
//!
//! # Examples
//!
//! ```
//! use hanoi_core::{Peg, PuzzleState};
//!
//! let mut puzzle = PuzzleState::new(3)?;
//! assert!(puzzle.try_move(Peg::Left, Peg::Right).is_applied());
//! assert!(puzzle.try_move(Peg::Left, Peg::Right).is_blocked());
//! assert_eq!(puzzle.moves(), 1);
//!
//! assert!(puzzle.undo().is_undone());
//! assert_eq!(puzzle, PuzzleState::new(3)?);
//! # Ok::<(), hanoi_core::PuzzleError>(())
//! ```

pub mod disk;
pub mod error;
pub mod hint;
pub mod peg;
pub mod pile;
pub mod puzzle;
pub mod record;

pub use self::{
    disk::Disk,
    error::PuzzleError,
    hint::{Hint, suggest_move},
    peg::Peg,
    pile::Pile,
    puzzle::{MAX_DISK_COUNT, MIN_DISK_COUNT, PuzzleState, min_moves},
    record::{MoveOutcome, MoveRecord, UndoOutcome},
};
