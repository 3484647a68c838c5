//! Move records and the outcomes of moves and undos.

use crate::{Disk, Peg};

/// A single applied move, kept in the puzzle history for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    /// The peg the disk was taken from.
    pub from: Peg,
    /// The peg the disk was placed on.
    pub to: Peg,
    /// The disk that moved.
    pub disk: Disk,
}

impl MoveRecord {
    /// Creates a move record.
    #[must_use]
    pub const fn new(from: Peg, to: Peg, disk: Disk) -> Self {
        Self { from, to, disk }
    }
}

/// Result of [`PuzzleState::try_move`](crate::PuzzleState::try_move).
///
/// Only [`MoveOutcome::Applied`] changes the puzzle. Every other variant is a
/// rejection that leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The move was legal and has been applied.
    Applied(MoveRecord),
    /// Source and destination are the same peg.
    SamePeg,
    /// The source peg has no disk to move.
    SourceEmpty,
    /// The moving disk is larger than the destination's top disk.
    Blocked {
        /// The top disk of the source peg.
        moving: Disk,
        /// The top disk of the destination peg.
        target: Disk,
    },
}

impl MoveOutcome {
    /// Returns the applied move, if any.
    #[must_use]
    pub fn applied(self) -> Option<MoveRecord> {
        match self {
            Self::Applied(record) => Some(record),
            Self::SamePeg | Self::SourceEmpty | Self::Blocked { .. } => None,
        }
    }
}

/// Result of [`PuzzleState::undo`](crate::PuzzleState::undo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum UndoOutcome {
    /// The move was reversed and removed from the history.
    Undone(MoveRecord),
    /// The history is empty.
    NothingToUndo,
    /// The latest record does not match the piles, so nothing was changed.
    Inconsistent(MoveRecord),
}
