//! Errors for building puzzle states.

use crate::{Disk, Peg};

/// Errors returned when a [`PuzzleState`](crate::PuzzleState) cannot be built.
///
/// Moves and undos never fail with an error; they report their result through
/// [`MoveOutcome`](crate::MoveOutcome) and [`UndoOutcome`](crate::UndoOutcome).
/// These errors only come from creating a puzzle or restoring one from parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The disk count is outside the supported range.
    #[display("disk count {count} is out of range")]
    InvalidDiskCount {
        /// The rejected disk count.
        count: u8,
    },
    /// A pile holds a disk larger than the disk count.
    #[display("disk {disk} exceeds disk count {disk_count}")]
    DiskOutOfRange {
        /// The oversized disk.
        disk: Disk,
        /// The puzzle's disk count.
        disk_count: u8,
    },
    /// The same disk appears more than once across the piles.
    #[display("disk {disk} appears more than once")]
    DuplicateDisk {
        /// The repeated disk.
        disk: Disk,
    },
    /// A disk is absent from every pile.
    #[display("disk {disk} is missing")]
    MissingDisk {
        /// The absent disk.
        disk: Disk,
    },
    /// A pile is not strictly decreasing from bottom to top.
    #[display("pile on {peg} peg is not strictly decreasing")]
    UnorderedPile {
        /// The peg holding the unordered pile.
        peg: Peg,
    },
    /// The puzzle is flagged completed while the goal peg is not full.
    #[display("puzzle is marked completed but the goal peg is not full")]
    CompletionMismatch,
}
