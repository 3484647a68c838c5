//! The stack of disks on a single peg.

use std::slice;

use crate::Disk;

/// The disks stacked on one peg, bottom first.
///
/// The last disk is the top of the stack and the only one that can be moved.
/// Piles held by a [`PuzzleState`](crate::PuzzleState) are always strictly
/// decreasing from bottom to top; a free-standing pile built with
/// [`FromIterator`] is not checked.
///
/// # Examples
///
/// ```
/// use hanoi_core::{Disk, Pile};
///
/// let pile = Pile::full(3);
/// assert_eq!(pile.len(), 3);
/// assert_eq!(pile.top(), Disk::new(1));
/// assert!(pile.is_strictly_decreasing());
///
/// // Only a smaller disk can go on top.
/// assert!(!pile.can_accept(Disk::new(2).unwrap()));
/// assert!(Pile::new().can_accept(Disk::new(2).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pile {
    disks: Vec<Disk>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { disks: Vec::new() }
    }

    /// Creates the starting pile: disks `disk_count` down to 1.
    #[must_use]
    pub fn full(disk_count: u8) -> Self {
        (1..=disk_count).rev().filter_map(Disk::new).collect()
    }

    /// Returns the top disk, or `None` if the pile is empty.
    #[must_use]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Returns the number of disks on the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Returns `true` if the pile holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Returns the disks from bottom to top.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Iterates over the disks from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Disk> + ExactSizeIterator + '_ {
        self.disks.iter().copied()
    }

    /// Returns `true` if `disk` may be placed on this pile.
    ///
    /// A disk is accepted by an empty pile or by a pile whose top is larger.
    #[must_use]
    pub fn can_accept(&self, disk: Disk) -> bool {
        self.top().is_none_or(|top| disk < top)
    }

    /// Returns `true` if the disk sizes strictly decrease from bottom to top.
    #[must_use]
    pub fn is_strictly_decreasing(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }
}

impl FromIterator<Disk> for Pile {
    fn from_iter<T: IntoIterator<Item = Disk>>(iter: T) -> Self {
        Self {
            disks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = Disk;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Disk>>;

    fn into_iter(self) -> Self::IntoIter {
        self.disks.iter().copied()
    }
}
