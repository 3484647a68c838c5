use std::fmt::{self, Display};

use hanoi_core::min_moves;

/// A game level, identified by its disk count.
///
/// Levels run from [`Level::MIN`] (3 disks) to [`Level::MAX`] (7 disks).
/// Out-of-range disk counts are clamped into that range.
///
/// # Example
///
/// ```
/// use hanoi_game::Level;
///
/// assert_eq!(Level::new(5).disk_count(), 5);
/// assert_eq!(Level::new(1), Level::MIN);
/// assert_eq!(Level::new(12), Level::MAX);
/// assert_eq!(Level::MAX.next(), Level::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// The first level.
    pub const MIN: Self = Self(3);

    /// The last level.
    pub const MAX: Self = Self(7);

    /// Creates the level for `disk_count`, clamped to [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    #[must_use]
    pub fn new(disk_count: u8) -> Self {
        Self(disk_count.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Returns the number of disks at this level.
    #[must_use]
    pub const fn disk_count(self) -> u8 {
        self.0
    }

    /// Returns the following level, or this one if it is the last.
    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Returns `true` if this is the last level.
    #[must_use]
    pub fn is_max(self) -> bool {
        self == Self::MAX
    }

    /// Returns the fewest moves that solve this level.
    #[must_use]
    pub fn min_moves(self) -> u64 {
        min_moves(self.0)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} disks", self.0)
    }
}
