//! Disk representation.

use std::{
    fmt::{self, Display},
    num::NonZero,
};

/// A disk, identified by its size.
///
/// Size 1 is the smallest disk. Disks order by size, and a disk may only be
/// placed on a strictly larger one.
///
/// # Examples
///
/// ```
/// use hanoi_core::Disk;
///
/// let small = Disk::new(1).unwrap();
/// let large = Disk::new(3).unwrap();
/// assert!(small < large);
/// assert_eq!(large.size(), 3);
///
/// // There is no disk of size zero.
/// assert!(Disk::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(NonZero<u8>);

impl Disk {
    /// Creates a disk of the given size, or `None` if `size` is zero.
    #[must_use]
    pub const fn new(size: u8) -> Option<Self> {
        match NonZero::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Returns the size of this disk (1 = smallest).
    #[must_use]
    pub const fn size(self) -> u8 {
        self.0.get()
    }
}

impl Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.size(), f)
    }
}

impl From<Disk> for u8 {
    fn from(disk: Disk) -> u8 {
        disk.size()
    }
}
