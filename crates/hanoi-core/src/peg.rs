//! Peg identifiers.

/// One of the three pegs.
///
/// Pegs are indexed 0 to 2 from left to right. The puzzle starts with every
/// disk on [`Peg::Left`] and is solved when every disk sits on [`Peg::GOAL`].
///
/// # Examples
///
/// ```
/// use hanoi_core::Peg;
///
/// assert_eq!(Peg::Middle.index(), 1);
/// assert_eq!(Peg::from_index(2), Some(Peg::Right));
/// assert_eq!(Peg::from_index(3), None);
/// assert_eq!(Peg::Left.to_string(), "Left");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Peg {
    /// The leftmost peg (index 0), where every game starts.
    Left = 0,
    /// The middle peg (index 1).
    Middle = 1,
    /// The rightmost peg (index 2), the goal peg.
    Right = 2,
}

impl Peg {
    /// All pegs in index order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Middle, Self::Right];

    /// The peg that must hold every disk for the puzzle to be solved.
    pub const GOAL: Self = Self::Right;

    /// Returns the peg at `index`, or `None` if `index` is not 0, 1, or 2.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the index of this peg (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}
