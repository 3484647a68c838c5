//! Move suggestions.

use crate::{Peg, Pile};

/// A suggested move from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    /// The peg whose top disk should move.
    pub from: Peg,
    /// The peg to move it to.
    pub to: Peg,
}

/// Destinations tried for the smallest disk, rightmost first.
const DESTINATION_PRIORITY: [Peg; 3] = [Peg::Right, Peg::Middle, Peg::Left];

/// Suggests a legal move for `piles`.
///
/// This is a heuristic, not a solver. It picks the smallest top disk and sends
/// it to the rightmost peg that accepts it. If that fails, it falls back to the
/// first legal `(from, to)` pair in index order. The suggestion is always legal,
/// but it does not necessarily lie on an optimal solution path.
///
/// Returns `None` only when no legal move exists, which never happens for a
/// puzzle holding at least one disk.
///
/// # Example
///
/// ```
/// use hanoi_core::{Hint, Peg, PuzzleState, suggest_move};
///
/// let puzzle = PuzzleState::new(3)?;
/// assert_eq!(
///     suggest_move(puzzle.piles()),
///     Some(Hint { from: Peg::Left, to: Peg::Right })
/// );
/// # Ok::<(), hanoi_core::PuzzleError>(())
/// ```
#[must_use]
pub fn suggest_move(piles: &[Pile; 3]) -> Option<Hint> {
    let smallest = Peg::ALL
        .into_iter()
        .filter_map(|peg| piles[peg.index()].top().map(|disk| (peg, disk)))
        .min_by_key(|&(_, disk)| disk);

    if let Some((from, disk)) = smallest
        && let Some(to) = DESTINATION_PRIORITY
            .into_iter()
            .filter(|&to| to != from)
            .find(|&to| piles[to.index()].can_accept(disk))
    {
        return Some(Hint { from, to });
    }

    first_legal_move(piles)
}

fn first_legal_move(piles: &[Pile; 3]) -> Option<Hint> {
    Peg::ALL
        .into_iter()
        .flat_map(|from| Peg::ALL.into_iter().map(move |to| Hint { from, to }))
        .filter(|hint| hint.from != hint.to)
        .find(|hint| {
            piles[hint.from.index()]
                .top()
                .is_some_and(|disk| piles[hint.to.index()].can_accept(disk))
        })
}
