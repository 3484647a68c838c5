//! The puzzle state machine.

use std::mem;

use crate::{
    Disk, Hint, MoveOutcome, MoveRecord, Peg, Pile, PuzzleError, UndoOutcome, hint::suggest_move,
};

/// Smallest disk count a puzzle accepts.
pub const MIN_DISK_COUNT: u8 = 1;

/// Largest disk count a puzzle accepts.
///
/// Gameplay levels use a narrower range; this bound is what restored states
/// may carry.
pub const MAX_DISK_COUNT: u8 = 12;

/// Returns the fewest moves that solve a puzzle with `disk_count` disks,
/// `2^disk_count - 1`.
///
/// # Examples
///
/// ```
/// use hanoi_core::min_moves;
///
/// assert_eq!(min_moves(1), 1);
/// assert_eq!(min_moves(3), 7);
/// assert_eq!(min_moves(7), 127);
/// ```
#[must_use]
pub fn min_moves(disk_count: u8) -> u64 {
    1_u64
        .checked_shl(u32::from(disk_count))
        .map_or(u64::MAX, |n| n - 1)
}

/// A Tower of Hanoi puzzle in progress.
///
/// Holds the three piles, the move counter, the completion flag, and the
/// history used for undo. The state only changes through [`try_move`] and
/// [`undo`], and both keep these invariants:
///
/// - the piles together hold disks `1..=disk_count`, each exactly once;
/// - every pile is strictly decreasing from bottom to top.
///
/// [`try_move`]: PuzzleState::try_move
/// [`undo`]: PuzzleState::undo
///
/// # Example
///
/// ```
/// use hanoi_core::{Peg, PuzzleState};
///
/// let mut puzzle = PuzzleState::new(2)?;
/// puzzle.try_move(Peg::Left, Peg::Middle);
/// puzzle.try_move(Peg::Left, Peg::Right);
/// puzzle.try_move(Peg::Middle, Peg::Right);
///
/// assert!(puzzle.is_completed());
/// assert_eq!(puzzle.moves(), 3);
/// assert_eq!(u64::from(puzzle.moves()), puzzle.min_moves());
/// # Ok::<(), hanoi_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    disk_count: u8,
    piles: [Pile; 3],
    moves: u32,
    completed: bool,
    history: Vec<MoveRecord>,
}

impl PuzzleState {
    /// Creates a fresh puzzle with every disk on [`Peg::Left`].
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidDiskCount`] if `disk_count` is outside
    /// [`MIN_DISK_COUNT`]..=[`MAX_DISK_COUNT`].
    pub fn new(disk_count: u8) -> Result<Self, PuzzleError> {
        check_disk_count(disk_count)?;
        Ok(Self {
            disk_count,
            piles: [Pile::full(disk_count), Pile::new(), Pile::new()],
            moves: 0,
            completed: false,
            history: Vec::new(),
        })
    }

    /// Rebuilds a puzzle from previously saved parts.
    ///
    /// The piles must hold every disk `1..=disk_count` exactly once, each pile
    /// strictly decreasing. `completed` may be `false` on a full goal peg
    /// (the state right after an undo) but not `true` on an unfinished one.
    /// The history is taken as is; [`undo`](Self::undo) checks each record
    /// before applying it.
    ///
    /// # Errors
    ///
    /// Returns the first [`PuzzleError`] found in the parts.
    ///
    /// # Example
    ///
    /// ```
    /// use hanoi_core::{Disk, Peg, Pile, PuzzleError, PuzzleState};
    ///
    /// let pile = |sizes: &[u8]| sizes.iter().copied().filter_map(Disk::new).collect::<Pile>();
    ///
    /// let restored = PuzzleState::from_parts(
    ///     3,
    ///     [pile(&[3]), pile(&[2]), pile(&[1])],
    ///     2,
    ///     false,
    ///     vec![],
    /// )?;
    /// assert_eq!(restored.moves(), 2);
    ///
    /// let broken = PuzzleState::from_parts(3, [pile(&[3, 1]), pile(&[]), pile(&[])], 0, false, vec![]);
    /// assert_eq!(broken, Err(PuzzleError::MissingDisk { disk: Disk::new(2).unwrap() }));
    /// # Ok::<(), PuzzleError>(())
    /// ```
    pub fn from_parts(
        disk_count: u8,
        piles: [Pile; 3],
        moves: u32,
        completed: bool,
        history: Vec<MoveRecord>,
    ) -> Result<Self, PuzzleError> {
        check_disk_count(disk_count)?;

        let mut seen = vec![false; usize::from(disk_count)];
        for (peg, pile) in Peg::ALL.into_iter().zip(&piles) {
            for disk in pile {
                let Some(slot) = seen.get_mut(usize::from(disk.size()) - 1) else {
                    return Err(PuzzleError::DiskOutOfRange { disk, disk_count });
                };
                if mem::replace(slot, true) {
                    return Err(PuzzleError::DuplicateDisk { disk });
                }
            }
            if !pile.is_strictly_decreasing() {
                return Err(PuzzleError::UnorderedPile { peg });
            }
        }
        if let Some(disk) = (1..=disk_count)
            .filter_map(Disk::new)
            .find(|disk| !seen[usize::from(disk.size()) - 1])
        {
            return Err(PuzzleError::MissingDisk { disk });
        }

        let this = Self {
            disk_count,
            piles,
            moves,
            completed,
            history,
        };
        if this.completed && !this.is_goal_reached() {
            return Err(PuzzleError::CompletionMismatch);
        }
        Ok(this)
    }

    /// Returns the number of disks in play.
    #[must_use]
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Returns all three piles, indexed by [`Peg::index`].
    #[must_use]
    pub fn piles(&self) -> &[Pile; 3] {
        &self.piles
    }

    /// Returns the pile on `peg`.
    #[must_use]
    pub fn pile(&self, peg: Peg) -> &Pile {
        &self.piles[peg.index()]
    }

    fn pile_mut(&mut self, peg: Peg) -> &mut Pile {
        &mut self.piles[peg.index()]
    }

    /// Returns the number of applied moves, net of undos.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the fewest moves that solve this puzzle.
    #[must_use]
    pub fn min_moves(&self) -> u64 {
        min_moves(self.disk_count)
    }

    /// Returns `true` if the puzzle has been solved and not undone since.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns `true` if every disk sits on [`Peg::GOAL`].
    ///
    /// Unlike [`is_completed`](Self::is_completed), this ignores undo.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.pile(Peg::GOAL).len() == usize::from(self.disk_count)
    }

    /// Returns the applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns `true` if there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns `true` if the top disk of `from` may move to `to`.
    #[must_use]
    pub fn can_move(&self, from: Peg, to: Peg) -> bool {
        from != to
            && self
                .pile(from)
                .top()
                .is_some_and(|disk| self.pile(to).can_accept(disk))
    }

    /// Moves the top disk of `from` onto `to` if the move is legal.
    ///
    /// A legal move pops the disk, pushes it on the destination, increments the
    /// move counter, records the move, and recomputes the completion flag.
    /// Any other outcome leaves the puzzle unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use hanoi_core::{Disk, MoveOutcome, Peg, PuzzleState};
    ///
    /// let mut puzzle = PuzzleState::new(3)?;
    /// assert!(puzzle.try_move(Peg::Left, Peg::Right).is_applied());
    /// assert_eq!(
    ///     puzzle.try_move(Peg::Left, Peg::Right),
    ///     MoveOutcome::Blocked {
    ///         moving: Disk::new(2).unwrap(),
    ///         target: Disk::new(1).unwrap(),
    ///     }
    /// );
    /// assert_eq!(puzzle.try_move(Peg::Middle, Peg::Left), MoveOutcome::SourceEmpty);
    /// assert_eq!(puzzle.moves(), 1);
    /// # Ok::<(), hanoi_core::PuzzleError>(())
    /// ```
    pub fn try_move(&mut self, from: Peg, to: Peg) -> MoveOutcome {
        if from == to {
            return MoveOutcome::SamePeg;
        }
        let Some(moving) = self.pile(from).top() else {
            return MoveOutcome::SourceEmpty;
        };
        if let Some(target) = self.pile(to).top()
            && moving >= target
        {
            return MoveOutcome::Blocked { moving, target };
        }

        self.pile_mut(from).pop();
        self.pile_mut(to).push(moving);
        self.moves = self.moves.saturating_add(1);
        let record = MoveRecord::new(from, to, moving);
        self.history.push(record);
        self.completed = self.is_goal_reached();
        MoveOutcome::Applied(record)
    }

    /// Reverses the most recent move.
    ///
    /// The latest record is only applied if its disk is still on top of the
    /// destination and fits back on the source; otherwise the puzzle is left
    /// untouched and [`UndoOutcome::Inconsistent`] is returned. A successful
    /// undo always clears the completion flag. Undone moves cannot be redone.
    ///
    /// # Example
    ///
    /// ```
    /// use hanoi_core::{Peg, PuzzleState};
    ///
    /// let mut puzzle = PuzzleState::new(3)?;
    /// assert!(puzzle.undo().is_nothing_to_undo());
    ///
    /// puzzle.try_move(Peg::Left, Peg::Middle);
    /// assert!(puzzle.undo().is_undone());
    /// assert_eq!(puzzle, PuzzleState::new(3)?);
    /// # Ok::<(), hanoi_core::PuzzleError>(())
    /// ```
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(&record) = self.history.last() else {
            return UndoOutcome::NothingToUndo;
        };
        if self.pile(record.to).top() != Some(record.disk)
            || !self.pile(record.from).can_accept(record.disk)
        {
            return UndoOutcome::Inconsistent(record);
        }

        self.pile_mut(record.to).pop();
        self.pile_mut(record.from).push(record.disk);
        self.moves = self.moves.saturating_sub(1);
        self.completed = false;
        self.history.pop();
        UndoOutcome::Undone(record)
    }

    /// Undoes up to `steps` moves, stopping at the first undo that fails.
    ///
    /// Returns the number of moves actually undone.
    pub fn undo_steps(&mut self, steps: usize) -> usize {
        (0..steps)
            .take_while(|_| self.undo().is_undone())
            .count()
    }

    /// Suggests a legal move for the current piles.
    ///
    /// See [`suggest_move`] for the heuristic.
    #[must_use]
    pub fn suggest_move(&self) -> Option<Hint> {
        suggest_move(&self.piles)
    }
}

fn check_disk_count(disk_count: u8) -> Result<(), PuzzleError> {
    if (MIN_DISK_COUNT..=MAX_DISK_COUNT).contains(&disk_count) {
        Ok(())
    } else {
        Err(PuzzleError::InvalidDiskCount { count: disk_count })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn disk(size: u8) -> Disk {
        Disk::new(size).unwrap()
    }

    fn pile(sizes: &[u8]) -> Pile {
        sizes.iter().copied().filter_map(Disk::new).collect()
    }

    fn sizes(puzzle: &PuzzleState) -> [Vec<u8>; 3] {
        puzzle
            .piles()
            .clone()
            .map(|pile| pile.iter().map(Disk::size).collect())
    }

    fn assert_invariants(puzzle: &PuzzleState) {
        let mut all: Vec<u8> = puzzle
            .piles()
            .iter()
            .flat_map(|pile| pile.iter().map(Disk::size))
            .collect();
        all.sort_unstable();
        let expected: Vec<u8> = (1..=puzzle.disk_count()).collect();
        assert_eq!(all, expected, "disk set changed: {puzzle:?}");

        for pile in puzzle.piles() {
            assert!(pile.is_strictly_decreasing(), "unordered pile: {pile:?}");
        }
        if puzzle.is_completed() {
            assert!(puzzle.is_goal_reached());
        }
    }

    /// Moves from the textbook recursive solution, for tests only.
    fn optimal_moves(n: u8, from: Peg, via: Peg, to: Peg, out: &mut Vec<(Peg, Peg)>) {
        if n == 0 {
            return;
        }
        optimal_moves(n - 1, from, to, via, out);
        out.push((from, to));
        optimal_moves(n - 1, via, from, to, out);
    }

    #[test]
    fn test_new_places_all_disks_on_left() {
        let puzzle = PuzzleState::new(3).unwrap();
        assert_eq!(sizes(&puzzle), [vec![3, 2, 1], vec![], vec![]]);
        assert_eq!(puzzle.disk_count(), 3);
        assert_eq!(puzzle.moves(), 0);
        assert!(!puzzle.is_completed());
        assert!(puzzle.history().is_empty());
        assert!(!puzzle.can_undo());
        assert_invariants(&puzzle);
    }

    #[test]
    fn test_new_rejects_out_of_range_disk_counts() {
        assert_eq!(
            PuzzleState::new(0),
            Err(PuzzleError::InvalidDiskCount { count: 0 })
        );
        assert_eq!(
            PuzzleState::new(13),
            Err(PuzzleError::InvalidDiskCount { count: 13 })
        );
        assert!(PuzzleState::new(MIN_DISK_COUNT).is_ok());
        assert!(PuzzleState::new(MAX_DISK_COUNT).is_ok());
    }

    #[test]
    fn test_min_moves() {
        assert_eq!(min_moves(0), 0);
        assert_eq!(min_moves(3), 7);
        assert_eq!(min_moves(12), 4095);
        assert_eq!(min_moves(63), (1 << 63) - 1);
        assert_eq!(min_moves(64), u64::MAX);
        assert_eq!(PuzzleState::new(5).unwrap().min_moves(), 31);
    }

    #[test]
    fn test_three_disk_walkthrough() {
        let mut puzzle = PuzzleState::new(3).unwrap();

        assert!(puzzle.try_move(Peg::Left, Peg::Right).is_applied());
        assert_eq!(sizes(&puzzle), [vec![3, 2], vec![], vec![1]]);
        assert_eq!(puzzle.moves(), 1);

        assert!(puzzle.try_move(Peg::Left, Peg::Middle).is_applied());
        assert_eq!(sizes(&puzzle), [vec![3], vec![2], vec![1]]);
        assert_eq!(puzzle.moves(), 2);

        // Disk 1 onto disk 2 is legal.
        assert!(puzzle.try_move(Peg::Right, Peg::Middle).is_applied());
        assert_eq!(sizes(&puzzle), [vec![3], vec![2, 1], vec![]]);

        for (from, to) in [
            (Peg::Left, Peg::Right),
            (Peg::Middle, Peg::Left),
            (Peg::Middle, Peg::Right),
        ] {
            assert!(!puzzle.is_completed());
            assert!(puzzle.try_move(from, to).is_applied());
        }
        assert!(!puzzle.is_completed());
        assert!(puzzle.try_move(Peg::Left, Peg::Right).is_applied());

        assert_eq!(sizes(&puzzle), [vec![], vec![], vec![3, 2, 1]]);
        assert!(puzzle.is_completed());
        assert_eq!(puzzle.moves(), 7);
        assert_eq!(puzzle.history().len(), 7);
        assert_invariants(&puzzle);
    }

    #[test]
    fn test_optimal_solution_completes_in_min_moves() {
        for n in MIN_DISK_COUNT..=7 {
            let mut puzzle = PuzzleState::new(n).unwrap();
            let mut plan = vec![];
            optimal_moves(n, Peg::Left, Peg::Middle, Peg::Right, &mut plan);
            for (from, to) in plan {
                assert!(puzzle.try_move(from, to).is_applied());
            }
            assert!(puzzle.is_completed());
            assert_eq!(u64::from(puzzle.moves()), min_moves(n));
        }
    }

    #[test]
    fn test_rejected_moves_change_nothing() {
        let mut puzzle = PuzzleState::new(3).unwrap();
        puzzle.try_move(Peg::Left, Peg::Right);
        let before = puzzle.clone();

        assert_eq!(puzzle.try_move(Peg::Left, Peg::Left), MoveOutcome::SamePeg);
        assert_eq!(
            puzzle.try_move(Peg::Middle, Peg::Right),
            MoveOutcome::SourceEmpty
        );
        assert_eq!(
            puzzle.try_move(Peg::Left, Peg::Right),
            MoveOutcome::Blocked {
                moving: disk(2),
                target: disk(1),
            }
        );
        assert_eq!(puzzle, before);
        assert!(!puzzle.can_move(Peg::Left, Peg::Right));
        assert!(puzzle.can_move(Peg::Left, Peg::Middle));
        assert!(!puzzle.can_move(Peg::Left, Peg::Left));
    }

    #[test]
    fn test_undo_reverses_latest_move() {
        let mut puzzle = PuzzleState::new(3).unwrap();
        assert_eq!(puzzle.undo(), UndoOutcome::NothingToUndo);

        puzzle.try_move(Peg::Left, Peg::Right);
        puzzle.try_move(Peg::Left, Peg::Middle);

        assert_eq!(
            puzzle.undo(),
            UndoOutcome::Undone(MoveRecord::new(Peg::Left, Peg::Middle, disk(2)))
        );
        assert_eq!(sizes(&puzzle), [vec![3, 2], vec![], vec![1]]);
        assert_eq!(puzzle.moves(), 1);
        assert_eq!(puzzle.history().len(), 1);

        assert!(puzzle.undo().is_undone());
        assert_eq!(puzzle, PuzzleState::new(3).unwrap());
        assert!(puzzle.undo().is_nothing_to_undo());
    }

    #[test]
    fn test_undo_after_completion_clears_flag() {
        let mut puzzle = PuzzleState::new(1).unwrap();
        puzzle.try_move(Peg::Left, Peg::Right);
        assert!(puzzle.is_completed());

        assert!(puzzle.undo().is_undone());
        assert!(!puzzle.is_completed());
        assert_eq!(puzzle.moves(), 0);
    }

    #[test]
    fn test_undo_refuses_inconsistent_history() {
        let record = MoveRecord::new(Peg::Left, Peg::Right, disk(2));
        let mut puzzle = PuzzleState::from_parts(
            3,
            [pile(&[3, 2]), pile(&[]), pile(&[1])],
            1,
            false,
            vec![record],
        )
        .unwrap();
        let before = puzzle.clone();

        assert_eq!(puzzle.undo(), UndoOutcome::Inconsistent(record));
        assert_eq!(puzzle, before);
        assert_eq!(puzzle.undo_steps(5), 0);
    }

    #[test]
    fn test_undo_refuses_record_that_would_break_ordering() {
        // Disk 2 is on top of the destination, but disk 1 now sits on the source.
        let record = MoveRecord::new(Peg::Left, Peg::Middle, disk(2));
        let mut puzzle = PuzzleState::from_parts(
            3,
            [pile(&[3, 1]), pile(&[2]), pile(&[])],
            1,
            false,
            vec![record],
        )
        .unwrap();
        let before = puzzle.clone();

        assert!(puzzle.undo().is_inconsistent());
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_undo_steps_stops_at_empty_history() {
        let mut puzzle = PuzzleState::new(4).unwrap();
        puzzle.try_move(Peg::Left, Peg::Middle);
        puzzle.try_move(Peg::Left, Peg::Right);
        puzzle.try_move(Peg::Middle, Peg::Right);

        assert_eq!(puzzle.undo_steps(0), 0);
        assert_eq!(puzzle.undo_steps(2), 2);
        assert_eq!(puzzle.moves(), 1);
        assert_eq!(puzzle.undo_steps(10), 1);
        assert_eq!(puzzle, PuzzleState::new(4).unwrap());
    }

    #[test]
    fn test_moves_counter_floors_at_zero() {
        let record = MoveRecord::new(Peg::Left, Peg::Right, disk(1));
        let mut puzzle = PuzzleState::from_parts(
            2,
            [pile(&[2]), pile(&[]), pile(&[1])],
            0,
            false,
            vec![record],
        )
        .unwrap();
        assert!(puzzle.undo().is_undone());
        assert_eq!(puzzle.moves(), 0);
    }

    #[test]
    fn test_from_parts_validation() {
        let ok = |piles: [Pile; 3]| PuzzleState::from_parts(3, piles, 0, false, vec![]);

        assert!(ok([pile(&[3, 2, 1]), pile(&[]), pile(&[])]).is_ok());
        assert!(ok([pile(&[]), pile(&[3, 1]), pile(&[2])]).is_ok());

        assert_eq!(
            ok([pile(&[4, 2, 1]), pile(&[]), pile(&[])]),
            Err(PuzzleError::DiskOutOfRange {
                disk: disk(4),
                disk_count: 3,
            })
        );
        assert_eq!(
            ok([pile(&[3, 2, 1]), pile(&[1]), pile(&[])]),
            Err(PuzzleError::DuplicateDisk { disk: disk(1) })
        );
        assert_eq!(
            ok([pile(&[3, 1]), pile(&[]), pile(&[])]),
            Err(PuzzleError::MissingDisk { disk: disk(2) })
        );
        assert_eq!(
            ok([pile(&[3]), pile(&[1, 2]), pile(&[])]),
            Err(PuzzleError::UnorderedPile { peg: Peg::Middle })
        );
        assert_eq!(
            PuzzleState::from_parts(20, Default::default(), 0, false, vec![]),
            Err(PuzzleError::InvalidDiskCount { count: 20 })
        );
    }

    #[test]
    fn test_from_parts_completion_flag() {
        let solved = [pile(&[]), pile(&[]), pile(&[2, 1])];
        let unsolved = [pile(&[2]), pile(&[]), pile(&[1])];

        assert!(PuzzleState::from_parts(2, solved.clone(), 3, true, vec![]).is_ok());
        // An undo may leave a full goal peg flagged as not completed.
        assert!(PuzzleState::from_parts(2, solved, 3, false, vec![]).is_ok());
        assert_eq!(
            PuzzleState::from_parts(2, unsolved, 1, true, vec![]),
            Err(PuzzleError::CompletionMismatch)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PuzzleError::InvalidDiskCount { count: 20 }.to_string(),
            "disk count 20 is out of range"
        );
        assert_eq!(
            PuzzleError::UnorderedPile { peg: Peg::Right }.to_string(),
            "pile on Right peg is not strictly decreasing"
        );
    }

    fn peg_pairs() -> impl Strategy<Value = Vec<(Peg, Peg)>> {
        let peg = || (0_usize..3).prop_map(|i| Peg::ALL[i]);
        prop::collection::vec((peg(), peg()), 0..200)
    }

    proptest! {
        #[test]
        fn prop_moves_preserve_invariants(disk_count in 1_u8..=7, steps in peg_pairs()) {
            let mut puzzle = PuzzleState::new(disk_count).unwrap();
            for (from, to) in steps {
                let before = puzzle.clone();
                let legal = puzzle.can_move(from, to);
                let outcome = puzzle.try_move(from, to);

                prop_assert_eq!(outcome.is_applied(), legal);
                if legal {
                    prop_assert_eq!(puzzle.moves(), before.moves() + 1);
                    prop_assert_eq!(puzzle.history().len(), before.history().len() + 1);
                } else {
                    prop_assert_eq!(&puzzle, &before);
                }
                prop_assert_eq!(puzzle.is_completed(), puzzle.is_goal_reached());
                assert_invariants(&puzzle);
            }
        }

        #[test]
        fn prop_undo_restores_previous_state(disk_count in 1_u8..=7, steps in peg_pairs()) {
            let mut puzzle = PuzzleState::new(disk_count).unwrap();
            for (from, to) in steps {
                let before = puzzle.clone();
                if puzzle.try_move(from, to).is_applied() {
                    let mut undone = puzzle.clone();
                    prop_assert!(undone.undo().is_undone());
                    prop_assert!(!undone.is_completed());
                    prop_assert_eq!(undone.piles(), before.piles());
                    prop_assert_eq!(undone.moves(), before.moves());
                    prop_assert_eq!(undone.history(), before.history());
                    if !before.is_completed() {
                        prop_assert_eq!(&undone, &before);
                    }
                    assert_invariants(&undone);
                }
            }
        }

        #[test]
        fn prop_undo_all_returns_to_start(disk_count in 1_u8..=7, steps in peg_pairs()) {
            let mut puzzle = PuzzleState::new(disk_count).unwrap();
            for (from, to) in steps {
                puzzle.try_move(from, to);
            }
            let applied = puzzle.history().len();
            prop_assert_eq!(puzzle.undo_steps(usize::MAX), applied);
            prop_assert_eq!(puzzle, PuzzleState::new(disk_count).unwrap());
        }

        #[test]
        fn prop_hint_is_always_legal(disk_count in 1_u8..=7, steps in peg_pairs()) {
            let mut puzzle = PuzzleState::new(disk_count).unwrap();
            for (from, to) in steps {
                puzzle.try_move(from, to);
                let hint = puzzle.suggest_move();
                prop_assert!(hint.is_some());
                let Hint { from, to } = hint.unwrap();
                prop_assert!(puzzle.can_move(from, to));
            }
        }
    }
}
