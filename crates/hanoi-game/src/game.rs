use hanoi_core::{Hint, MoveOutcome, MoveRecord, Peg, PuzzleState, UndoOutcome};

use crate::Level;

/// Result of [`Game::click_peg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// The click had no effect: the puzzle is solved, or an empty peg was
    /// clicked with nothing selected.
    Ignored,
    /// The clicked peg is now selected.
    Selected(Peg),
    /// The selection was cleared.
    Deselected,
    /// The selected peg's top disk moved onto the clicked peg.
    Moved {
        /// The applied move.
        record: MoveRecord,
        /// Whether this move solved the puzzle.
        solved: bool,
    },
    /// The move was illegal and the selection moved to another peg.
    Retargeted(Peg),
}

/// A Tower of Hanoi game session.
///
/// Owns the puzzle and the interaction state around it: which peg is selected,
/// which hint is on display, and whether the player dismissed the completion
/// dialog.
///
/// # Example
///
/// ```
/// use hanoi_core::{Hint, Peg};
/// use hanoi_game::{Game, Level};
///
/// let mut game = Game::new(Level::MIN);
/// let hint = game.request_hint();
/// assert_eq!(hint, Some(Hint { from: Peg::Left, to: Peg::Right }));
/// assert_eq!(game.hint(), hint);
///
/// // Moving clears the hint.
/// game.click_peg(Peg::Left);
/// game.click_peg(Peg::Right);
/// assert_eq!(game.hint(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    level: Level,
    puzzle: PuzzleState,
    selected: Option<Peg>,
    hint: Option<Hint>,
    completion_dismissed: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Level::MIN)
    }
}

impl Game {
    /// Starts a fresh game at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::from_puzzle(fresh_puzzle(level))
    }

    /// Resumes a game from a restored puzzle.
    ///
    /// The level is the puzzle's disk count clamped to the level range, so a
    /// restored puzzle outside that range plays out as is and the ladder
    /// continues from the nearest level.
    #[must_use]
    pub fn from_puzzle(puzzle: PuzzleState) -> Self {
        Self {
            level: Level::new(puzzle.disk_count()),
            puzzle,
            selected: None,
            hint: None,
            completion_dismissed: false,
        }
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the puzzle for rendering.
    #[must_use]
    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    /// Returns the selected peg, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Peg> {
        self.selected
    }

    /// Returns the hint on display, if any.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    /// Returns `true` if the puzzle is solved.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.puzzle.is_completed()
    }

    /// Returns `true` if the completion dialog should be shown.
    #[must_use]
    pub fn shows_completion(&self) -> bool {
        self.puzzle.is_completed() && !self.completion_dismissed
    }

    /// Returns `true` if there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.puzzle.can_undo()
    }

    /// Returns `true` if a hint can be requested.
    #[must_use]
    pub fn can_hint(&self) -> bool {
        !self.puzzle.is_completed()
    }

    /// Handles a click on `peg`.
    ///
    /// With nothing selected, a peg holding disks becomes the selection.
    /// Clicking the selected peg again deselects it. Clicking another peg tries
    /// to move the selected peg's top disk there. When that move is illegal,
    /// the clicked peg becomes the selection if it holds disks; otherwise the
    /// original selection stays. Clicks are ignored once the puzzle is solved.
    ///
    /// # Example
    ///
    /// ```
    /// use hanoi_core::Peg;
    /// use hanoi_game::{ClickOutcome, Game, Level};
    ///
    /// let mut game = Game::new(Level::MIN);
    /// assert_eq!(game.click_peg(Peg::Middle), ClickOutcome::Ignored);
    /// assert_eq!(game.click_peg(Peg::Left), ClickOutcome::Selected(Peg::Left));
    /// assert_eq!(game.click_peg(Peg::Left), ClickOutcome::Deselected);
    /// ```
    pub fn click_peg(&mut self, peg: Peg) -> ClickOutcome {
        if self.puzzle.is_completed() {
            return ClickOutcome::Ignored;
        }

        let Some(from) = self.selected else {
            if self.puzzle.pile(peg).is_empty() {
                return ClickOutcome::Ignored;
            }
            self.selected = Some(peg);
            return ClickOutcome::Selected(peg);
        };

        match self.puzzle.try_move(from, peg) {
            MoveOutcome::Applied(record) => {
                self.selected = None;
                self.hint = None;
                let solved = self.puzzle.is_completed();
                if solved {
                    self.completion_dismissed = false;
                }
                ClickOutcome::Moved { record, solved }
            }
            MoveOutcome::SamePeg | MoveOutcome::SourceEmpty => {
                self.selected = None;
                ClickOutcome::Deselected
            }
            MoveOutcome::Blocked { .. } => {
                let next = if self.puzzle.pile(peg).is_empty() {
                    from
                } else {
                    peg
                };
                self.selected = Some(next);
                ClickOutcome::Retargeted(next)
            }
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Computes and displays a hint.
    ///
    /// Does nothing once the puzzle is solved. A found hint replaces the
    /// previous one and clears the selection.
    pub fn request_hint(&mut self) -> Option<Hint> {
        if self.puzzle.is_completed() {
            return None;
        }
        let hint = self.puzzle.suggest_move()?;
        self.selected = None;
        self.hint = Some(hint);
        Some(hint)
    }

    /// Removes the displayed hint.
    pub fn clear_hint(&mut self) {
        self.hint = None;
    }

    /// Undoes the latest move.
    ///
    /// A successful undo clears the selection and the hint.
    pub fn undo(&mut self) -> UndoOutcome {
        let outcome = self.puzzle.undo();
        if outcome.is_undone() {
            self.selected = None;
            self.hint = None;
        }
        outcome
    }

    /// Hides the completion dialog while keeping the solved board on screen.
    pub fn dismiss_completion(&mut self) {
        self.completion_dismissed = true;
    }

    /// Replaces the session with a fresh game at `level`.
    pub fn new_game(&mut self, level: Level) {
        *self = Self::new(level);
    }

    /// Restarts the current level.
    pub fn retry_level(&mut self) {
        self.new_game(self.level);
    }

    /// Advances to the next level, staying on the last one once reached.
    pub fn next_level(&mut self) {
        self.new_game(self.level.next());
    }

    /// Returns to the first level.
    pub fn reset_progress(&mut self) {
        self.new_game(Level::MIN);
    }
}

fn fresh_puzzle(level: Level) -> PuzzleState {
    PuzzleState::new(level.disk_count()).expect("every level has a valid disk count")
}

#[cfg(test)]
mod tests {
    use hanoi_core::Disk;

    use super::*;

    fn sizes(game: &Game) -> [Vec<u8>; 3] {
        game.puzzle()
            .piles()
            .clone()
            .map(|pile| pile.iter().map(Disk::size).collect())
    }

    fn move_disk(game: &mut Game, from: Peg, to: Peg) -> ClickOutcome {
        assert_eq!(game.click_peg(from), ClickOutcome::Selected(from));
        game.click_peg(to)
    }

    fn solve_three(game: &mut Game) {
        for (from, to) in [
            (Peg::Left, Peg::Right),
            (Peg::Left, Peg::Middle),
            (Peg::Right, Peg::Middle),
            (Peg::Left, Peg::Right),
            (Peg::Middle, Peg::Left),
            (Peg::Middle, Peg::Right),
            (Peg::Left, Peg::Right),
        ] {
            assert!(move_disk(game, from, to).is_moved());
        }
    }

    #[test]
    fn test_new_game_defaults() {
        let game = Game::default();
        assert_eq!(game.level(), Level::MIN);
        assert_eq!(sizes(&game), [vec![3, 2, 1], vec![], vec![]]);
        assert_eq!(game.selected(), None);
        assert_eq!(game.hint(), None);
        assert!(!game.can_undo());
        assert!(game.can_hint());
        assert!(!game.shows_completion());
    }

    #[test]
    fn test_click_selects_and_moves() {
        let mut game = Game::new(Level::MIN);

        assert_eq!(game.click_peg(Peg::Right), ClickOutcome::Ignored);
        assert_eq!(game.selected(), None);

        assert_eq!(game.click_peg(Peg::Left), ClickOutcome::Selected(Peg::Left));
        assert_eq!(game.selected(), Some(Peg::Left));

        let outcome = game.click_peg(Peg::Right);
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                record: MoveRecord::new(Peg::Left, Peg::Right, Disk::new(1).unwrap()),
                solved: false,
            }
        );
        assert_eq!(game.selected(), None);
        assert_eq!(sizes(&game), [vec![3, 2], vec![], vec![1]]);
    }

    #[test]
    fn test_click_same_peg_deselects() {
        let mut game = Game::new(Level::MIN);
        game.click_peg(Peg::Left);
        assert_eq!(game.click_peg(Peg::Left), ClickOutcome::Deselected);
        assert_eq!(game.selected(), None);
        assert_eq!(game.puzzle().moves(), 0);
    }

    #[test]
    fn test_illegal_move_retargets_selection() {
        let mut game = Game::new(Level::MIN);
        move_disk(&mut game, Peg::Left, Peg::Right);

        // Disk 2 cannot go onto disk 1: the right peg becomes the selection.
        game.click_peg(Peg::Left);
        assert_eq!(
            game.click_peg(Peg::Right),
            ClickOutcome::Retargeted(Peg::Right)
        );
        assert_eq!(game.selected(), Some(Peg::Right));
        assert_eq!(game.puzzle().moves(), 1);

        // From there the small disk can move on.
        assert!(game.click_peg(Peg::Middle).is_moved());
    }

    #[test]
    fn test_solving_blocks_clicks_and_hints() {
        let mut game = Game::new(Level::MIN);
        solve_three(&mut game);

        assert!(game.is_completed());
        assert!(game.shows_completion());
        assert_eq!(game.puzzle().moves(), 7);
        assert_eq!(game.click_peg(Peg::Right), ClickOutcome::Ignored);
        assert!(!game.can_hint());
        assert_eq!(game.request_hint(), None);
    }

    #[test]
    fn test_final_move_reports_solved() {
        let mut game = Game::new(Level::MIN);
        let moves = [
            (Peg::Left, Peg::Right),
            (Peg::Left, Peg::Middle),
            (Peg::Right, Peg::Middle),
            (Peg::Left, Peg::Right),
            (Peg::Middle, Peg::Left),
            (Peg::Middle, Peg::Right),
        ];
        for (from, to) in moves {
            assert!(matches!(
                move_disk(&mut game, from, to),
                ClickOutcome::Moved { solved: false, .. }
            ));
        }
        assert!(matches!(
            move_disk(&mut game, Peg::Left, Peg::Right),
            ClickOutcome::Moved { solved: true, .. }
        ));
    }

    #[test]
    fn test_dismiss_completion_keeps_puzzle_solved() {
        let mut game = Game::new(Level::MIN);
        solve_three(&mut game);

        game.dismiss_completion();
        assert!(!game.shows_completion());
        assert!(game.is_completed());

        // Undo reopens play; solving again shows the dialog again.
        assert!(game.undo().is_undone());
        assert!(!game.is_completed());
        assert!(move_disk(&mut game, Peg::Left, Peg::Right).is_moved());
        assert!(game.shows_completion());
    }

    #[test]
    fn test_hint_lifecycle() {
        let mut game = Game::new(Level::MIN);
        game.click_peg(Peg::Left);

        let hint = game.request_hint().unwrap();
        assert_eq!(game.selected(), None);
        assert_eq!(game.hint(), Some(hint));
        assert!(game.puzzle().can_move(hint.from, hint.to));

        game.clear_hint();
        assert_eq!(game.hint(), None);

        game.request_hint();
        move_disk(&mut game, hint.from, hint.to);
        assert_eq!(game.hint(), None);

        game.request_hint();
        assert!(game.undo().is_undone());
        assert_eq!(game.hint(), None);
    }

    #[test]
    fn test_undo_without_history() {
        let mut game = Game::new(Level::MIN);
        game.click_peg(Peg::Left);
        assert!(game.undo().is_nothing_to_undo());
        // A failed undo leaves the selection alone.
        assert_eq!(game.selected(), Some(Peg::Left));
    }

    #[test]
    fn test_level_transitions() {
        let mut game = Game::new(Level::MIN);
        move_disk(&mut game, Peg::Left, Peg::Right);

        game.retry_level();
        assert_eq!(game, Game::new(Level::MIN));

        game.next_level();
        assert_eq!(game.level(), Level::new(4));
        assert_eq!(game.puzzle().disk_count(), 4);

        game.new_game(Level::MAX);
        game.next_level();
        assert_eq!(game.level(), Level::MAX);

        game.reset_progress();
        assert_eq!(game, Game::new(Level::MIN));
    }

    #[test]
    fn test_restored_puzzle_outside_level_range() {
        let puzzle = PuzzleState::new(10).unwrap();
        let mut game = Game::from_puzzle(puzzle);
        assert_eq!(game.level(), Level::MAX);
        assert_eq!(game.puzzle().disk_count(), 10);

        game.next_level();
        assert_eq!(game.puzzle().disk_count(), 7);
    }
}
