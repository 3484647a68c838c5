use hanoi_core::{
    Disk, MAX_DISK_COUNT, MIN_DISK_COUNT, MoveRecord, Peg, Pile, PuzzleError, PuzzleState,
};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub(crate) enum PersistenceError {
    #[display("disk count {count} is out of range")]
    InvalidDiskCount { count: u8 },
    #[display("expected 3 piles, found {count}")]
    InvalidPileCount { count: usize },
    #[display("peg index {index} is out of range")]
    InvalidPeg { index: u8 },
    #[display("disk size {size} is invalid")]
    InvalidDisk { size: u8 },
    #[display("{_0}")]
    #[from]
    Puzzle(#[error(source)] PuzzleError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MoveRecordDto {
    pub(crate) from: u8,
    pub(crate) to: u8,
    pub(crate) disk: u8,
}

impl MoveRecordDto {
    fn from_record(record: MoveRecord) -> Self {
        Self {
            from: peg_index(record.from),
            to: peg_index(record.to),
            disk: record.disk.size(),
        }
    }

    fn into_record(self) -> Result<MoveRecord, PersistenceError> {
        Ok(MoveRecord::new(
            parse_peg(self.from)?,
            parse_peg(self.to)?,
            parse_disk(self.disk)?,
        ))
    }
}

/// Stored form of a puzzle: pegs as indices `0..=2`, disks as sizes, piles
/// bottom first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PuzzleStateDto {
    pub(crate) disk_count: u8,
    pub(crate) piles: Vec<Vec<u8>>,
    pub(crate) moves: u32,
    pub(crate) completed: bool,
    #[serde(default)]
    pub(crate) history: Vec<MoveRecordDto>,
}

impl PuzzleStateDto {
    #[must_use]
    pub(crate) fn from_puzzle(puzzle: &PuzzleState) -> Self {
        Self {
            disk_count: puzzle.disk_count(),
            piles: puzzle
                .piles()
                .iter()
                .map(|pile| pile.iter().map(Disk::size).collect())
                .collect(),
            moves: puzzle.moves(),
            completed: puzzle.is_completed(),
            history: puzzle
                .history()
                .iter()
                .copied()
                .map(MoveRecordDto::from_record)
                .collect(),
        }
    }

    pub(crate) fn into_puzzle(self) -> Result<PuzzleState, PersistenceError> {
        let Self {
            disk_count,
            piles,
            moves,
            completed,
            history,
        } = self;

        if !(MIN_DISK_COUNT..=MAX_DISK_COUNT).contains(&disk_count) {
            return Err(PersistenceError::InvalidDiskCount { count: disk_count });
        }
        let [left, middle, right]: [Vec<u8>; 3] = piles
            .try_into()
            .map_err(|piles: Vec<_>| PersistenceError::InvalidPileCount { count: piles.len() })?;
        let piles = [parse_pile(left)?, parse_pile(middle)?, parse_pile(right)?];
        let history = history
            .into_iter()
            .map(MoveRecordDto::into_record)
            .collect::<Result<_, _>>()?;

        Ok(PuzzleState::from_parts(
            disk_count, piles, moves, completed, history,
        )?)
    }
}

#[expect(clippy::cast_possible_truncation)]
fn peg_index(peg: Peg) -> u8 {
    peg.index() as u8
}

fn parse_peg(index: u8) -> Result<Peg, PersistenceError> {
    Peg::from_index(usize::from(index)).ok_or(PersistenceError::InvalidPeg { index })
}

fn parse_disk(size: u8) -> Result<Disk, PersistenceError> {
    Disk::new(size).ok_or(PersistenceError::InvalidDisk { size })
}

fn parse_pile(sizes: Vec<u8>) -> Result<Pile, PersistenceError> {
    sizes.into_iter().map(parse_disk).collect()
}

#[cfg(test)]
mod tests {
    use hanoi_core::Peg;

    use super::*;

    fn dto(disk_count: u8, piles: &[&[u8]]) -> PuzzleStateDto {
        PuzzleStateDto {
            disk_count,
            piles: piles.iter().map(|pile| pile.to_vec()).collect(),
            moves: 0,
            completed: false,
            history: vec![],
        }
    }

    #[test]
    fn puzzle_survives_conversion() {
        let mut puzzle = PuzzleState::new(4).unwrap();
        puzzle.try_move(Peg::Left, Peg::Middle);
        puzzle.try_move(Peg::Left, Peg::Right);

        let stored = PuzzleStateDto::from_puzzle(&puzzle);
        assert_eq!(stored.piles, [vec![4, 3], vec![1], vec![2]]);
        assert_eq!(
            stored.history,
            [
                MoveRecordDto {
                    from: 0,
                    to: 1,
                    disk: 1
                },
                MoveRecordDto {
                    from: 0,
                    to: 2,
                    disk: 2
                },
            ]
        );
        assert_eq!(stored.into_puzzle(), Ok(puzzle));
    }

    #[test]
    fn rejects_malformed_shapes() {
        assert_eq!(
            dto(0, &[&[], &[], &[]]).into_puzzle(),
            Err(PersistenceError::InvalidDiskCount { count: 0 })
        );
        assert_eq!(
            dto(20, &[&[], &[], &[]]).into_puzzle(),
            Err(PersistenceError::InvalidDiskCount { count: 20 })
        );
        assert_eq!(
            dto(1, &[&[1], &[]]).into_puzzle(),
            Err(PersistenceError::InvalidPileCount { count: 2 })
        );
        assert_eq!(
            dto(2, &[&[2, 0], &[], &[]]).into_puzzle(),
            Err(PersistenceError::InvalidDisk { size: 0 })
        );

        let mut bad_peg = dto(1, &[&[], &[], &[1]]);
        bad_peg.history.push(MoveRecordDto {
            from: 0,
            to: 3,
            disk: 1,
        });
        assert_eq!(
            bad_peg.into_puzzle(),
            Err(PersistenceError::InvalidPeg { index: 3 })
        );
    }

    #[test]
    fn rejects_inconsistent_piles() {
        let err = dto(3, &[&[3, 1], &[2, 2], &[]]).into_puzzle().unwrap_err();
        assert!(matches!(err, PersistenceError::Puzzle(PuzzleError::DuplicateDisk { .. })));

        let err = dto(3, &[&[1, 3], &[2], &[]]).into_puzzle().unwrap_err();
        assert_eq!(
            err,
            PersistenceError::Puzzle(PuzzleError::UnorderedPile { peg: Peg::Left })
        );
        assert_eq!(err.to_string(), "pile on Left peg is not strictly decreasing");
    }

    #[test]
    fn accepts_extended_disk_counts() {
        let puzzle = dto(12, &[&[], &[], &(1..=12u8).rev().collect::<Vec<u8>>()])
            .into_puzzle()
            .unwrap();
        assert_eq!(puzzle.disk_count(), 12);
        assert!(puzzle.is_goal_reached());
        assert!(!puzzle.is_completed());
    }
}
