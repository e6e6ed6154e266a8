//! Answer checking and the once-per-episode completion signals.

use serde::{Deserialize, Serialize};

use crate::model::{Direction, Grid, Layout, Pos};
use crate::state::fill::FillState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellStatus {
    Empty,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotCheck {
    pub all_filled: bool,
    pub all_correct: bool,
    /// One entry per slot cell, in slot order.
    pub cells: Vec<(Pos, CellStatus)>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub filled: usize,
    pub total: usize,
    pub correct: usize,
}

impl Tally {
    pub fn is_full(&self) -> bool {
        self.filled == self.total
    }
}

/// Outcome of a completion evaluation that deserves a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Solved,
    IncorrectFull,
}

fn status(entered: Option<char>, want: char) -> CellStatus {
    match entered {
        None => CellStatus::Empty,
        Some(ch) if ch.eq_ignore_ascii_case(&want) => CellStatus::Correct,
        Some(_) => CellStatus::Incorrect,
    }
}

/// Compares the slot's cells against its answer. `None` if the slot does not exist.
pub fn check_slot(layout: &Layout, fill: &FillState, direction: Direction, index: usize) -> Option<SlotCheck> {
    let slot = layout.slot(direction, index)?;
    let cells: Vec<(Pos, CellStatus)> = slot
        .cells
        .iter()
        .zip(slot.answer.chars())
        .map(|(&pos, want)| (pos, status(fill.letter(pos), want)))
        .collect();
    Some(SlotCheck {
        all_filled: cells.iter().all(|(_, s)| *s != CellStatus::Empty),
        all_correct: cells.iter().all(|(_, s)| *s == CellStatus::Correct),
        cells,
    })
}

pub fn check_all(grid: &Grid, fill: &FillState) -> Tally {
    let mut tally = Tally::default();
    for (pos, want) in grid.whites() {
        tally.total += 1;
        match status(fill.letter(pos), want) {
            CellStatus::Empty => {}
            CellStatus::Correct => {
                tally.filled += 1;
                tally.correct += 1;
            }
            CellStatus::Incorrect => tally.filled += 1,
        }
    }
    tally
}

/// `solved` latches until an explicit reset; `incorrect_notified` rearms whenever the grid stops being full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionFlags {
    pub solved: bool,
    pub incorrect_notified: bool,
}

impl CompletionFlags {
    pub fn evaluate(&mut self, tally: Tally) -> Option<Verdict> {
        // Nothing to solve in an all-black grid.
        if tally.total == 0 {
            return None;
        }
        if !tally.is_full() {
            self.incorrect_notified = false;
            return None;
        }
        if tally.correct == tally.total {
            if self.solved {
                return None;
            }
            self.solved = true;
            Some(Verdict::Solved)
        } else {
            if self.incorrect_notified {
                return None;
            }
            self.incorrect_notified = true;
            Some(Verdict::IncorrectFull)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Grid, Layout, FillState) {
        let grid = Grid::from_rows(vec![
            vec![Some('C'), Some('A')],
            vec![Some('A'), Some('T')],
        ])
        .unwrap();
        let layout = Layout::derive(&grid);
        let fill = FillState::new(&grid);
        (grid, layout, fill)
    }

    #[test]
    fn slot_check_reports_each_cell() {
        let (_, layout, mut fill) = setup();
        fill.set(Pos::new(1, 0), 'A').unwrap();
        let check = check_slot(&layout, &fill, Direction::Down, 0).unwrap();
        assert!(!check.all_filled);
        assert!(!check.all_correct);
        assert_eq!(
            check.cells,
            vec![(Pos::new(0, 0), CellStatus::Empty), (Pos::new(1, 0), CellStatus::Correct)]
        );

        fill.set(Pos::new(0, 0), 'K').unwrap();
        let check = check_slot(&layout, &fill, Direction::Down, 0).unwrap();
        assert!(check.all_filled);
        assert_eq!(check.cells[0].1, CellStatus::Incorrect);

        assert!(check_slot(&layout, &fill, Direction::Down, 2).is_none());
    }

    #[test]
    fn tally_counts_filled_and_correct() {
        let (grid, _, mut fill) = setup();
        fill.set(Pos::new(0, 0), 'C').unwrap();
        fill.set(Pos::new(0, 1), 'X').unwrap();
        assert_eq!(check_all(&grid, &fill), Tally { filled: 2, total: 4, correct: 1 });
    }

    #[test]
    fn solved_fires_once() {
        let mut flags = CompletionFlags::default();
        let full = Tally { filled: 4, total: 4, correct: 4 };
        assert_eq!(flags.evaluate(full), Some(Verdict::Solved));
        assert_eq!(flags.evaluate(full), None);
        assert!(flags.solved);
    }

    #[test]
    fn incorrect_fires_once_per_full_episode() {
        let mut flags = CompletionFlags::default();
        let wrong = Tally { filled: 4, total: 4, correct: 3 };
        let partial = Tally { filled: 3, total: 4, correct: 3 };
        assert_eq!(flags.evaluate(wrong), Some(Verdict::IncorrectFull));
        assert_eq!(flags.evaluate(wrong), None);
        assert_eq!(flags.evaluate(partial), None);
        assert!(!flags.incorrect_notified);
        assert_eq!(flags.evaluate(wrong), Some(Verdict::IncorrectFull));
    }
}
