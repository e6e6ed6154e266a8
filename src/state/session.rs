//! Session: the one object a page holds per puzzle.
//! Composes fill, cursor, validation and timer behind a single command entry point.

use std::rc::Rc;
use yew::Reducible;

use crate::error::EngineError;
use crate::model::{Direction, Grid, Layout, Pos, Puzzle, Slot};
use crate::state::cursor::{Cursor, Navigator};
use crate::state::fill::FillState;
use crate::state::timer::Timer;
use crate::state::validation::{self, CellStatus, CompletionFlags, SlotCheck, Tally, Verdict};
use crate::util::{clog, cwarn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SelectCell(Pos),
    SelectSlot { direction: Direction, index: usize },
    PressLetter(char),
    PressBackspace,
    Advance,
    MoveArrow { dr: isize, dc: isize },
    ToggleDirection,
    PrevSlot,
    NextSlot,
    /// Marks the active slot's cells correct/incorrect.
    CheckSlot,
    EvaluateCompletion,
    Reveal,
    Clear,
    StartTimer,
    TickSecond, // called once per elapsed real second
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Grid became fully correct. `revealed` is set when the letters came from `Reveal`.
    Solved { revealed: bool, elapsed_secs: u64 },
    IncorrectFull,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    puzzle: Rc<Puzzle>,
    fill: FillState,
    /// Row-major display marks; `Empty` means unmarked.
    marks: Vec<CellStatus>,
    nav: Navigator,
    flags: CompletionFlags,
    timer: Timer,
    revealed: bool,
    /// Bumped by every applied command; renderers key effects on it.
    pub version: u64,
    event_seq: u64,
    last_event: Option<SessionEvent>,
}

impl Session {
    pub fn new(puzzle: Rc<Puzzle>) -> Self {
        let fill = FillState::new(&puzzle.grid);
        let nav = Navigator::home(&puzzle.layout, &fill);
        let size = puzzle.grid.size();
        Self {
            marks: vec![CellStatus::Empty; size.rows * size.cols],
            puzzle,
            fill,
            nav,
            flags: CompletionFlags::default(),
            timer: Timer::default(),
            revealed: false,
            version: 0,
            event_seq: 0,
            last_event: None,
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<Option<SessionEvent>, EngineError> {
        let puzzle = Rc::clone(&self.puzzle);
        let layout = &puzzle.layout;
        let event = match command {
            Command::SelectCell(pos) => {
                self.nav.select_cell(layout, pos);
                None
            }
            Command::SelectSlot { direction, index } => {
                self.nav.select_slot(layout, &self.fill, direction, index)?;
                None
            }
            Command::PressLetter(ch) => {
                self.press_letter(ch)?;
                self.evaluate()
            }
            Command::PressBackspace => {
                self.press_backspace()?;
                self.evaluate()
            }
            Command::Advance => {
                self.nav.advance(layout, &self.fill);
                None
            }
            Command::MoveArrow { dr, dc } => {
                self.nav.move_arrow(layout, dr, dc);
                None
            }
            Command::ToggleDirection => {
                self.nav.toggle_direction(layout, &self.fill);
                None
            }
            Command::PrevSlot => {
                self.nav.step_slot(layout, &self.fill, false);
                None
            }
            Command::NextSlot => {
                self.nav.step_slot(layout, &self.fill, true);
                None
            }
            Command::CheckSlot => {
                self.check_active();
                None
            }
            Command::EvaluateCompletion => self.evaluate(),
            Command::Reveal => self.reveal()?,
            Command::Clear => {
                self.clear();
                None
            }
            Command::StartTimer => {
                // a solved grid keeps its final time until `Clear`
                if !self.flags.solved {
                    self.timer.start();
                }
                None
            }
            Command::TickSecond => {
                self.timer.tick();
                None
            }
        };
        self.version = self.version.wrapping_add(1);
        if let Some(ev) = event {
            self.event_seq += 1;
            self.last_event = Some(ev);
        }
        Ok(event)
    }

    fn set_mark(&mut self, pos: Pos, status: CellStatus) {
        if let Some(i) = self.puzzle.grid.index(pos) {
            self.marks[i] = status;
        }
    }

    fn press_letter(&mut self, ch: char) -> Result<(), EngineError> {
        if !ch.is_ascii_alphabetic() {
            return Err(EngineError::InvalidInput(ch));
        }
        let Some(cur) = self.nav.cursor() else { return Ok(()) };
        self.fill.set(cur.focus, ch.to_ascii_uppercase())?;
        self.set_mark(cur.focus, CellStatus::Empty);
        self.nav.advance(&self.puzzle.layout, &self.fill);
        Ok(())
    }

    /// Clears in place, or, on an empty cell, steps back one cell and clears that. Never both.
    fn press_backspace(&mut self) -> Result<(), EngineError> {
        let Some(cur) = self.nav.cursor() else { return Ok(()) };
        let target = if self.fill.letter(cur.focus).is_some() {
            Some(cur.focus)
        } else {
            self.nav.retreat(&self.puzzle.layout)
        };
        if let Some(pos) = target {
            self.fill.clear(pos)?;
            self.set_mark(pos, CellStatus::Empty);
        }
        Ok(())
    }

    fn check_active(&mut self) {
        let Some(cur) = self.nav.cursor() else { return };
        let Some(check) = self.check_slot(cur.direction, cur.slot_index) else { return };
        for (pos, status) in check.cells {
            self.set_mark(pos, status);
        }
    }

    fn evaluate(&mut self) -> Option<SessionEvent> {
        let tally = self.check_all();
        match self.flags.evaluate(tally)? {
            Verdict::Solved => {
                self.timer.stop();
                Some(SessionEvent::Solved {
                    revealed: self.revealed,
                    elapsed_secs: self.timer.elapsed_secs,
                })
            }
            Verdict::IncorrectFull => Some(SessionEvent::IncorrectFull),
        }
    }

    fn reveal(&mut self) -> Result<Option<SessionEvent>, EngineError> {
        let puzzle = Rc::clone(&self.puzzle);
        for (pos, want) in puzzle.grid.whites() {
            self.fill.set(pos, want)?;
            self.set_mark(pos, CellStatus::Correct);
        }
        self.revealed = true;
        Ok(self.evaluate())
    }

    fn clear(&mut self) {
        self.fill.clear_all();
        self.marks.iter_mut().for_each(|m| *m = CellStatus::Empty);
        self.flags.reset();
        self.revealed = false;
        self.nav.reset(&self.puzzle.layout, &self.fill);
    }

    // ---------------- Queries -----------------

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    pub fn layout(&self) -> &Layout {
        &self.puzzle.layout
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.nav.cursor()
    }

    pub fn letter(&self, pos: Pos) -> Option<char> {
        self.fill.letter(pos)
    }

    pub fn mark(&self, pos: Pos) -> CellStatus {
        self.puzzle
            .grid
            .index(pos)
            .map(|i| self.marks[i])
            .unwrap_or(CellStatus::Empty)
    }

    pub fn check_slot(&self, direction: Direction, index: usize) -> Option<SlotCheck> {
        validation::check_slot(&self.puzzle.layout, &self.fill, direction, index)
    }

    pub fn check_all(&self) -> Tally {
        validation::check_all(&self.puzzle.grid, &self.fill)
    }

    pub fn active_slot(&self) -> Option<&Slot> {
        let cur = self.nav.cursor()?;
        self.puzzle.layout.slot(cur.direction, cur.slot_index)
    }

    pub fn in_active_slot(&self, pos: Pos) -> bool {
        self.active_slot().is_some_and(|s| s.contains(pos))
    }

    pub fn is_solved(&self) -> bool {
        self.flags.solved
    }

    pub fn incorrect_notified(&self) -> bool {
        self.flags.incorrect_notified
    }

    pub fn timer(&self) -> Timer {
        self.timer
    }

    /// Most recent event with its sequence number (starting at 1).
    pub fn last_event(&self) -> Option<(u64, SessionEvent)> {
        self.last_event.map(|ev| (self.event_seq, ev))
    }
}

// ---------------- Reducer -----------------
impl Reducible for Session {
    type Action = Command;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if action == Command::TickSecond && !self.timer.running {
            return self;
        }
        let mut new = (*self).clone();
        match new.apply(action.clone()) {
            Ok(Some(event)) => {
                clog(&format!("{event:?} after {action:?}"));
                Rc::new(new)
            }
            Ok(None) => Rc::new(new),
            Err(err) => {
                cwarn(&format!("rejected {action:?}: {err}"));
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(rows: &[&str]) -> Session {
        let grid = Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| if c == '#' { None } else { Some(c) }).collect())
                .collect(),
        )
        .unwrap();
        Session::new(Rc::new(Puzzle::from_grid(grid)))
    }

    fn focus(s: &Session) -> Pos {
        s.cursor().unwrap().focus
    }

    fn type_word(s: &mut Session, word: &str) -> Vec<SessionEvent> {
        word.chars()
            .filter_map(|ch| s.apply(Command::PressLetter(ch)).unwrap())
            .collect()
    }

    #[test]
    fn non_letters_are_rejected_without_change() {
        let mut s = session(&["AB"]);
        let before = s.clone();
        assert_eq!(s.apply(Command::PressLetter('1')), Err(EngineError::InvalidInput('1')));
        assert_eq!(s, before);
    }

    #[test]
    fn lowercase_is_normalized() {
        let mut s = session(&["AB"]);
        s.apply(Command::PressLetter('a')).unwrap();
        assert_eq!(s.letter(Pos::new(0, 0)), Some('A'));
        assert_eq!(focus(&s), Pos::new(0, 1));
    }

    #[test]
    fn backspace_clears_in_place_then_retreats() {
        let mut s = session(&["ABC"]);
        type_word(&mut s, "AB");
        s.apply(Command::MoveArrow { dr: 0, dc: -1 }).unwrap();
        assert_eq!(focus(&s), Pos::new(0, 1));

        s.apply(Command::PressBackspace).unwrap();
        assert_eq!(focus(&s), Pos::new(0, 1));
        assert_eq!(s.letter(Pos::new(0, 1)), None);
        assert_eq!(s.letter(Pos::new(0, 0)), Some('A'));

        s.apply(Command::PressBackspace).unwrap();
        assert_eq!(focus(&s), Pos::new(0, 0));
        assert_eq!(s.letter(Pos::new(0, 0)), None);

        s.apply(Command::PressBackspace).unwrap();
        assert_eq!(focus(&s), Pos::new(0, 0));
    }

    #[test]
    fn check_slot_marks_and_typing_clears_mark() {
        let mut s = session(&["AB"]);
        type_word(&mut s, "A");
        s.apply(Command::SelectCell(Pos::new(0, 1))).unwrap();
        s.apply(Command::PressLetter('X')).unwrap();
        s.apply(Command::SelectSlot { direction: Direction::Across, index: 0 }).unwrap();
        s.apply(Command::CheckSlot).unwrap();
        assert_eq!(s.mark(Pos::new(0, 0)), CellStatus::Correct);
        assert_eq!(s.mark(Pos::new(0, 1)), CellStatus::Incorrect);

        s.apply(Command::SelectCell(Pos::new(0, 1))).unwrap();
        s.apply(Command::PressLetter('B')).unwrap();
        assert_eq!(s.mark(Pos::new(0, 1)), CellStatus::Empty);
    }

    #[test]
    fn incorrect_full_then_fix_then_solved() {
        let mut s = session(&["AB"]);
        s.apply(Command::StartTimer).unwrap();
        s.apply(Command::TickSecond).unwrap();
        assert_eq!(type_word(&mut s, "AX"), vec![SessionEvent::IncorrectFull]);
        assert_eq!(s.apply(Command::EvaluateCompletion), Ok(None));

        s.apply(Command::SelectCell(Pos::new(0, 1))).unwrap();
        s.apply(Command::PressBackspace).unwrap();
        assert!(!s.incorrect_notified());
        assert_eq!(
            type_word(&mut s, "B"),
            vec![SessionEvent::Solved { revealed: false, elapsed_secs: 1 }]
        );
        assert!(!s.timer().running);
        assert_eq!(s.last_event().map(|(seq, _)| seq), Some(2));
    }

    #[test]
    fn reveal_solves_and_is_flagged() {
        let mut s = session(&["AB", "C#"]);
        let ev = s.apply(Command::Reveal).unwrap();
        assert_eq!(ev, Some(SessionEvent::Solved { revealed: true, elapsed_secs: 0 }));
        let tally = s.check_all();
        assert_eq!(tally.correct, tally.total);
        assert_eq!(s.mark(Pos::new(1, 0)), CellStatus::Correct);
        assert_eq!(s.apply(Command::Reveal), Ok(None));
    }

    #[test]
    fn start_is_ignored_once_solved() {
        let mut s = session(&["AB"]);
        s.apply(Command::StartTimer).unwrap();
        s.apply(Command::TickSecond).unwrap();
        type_word(&mut s, "AB");
        assert!(s.is_solved());
        s.apply(Command::StartTimer).unwrap();
        assert_eq!(s.timer(), Timer { running: false, elapsed_secs: 1 });
        s.apply(Command::Clear).unwrap();
        s.apply(Command::StartTimer).unwrap();
        assert!(s.timer().running);
    }

    #[test]
    fn clear_resets_fill_flags_and_cursor() {
        let mut s = session(&["AB", "CD"]);
        s.apply(Command::Reveal).unwrap();
        s.apply(Command::SelectCell(Pos::new(1, 1))).unwrap();
        s.apply(Command::Clear).unwrap();
        assert_eq!(s.check_all().filled, 0);
        assert!(!s.is_solved());
        assert_eq!(s.mark(Pos::new(0, 0)), CellStatus::Empty);
        let cur = s.cursor().unwrap();
        assert_eq!((cur.direction, cur.slot_index, cur.focus), (Direction::Across, 0, Pos::new(0, 0)));
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut s = session(&["AB"]);
        assert_eq!(
            s.apply(Command::SelectSlot { direction: Direction::Down, index: 9 }),
            Err(EngineError::UnknownSlot { direction: Direction::Down, index: 9 })
        );
    }

    #[test]
    fn reducer_skips_idle_ticks_and_keeps_state_on_error() {
        let s = Rc::new(session(&["AB"]));
        let same = Rc::clone(&s).reduce(Command::TickSecond);
        assert!(Rc::ptr_eq(&s, &same));
        let same = Rc::clone(&s).reduce(Command::PressLetter('?'));
        assert!(Rc::ptr_eq(&s, &same));
        let moved = Rc::clone(&s).reduce(Command::PressLetter('a'));
        assert_eq!(moved.version, 1);
        assert_eq!(moved.letter(Pos::new(0, 0)), Some('A'));
    }
}
