//! Puzzle document, grid and slot layout.
//! The grid is the answer key; numbering and slots are derived from its black/white pattern once at load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::PuzzleError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// Cell coordinate, 0-indexed, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

// ---------------- Puzzle document -----------------

/// The JSON document a puzzle is served as.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDoc {
    /// `[rows, cols]`
    pub size: [usize; 2],
    /// Row-major; `null` (or an empty / `#` / `.` string) marks a black square.
    pub grid: Vec<Vec<Option<String>>>,
    #[serde(default)]
    pub clues: ClueLists,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClueLists {
    #[serde(default)]
    pub across: Vec<ClueEntry>,
    #[serde(default)]
    pub down: Vec<ClueEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub num: u32,
    #[serde(default)]
    pub clue: String,
    // Authoring metadata; the grid is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
}

impl PuzzleDoc {
    pub fn from_json(raw: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// ---------------- Grid -----------------

/// Immutable layout and answer key. `None` is a black square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    /// Row-major; length = rows * cols.
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Option<char>>>) -> Result<Self, PuzzleError> {
        let height = rows.len();
        if height == 0 {
            return Err(PuzzleError::InvalidGridShape("grid has no rows".into()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(PuzzleError::InvalidGridShape("grid has no columns".into()));
        }
        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PuzzleError::InvalidGridShape(format!(
                    "row {r} has {} entries, expected {width}",
                    row.len()
                )));
            }
            for (c, cell) in row.into_iter().enumerate() {
                match cell {
                    None => cells.push(None),
                    Some(ch) if ch.is_ascii_alphabetic() => cells.push(Some(ch.to_ascii_uppercase())),
                    Some(ch) => {
                        return Err(PuzzleError::InvalidTargetLetter {
                            row: r,
                            col: c,
                            value: ch.to_string(),
                        });
                    }
                }
            }
        }
        Ok(Self {
            size: GridSize { rows: height, cols: width },
            cells,
        })
    }

    /// Validates the document's grid against its declared size.
    pub fn from_doc(doc: &PuzzleDoc) -> Result<Self, PuzzleError> {
        let [rows, cols] = doc.size;
        if doc.grid.len() != rows {
            return Err(PuzzleError::InvalidGridShape(format!(
                "size says {rows} rows, grid has {}",
                doc.grid.len()
            )));
        }
        let mut parsed = Vec::with_capacity(rows);
        for (r, row) in doc.grid.iter().enumerate() {
            if row.len() != cols {
                return Err(PuzzleError::InvalidGridShape(format!(
                    "row {r} has {} entries, size says {cols}",
                    row.len()
                )));
            }
            let mut out = Vec::with_capacity(cols);
            for (c, cell) in row.iter().enumerate() {
                out.push(parse_doc_cell(r, c, cell.as_deref())?);
            }
            parsed.push(out);
        }
        Self::from_rows(parsed)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size.rows && (col as usize) < self.size.cols
    }

    pub fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row < self.size.rows && pos.col < self.size.cols {
            Some(pos.row * self.size.cols + pos.col)
        } else {
            None
        }
    }

    /// Target letter; `None` for black or out of bounds.
    pub fn target(&self, pos: Pos) -> Option<char> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    pub fn is_white(&self, pos: Pos) -> bool {
        self.target(pos).is_some()
    }

    pub fn white_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// White cells with their targets in row-major order.
    pub fn whites(&self) -> impl Iterator<Item = (Pos, char)> + '_ {
        let cols = self.size.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|ch| (Pos::new(i / cols, i % cols), ch)))
    }
}

fn parse_doc_cell(row: usize, col: usize, raw: Option<&str>) -> Result<Option<char>, PuzzleError> {
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "#" || trimmed == "." {
        return Ok(None);
    }
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(Some(ch.to_ascii_uppercase())),
        _ => Err(PuzzleError::InvalidTargetLetter {
            row,
            col,
            value: raw.to_string(),
        }),
    }
}

// ---------------- Numbering & slots -----------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub number: u32,
    pub direction: Direction,
    /// Start to end, contiguous along the slot's axis.
    pub cells: Vec<Pos>,
    pub answer: String,
    pub clue: String,
}

impl Slot {
    pub fn position_of(&self, pos: Pos) -> Option<usize> {
        self.cells.iter().position(|&p| p == pos)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.position_of(pos).is_some()
    }
}

/// Numbering table plus the across and down slot sequences, each in scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    cols: usize,
    numbering: Vec<Option<u32>>,
    across: Vec<Slot>,
    down: Vec<Slot>,
    /// Cell index -> across slot index.
    across_of: Vec<Option<usize>>,
    down_of: Vec<Option<usize>>,
}

impl Layout {
    pub fn derive(grid: &Grid) -> Self {
        let GridSize { rows, cols } = grid.size();
        let white = |r: usize, c: usize| grid.is_white(Pos::new(r, c));
        let starts_across = |r: usize, c: usize| white(r, c) && (c == 0 || !white(r, c - 1));
        let starts_down = |r: usize, c: usize| white(r, c) && (r == 0 || !white(r - 1, c));

        let mut numbering = vec![None; rows * cols];
        let mut next = 1u32;
        for r in 0..rows {
            for c in 0..cols {
                if starts_across(r, c) || starts_down(r, c) {
                    numbering[r * cols + c] = Some(next);
                    next += 1;
                }
            }
        }

        let number_at = |r: usize, c: usize| numbering[r * cols + c].unwrap_or_default();
        let answer_of = |cells: &[Pos]| cells.iter().filter_map(|&p| grid.target(p)).collect::<String>();

        let mut across = Vec::new();
        let mut across_of = vec![None; rows * cols];
        for r in 0..rows {
            let mut c = 0;
            while c < cols {
                if !starts_across(r, c) {
                    c += 1;
                    continue;
                }
                let number = number_at(r, c);
                let mut cells = Vec::new();
                while c < cols && white(r, c) {
                    across_of[r * cols + c] = Some(across.len());
                    cells.push(Pos::new(r, c));
                    c += 1;
                }
                across.push(Slot {
                    number,
                    direction: Direction::Across,
                    answer: answer_of(&cells),
                    cells,
                    clue: String::new(),
                });
            }
        }

        // Down runs are collected column by column, then put into row-major scan order of their starts.
        let mut down = Vec::new();
        for c in 0..cols {
            let mut r = 0;
            while r < rows {
                if !starts_down(r, c) {
                    r += 1;
                    continue;
                }
                let number = number_at(r, c);
                let mut cells = Vec::new();
                while r < rows && white(r, c) {
                    cells.push(Pos::new(r, c));
                    r += 1;
                }
                down.push(Slot {
                    number,
                    direction: Direction::Down,
                    answer: answer_of(&cells),
                    cells,
                    clue: String::new(),
                });
            }
        }
        down.sort_by_key(|s| s.cells[0]);
        let mut down_of = vec![None; rows * cols];
        for (i, slot) in down.iter().enumerate() {
            for p in &slot.cells {
                down_of[p.row * cols + p.col] = Some(i);
            }
        }

        Self {
            cols,
            numbering,
            across,
            down,
            across_of,
            down_of,
        }
    }

    /// Attaches clue text by (direction, number); unmatched slots keep an empty clue.
    pub fn attach_clues(&mut self, clues: &ClueLists) {
        fn fill(slots: &mut [Slot], entries: &[ClueEntry]) {
            let by_num: HashMap<u32, &str> = entries.iter().map(|e| (e.num, e.clue.as_str())).collect();
            for slot in slots {
                slot.clue = by_num.get(&slot.number).map(|s| s.to_string()).unwrap_or_default();
            }
        }
        fill(&mut self.across, &clues.across);
        fill(&mut self.down, &clues.down);
    }

    pub fn number(&self, pos: Pos) -> Option<u32> {
        if pos.col >= self.cols {
            return None;
        }
        self.numbering.get(pos.row * self.cols + pos.col).copied().flatten()
    }

    pub fn slots(&self, direction: Direction) -> &[Slot] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    pub fn slot(&self, direction: Direction, index: usize) -> Option<&Slot> {
        self.slots(direction).get(index)
    }

    /// Index of the `direction` slot covering `pos`, if any.
    pub fn slot_index_at(&self, direction: Direction, pos: Pos) -> Option<usize> {
        if pos.col >= self.cols {
            return None;
        }
        let table = match direction {
            Direction::Across => &self.across_of,
            Direction::Down => &self.down_of,
        };
        table.get(pos.row * self.cols + pos.col).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}

/// A loaded puzzle: grid, derived layout and display metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub layout: Layout,
    pub title: Option<String>,
    pub date: Option<String>,
}

impl Puzzle {
    pub fn from_doc(doc: &PuzzleDoc) -> Result<Self, PuzzleError> {
        let grid = Grid::from_doc(doc)?;
        let mut layout = Layout::derive(&grid);
        layout.attach_clues(&doc.clues);
        Ok(Self {
            grid,
            layout,
            title: doc.title.clone(),
            date: doc.date.clone(),
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, PuzzleError> {
        Self::from_doc(&PuzzleDoc::from_json(raw)?)
    }

    pub fn from_grid(grid: Grid) -> Self {
        let layout = Layout::derive(&grid);
        Self {
            grid,
            layout,
            title: None,
            date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| if c == '#' { None } else { Some(c) }).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn numbers_two_by_two() {
        let layout = Layout::derive(&grid(&["CA", "AT"]));
        assert_eq!(layout.number(Pos::new(0, 0)), Some(1));
        assert_eq!(layout.number(Pos::new(0, 1)), Some(2));
        assert_eq!(layout.number(Pos::new(1, 0)), Some(3));
        assert_eq!(layout.number(Pos::new(1, 1)), None);

        let across: Vec<_> = layout.slots(Direction::Across).iter().map(|s| (s.number, s.answer.as_str())).collect();
        let down: Vec<_> = layout.slots(Direction::Down).iter().map(|s| (s.number, s.answer.as_str())).collect();
        assert_eq!(across, vec![(1, "CA"), (3, "AT")]);
        assert_eq!(down, vec![(1, "CA"), (2, "AT")]);
    }

    #[test]
    fn isolated_cell_gets_two_length_one_slots() {
        let layout = Layout::derive(&grid(&["#A#", "#B#", "C#D"]));
        // (0,1)-(1,1) is a down run; its cells are single across runs.
        assert_eq!(layout.number(Pos::new(0, 1)), Some(1));
        assert_eq!(layout.number(Pos::new(1, 1)), Some(2));
        assert_eq!(layout.number(Pos::new(2, 0)), Some(3));
        assert_eq!(layout.number(Pos::new(2, 2)), Some(4));
        let down = layout.slots(Direction::Down);
        assert_eq!(down.len(), 3);
        assert_eq!(down[0].answer, "AB");
        let corner = layout.slot_index_at(Direction::Across, Pos::new(2, 2)).unwrap();
        assert_eq!(layout.slots(Direction::Across)[corner].cells, vec![Pos::new(2, 2)]);
    }

    #[test]
    fn down_slots_follow_scan_order_of_starts() {
        // Column 2's run starts on row 0, column 0's on row 1.
        let layout = Layout::derive(&grid(&["##A", "B#C", "D#E"]));
        let starts: Vec<_> = layout.slots(Direction::Down).iter().map(|s| s.cells[0]).collect();
        assert_eq!(starts, vec![Pos::new(0, 2), Pos::new(1, 0)]);
        let numbers: Vec<_> = layout.slots(Direction::Down).iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn all_black_grid_is_empty_not_an_error() {
        let layout = Layout::derive(&grid(&["##", "##"]));
        assert!(layout.is_empty());
        assert_eq!(layout.number(Pos::new(0, 0)), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![Some('A'), Some('B')], vec![Some('C')]]).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidGridShape(_)));
    }

    #[test]
    fn size_must_match_grid() {
        let raw = r#"{"size":[2,2],"grid":[["A","B"]],"clues":{"across":[],"down":[]}}"#;
        let err = Puzzle::from_json(raw).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidGridShape(_)));
    }

    #[test]
    fn document_parses_with_sentinels_and_clues() {
        let raw = r##"{
            "size": [2, 3],
            "grid": [["c", "a", null], ["a", "t", "#"]],
            "clues": {
                "across": [{"num": 1, "clue": "Feline", "answer": "CA", "row": 0, "col": 0}],
                "down": [{"num": 2, "clue": "Preposition"}]
            },
            "date": "2025-09-01"
        }"##;
        let puzzle = Puzzle::from_json(raw).unwrap();
        assert_eq!(puzzle.grid.target(Pos::new(0, 0)), Some('C'));
        assert!(!puzzle.grid.is_white(Pos::new(1, 2)));
        assert_eq!(puzzle.layout.slot(Direction::Across, 0).unwrap().clue, "Feline");
        // across 3 has no entry
        assert_eq!(puzzle.layout.slot(Direction::Across, 1).unwrap().clue, "");
        assert_eq!(puzzle.layout.slot(Direction::Down, 1).unwrap().clue, "Preposition");
        assert_eq!(puzzle.date.as_deref(), Some("2025-09-01"));
    }

    #[test]
    fn multi_letter_cell_is_rejected() {
        let raw = r#"{"size":[1,2],"grid":[["AB","C"]]}"#;
        let err = Puzzle::from_json(raw).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidTargetLetter { row: 0, col: 0, .. }));
    }
}
