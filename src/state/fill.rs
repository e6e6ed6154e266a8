// Letters the player has entered so far.
use crate::error::EngineError;
use crate::model::{Grid, GridSize, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillState {
    size: GridSize,
    white: Vec<bool>,
    letters: Vec<Option<char>>,
}

impl FillState {
    pub fn new(grid: &Grid) -> Self {
        let size = grid.size();
        let mut white = vec![false; size.rows * size.cols];
        for (pos, _) in grid.whites() {
            white[pos.row * size.cols + pos.col] = true;
        }
        Self {
            size,
            letters: vec![None; white.len()],
            white,
        }
    }

    fn slot(&self, pos: Pos) -> Result<usize, EngineError> {
        let idx = pos.row * self.size.cols + pos.col;
        if pos.row < self.size.rows && pos.col < self.size.cols && self.white[idx] {
            Ok(idx)
        } else {
            Err(EngineError::InvalidCell { row: pos.row, col: pos.col })
        }
    }

    pub fn get(&self, pos: Pos) -> Result<Option<char>, EngineError> {
        Ok(self.letters[self.slot(pos)?])
    }

    /// Like [`get`](Self::get) but treats black or out-of-range cells as empty.
    pub fn letter(&self, pos: Pos) -> Option<char> {
        self.get(pos).ok().flatten()
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.letter(pos).is_none()
    }

    pub fn set(&mut self, pos: Pos, letter: char) -> Result<(), EngineError> {
        let idx = self.slot(pos)?;
        self.letters[idx] = Some(letter);
        Ok(())
    }

    pub fn clear(&mut self, pos: Pos) -> Result<(), EngineError> {
        let idx = self.slot(pos)?;
        self.letters[idx] = None;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.letters.iter_mut().for_each(|l| *l = None);
    }

    pub fn filled_count(&self) -> usize {
        self.letters.iter().filter(|l| l.is_some()).count()
    }
}
