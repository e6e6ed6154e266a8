//! Cursor and navigation rules.
//!
//! The cursor is always one cell of one slot. Every transition here resolves the slot first and
//! then picks a focus cell inside it, so the focused cell can never fall outside the active slot.

use crate::error::EngineError;
use crate::model::{Direction, Layout, Pos};
use crate::state::fill::FillState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub direction: Direction,
    pub slot_index: usize,
    pub focus: Pos,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    cursor: Option<Cursor>,
    /// Cell most recently passed to `select_cell`; a repeat click on it toggles direction.
    last_selected: Option<Pos>,
}

/// First empty cell of the slot, or its first cell when it is full.
fn entry_cell(layout: &Layout, fill: &FillState, direction: Direction, index: usize) -> Option<Pos> {
    let slot = layout.slot(direction, index)?;
    slot.cells
        .iter()
        .copied()
        .find(|&p| fill.is_empty_at(p))
        .or_else(|| slot.cells.first().copied())
}

impl Navigator {
    /// Cursor on the first across slot, or the first down slot when there are no across slots.
    pub fn home(layout: &Layout, fill: &FillState) -> Self {
        let mut nav = Self::default();
        nav.reset(layout, fill);
        nav
    }

    pub fn reset(&mut self, layout: &Layout, fill: &FillState) {
        self.last_selected = None;
        self.cursor = None;
        for direction in [Direction::Across, Direction::Down] {
            if !layout.slots(direction).is_empty() {
                self.enter_slot(layout, fill, direction, 0);
                return;
            }
        }
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    fn enter_slot(&mut self, layout: &Layout, fill: &FillState, direction: Direction, index: usize) {
        if let Some(focus) = entry_cell(layout, fill, direction, index) {
            self.cursor = Some(Cursor {
                direction,
                slot_index: index,
                focus,
            });
        }
    }

    /// Points the cursor at `pos` inside the `direction` slot covering it, falling back to the
    /// other direction. Returns false if no slot covers the cell.
    fn focus_cell(&mut self, layout: &Layout, direction: Direction, pos: Pos) -> bool {
        for dir in [direction, direction.flip()] {
            if let Some(index) = layout.slot_index_at(dir, pos) {
                self.cursor = Some(Cursor {
                    direction: dir,
                    slot_index: index,
                    focus: pos,
                });
                return true;
            }
        }
        false
    }

    pub fn select_cell(&mut self, layout: &Layout, pos: Pos) {
        let current = self.cursor.map(|c| c.direction).unwrap_or(Direction::Across);
        if layout.slot_index_at(Direction::Across, pos).is_none()
            && layout.slot_index_at(Direction::Down, pos).is_none()
        {
            return;
        }
        let mut direction = current;
        if self.last_selected == Some(pos)
            && layout.slot_index_at(current, pos).is_some()
            && layout.slot_index_at(current.flip(), pos).is_some()
        {
            direction = current.flip();
        }
        self.last_selected = Some(pos);
        self.focus_cell(layout, direction, pos);
    }

    pub fn select_slot(
        &mut self,
        layout: &Layout,
        fill: &FillState,
        direction: Direction,
        index: usize,
    ) -> Result<(), EngineError> {
        if layout.slot(direction, index).is_none() {
            return Err(EngineError::UnknownSlot { direction, index });
        }
        self.enter_slot(layout, fill, direction, index);
        Ok(())
    }

    /// Next cell of the active slot; at a slot's end, the next slot in across-then-down order,
    /// wrapping from the last down slot back to the first across slot.
    pub fn advance(&mut self, layout: &Layout, fill: &FillState) {
        let Some(cur) = self.cursor else { return };
        let Some(slot) = layout.slot(cur.direction, cur.slot_index) else { return };
        if let Some(i) = slot.position_of(cur.focus) {
            if i + 1 < slot.cells.len() {
                self.cursor = Some(Cursor {
                    focus: slot.cells[i + 1],
                    ..cur
                });
                return;
            }
        }
        let (direction, index) = if cur.slot_index + 1 < layout.slots(cur.direction).len() {
            (cur.direction, cur.slot_index + 1)
        } else if !layout.slots(cur.direction.flip()).is_empty() {
            (cur.direction.flip(), 0)
        } else {
            (cur.direction, 0)
        };
        self.enter_slot(layout, fill, direction, index);
    }

    /// Previous cell of the active slot, staying put on the first cell. Returns the new focus if it moved.
    pub fn retreat(&mut self, layout: &Layout) -> Option<Pos> {
        let cur = self.cursor?;
        let slot = layout.slot(cur.direction, cur.slot_index)?;
        let i = slot.position_of(cur.focus)?;
        if i == 0 {
            return None;
        }
        let focus = slot.cells[i - 1];
        self.cursor = Some(Cursor { focus, ..cur });
        Some(focus)
    }

    /// Moves focus to the adjacent white cell, keeping the direction.
    pub fn move_arrow(&mut self, layout: &Layout, dr: isize, dc: isize) {
        let Some(cur) = self.cursor else { return };
        let row = cur.focus.row as isize + dr;
        let col = cur.focus.col as isize + dc;
        if row < 0 || col < 0 {
            return;
        }
        // Out-of-bounds and black cells have no covering slot.
        self.focus_cell(layout, cur.direction, Pos::new(row as usize, col as usize));
    }

    pub fn toggle_direction(&mut self, layout: &Layout, fill: &FillState) {
        let Some(cur) = self.cursor else { return };
        let direction = cur.direction.flip();
        match layout.slot_index_at(direction, cur.focus) {
            Some(slot_index) => {
                self.cursor = Some(Cursor {
                    direction,
                    slot_index,
                    focus: cur.focus,
                });
            }
            None => self.enter_slot(layout, fill, direction, 0),
        }
    }

    /// Steps to the neighbouring slot in the active direction, wrapping at either end.
    pub fn step_slot(&mut self, layout: &Layout, fill: &FillState, forward: bool) {
        let Some(cur) = self.cursor else { return };
        let len = layout.slots(cur.direction).len();
        if len == 0 {
            return;
        }
        let index = if forward {
            (cur.slot_index + 1) % len
        } else {
            (cur.slot_index + len - 1) % len
        };
        self.enter_slot(layout, fill, cur.direction, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grid;

    fn setup(rows: &[&str]) -> (Layout, FillState) {
        let grid = Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| if c == '#' { None } else { Some(c) }).collect())
                .collect(),
        )
        .unwrap();
        (Layout::derive(&grid), FillState::new(&grid))
    }

    fn at(nav: &Navigator) -> (Direction, usize, Pos) {
        let c = nav.cursor().unwrap();
        (c.direction, c.slot_index, c.focus)
    }

    #[test]
    fn home_prefers_across_then_down() {
        let (layout, fill) = setup(&["AB", "CD"]);
        assert_eq!(at(&Navigator::home(&layout, &fill)), (Direction::Across, 0, Pos::new(0, 0)));

        let (layout, fill) = setup(&["#", "#"]);
        assert!(Navigator::home(&layout, &fill).cursor().is_none());
    }

    #[test]
    fn second_click_on_same_cell_toggles_direction() {
        let (layout, _) = setup(&["AB", "CD"]);
        let mut nav = Navigator::default();
        nav.select_cell(&layout, Pos::new(1, 1));
        assert_eq!(at(&nav), (Direction::Across, 1, Pos::new(1, 1)));
        nav.select_cell(&layout, Pos::new(1, 1));
        assert_eq!(at(&nav), (Direction::Down, 1, Pos::new(1, 1)));
        nav.select_cell(&layout, Pos::new(0, 0));
        assert_eq!(at(&nav), (Direction::Down, 0, Pos::new(0, 0)));
    }

    #[test]
    fn click_on_black_cell_is_ignored() {
        let (layout, fill) = setup(&["A#", "BC"]);
        let mut nav = Navigator::home(&layout, &fill);
        let before = at(&nav);
        nav.select_cell(&layout, Pos::new(0, 1));
        nav.select_cell(&layout, Pos::new(7, 7));
        assert_eq!(at(&nav), before);
    }

    #[test]
    fn select_slot_focuses_first_empty_cell() {
        let (layout, mut fill) = setup(&["ABC"]);
        fill.set(Pos::new(0, 0), 'A').unwrap();
        let mut nav = Navigator::default();
        nav.select_slot(&layout, &fill, Direction::Across, 0).unwrap();
        assert_eq!(at(&nav).2, Pos::new(0, 1));
        assert_eq!(
            nav.select_slot(&layout, &fill, Direction::Across, 3),
            Err(EngineError::UnknownSlot { direction: Direction::Across, index: 3 })
        );
    }

    #[test]
    fn advance_cycles_across_then_down_then_wraps() {
        let (layout, fill) = setup(&["AB", "CD"]);
        let mut nav = Navigator::home(&layout, &fill);
        let mut seen = Vec::new();
        for _ in 0..9 {
            seen.push(at(&nav));
            nav.advance(&layout, &fill);
        }
        use Direction::*;
        assert_eq!(
            seen,
            vec![
                (Across, 0, Pos::new(0, 0)),
                (Across, 0, Pos::new(0, 1)),
                (Across, 1, Pos::new(1, 0)),
                (Across, 1, Pos::new(1, 1)),
                (Down, 0, Pos::new(0, 0)),
                (Down, 0, Pos::new(1, 0)),
                (Down, 1, Pos::new(0, 1)),
                (Down, 1, Pos::new(1, 1)),
                (Across, 0, Pos::new(0, 0)),
            ]
        );
    }

    #[test]
    fn single_cell_grid_advances_onto_itself() {
        let (layout, fill) = setup(&["A"]);
        let mut nav = Navigator::home(&layout, &fill);
        nav.advance(&layout, &fill);
        assert_eq!(at(&nav), (Direction::Down, 0, Pos::new(0, 0)));
        nav.advance(&layout, &fill);
        assert_eq!(at(&nav), (Direction::Across, 0, Pos::new(0, 0)));
    }

    #[test]
    fn arrows_skip_black_and_edges_and_keep_direction() {
        let (layout, fill) = setup(&["AB#", "CDE"]);
        let mut nav = Navigator::home(&layout, &fill);
        nav.move_arrow(&layout, 0, -1);
        assert_eq!(at(&nav), (Direction::Across, 0, Pos::new(0, 0)));
        nav.move_arrow(&layout, 0, 1);
        nav.move_arrow(&layout, 0, 1);
        assert_eq!(at(&nav).2, Pos::new(0, 1));
        nav.move_arrow(&layout, 1, 0);
        assert_eq!(at(&nav), (Direction::Across, 1, Pos::new(1, 1)));
        nav.move_arrow(&layout, 1, 0);
        assert_eq!(at(&nav).2, Pos::new(1, 1));
    }

    #[test]
    fn toggle_keeps_focus_and_switches_slot() {
        let (layout, fill) = setup(&["AB", "CD"]);
        let mut nav = Navigator::home(&layout, &fill);
        nav.advance(&layout, &fill);
        nav.toggle_direction(&layout, &fill);
        assert_eq!(at(&nav), (Direction::Down, 1, Pos::new(0, 1)));
        nav.toggle_direction(&layout, &fill);
        assert_eq!(at(&nav), (Direction::Across, 0, Pos::new(0, 1)));
    }

    #[test]
    fn retreat_stops_at_slot_start() {
        let (layout, fill) = setup(&["ABC"]);
        let mut nav = Navigator::home(&layout, &fill);
        nav.advance(&layout, &fill);
        assert_eq!(nav.retreat(&layout), Some(Pos::new(0, 0)));
        assert_eq!(nav.retreat(&layout), None);
        assert_eq!(at(&nav).2, Pos::new(0, 0));
    }

    #[test]
    fn step_slot_wraps_within_direction() {
        let (layout, fill) = setup(&["AB", "CD"]);
        let mut nav = Navigator::home(&layout, &fill);
        nav.step_slot(&layout, &fill, false);
        assert_eq!(at(&nav), (Direction::Across, 1, Pos::new(1, 0)));
        nav.step_slot(&layout, &fill, true);
        assert_eq!(at(&nav), (Direction::Across, 0, Pos::new(0, 0)));
    }
}
