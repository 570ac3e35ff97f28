use super::{Cell, TAPE_LEN};

/// ## Eight cells and a cursor
///
/// The cursor never wraps. Moving past either end does nothing.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: [Cell; TAPE_LEN],
    cursor: usize,
}

impl Tape {
    pub fn new() -> Tape {
        Tape::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn current(&self) -> &Cell {
        &self.cells[self.cursor]
    }

    pub fn current_mut(&mut self) -> &mut Cell {
        &mut self.cells[self.cursor]
    }

    /// Second operand for the binary bitwise operations: the cell to the
    /// right, or the cell to the left when the cursor is on the last slot.
    pub fn neighbor(&self) -> &Cell {
        if self.cursor < TAPE_LEN - 1 {
            &self.cells[self.cursor + 1]
        } else {
            &self.cells[self.cursor - 1]
        }
    }

    pub fn advance(&mut self) {
        if self.cursor < TAPE_LEN - 1 {
            self.cursor += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn jump_first(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_last(&mut self) {
        self.cursor = TAPE_LEN - 1;
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
        self.cursor = 0;
    }
}
