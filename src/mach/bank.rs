use super::{Tape, BANK_GROW_LIMIT};
use tracing::trace;

/// ## Append-only collection of tapes
///
/// Starts with one tape and grows one tape at a time. Growth stops at
/// fifteen tapes even though the nominal capacity is sixteen.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    tapes: Vec<Tape>,
    cursor: usize,
}

impl Default for Bank {
    fn default() -> Bank {
        Bank {
            tapes: vec![Tape::new()],
            cursor: 0,
        }
    }
}

impl Bank {
    pub fn new() -> Bank {
        Bank::default()
    }

    pub fn len(&self) -> usize {
        self.tapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tapes.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tape(&self, index: usize) -> Option<&Tape> {
        self.tapes.get(index)
    }

    pub fn current(&self) -> &Tape {
        &self.tapes[self.cursor]
    }

    pub fn current_mut(&mut self) -> &mut Tape {
        &mut self.tapes[self.cursor]
    }

    pub fn grow(&mut self) {
        if self.tapes.len() < BANK_GROW_LIMIT {
            self.tapes.push(Tape::new());
            trace!(tapes = self.tapes.len(), "bank grew");
        }
    }

    pub fn advance(&mut self) {
        if self.cursor < self.tapes.len() - 1 {
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
        self.cursor = self.tapes.len() - 1;
    }
}
