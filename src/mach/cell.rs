use super::CELL_MAX;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Seven-bit register
///
/// Arithmetic clamps to `0..=127`. The one exception is `not`, which
/// complements every bit of the full-width value and may leave the cell
/// negative. Later operations compare against that value as it is.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: i64,
}

impl Cell {
    pub fn new() -> Cell {
        Cell::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        if self.value < CELL_MAX {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.value > 0 {
            self.value -= 1;
        }
    }

    /// No-op when the result would exceed the seven-bit range.
    pub fn double(&mut self) {
        if let Some(doubled) = self.value.checked_mul(2) {
            if doubled <= CELL_MAX {
                self.value = doubled;
            }
        }
    }

    /// Floor division by two.
    pub fn half(&mut self) {
        self.value = self.value.div_euclid(2);
    }

    pub fn and(&mut self, other: i64) {
        self.value &= other;
    }

    pub fn or(&mut self, other: i64) {
        self.value |= other;
    }

    pub fn xor(&mut self, other: i64) {
        self.value ^= other;
    }

    pub fn not(&mut self) {
        self.value = !self.value;
    }

    /// The character whose code point is the cell value.
    pub fn emit(&self) -> Result<char> {
        match u32::try_from(self.value).ok().and_then(char::from_u32) {
            Some(ch) => Ok(ch),
            None => Err(error!(OutOfRangeCharacter; &format!("VALUE {}", self.value))),
        }
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
