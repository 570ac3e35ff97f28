/*!
## Rust Machine Module

This Rust module is the memory model and interpreter for Symbol.

*/

/// Largest value the arithmetic operations will produce.
pub const CELL_MAX: i64 = 127;
/// Cells on every tape.
pub const TAPE_LEN: usize = 8;
/// Nominal number of tapes in a bank.
pub const BANK_CAPACITY: usize = 16;
/// Tapes a bank can actually reach by growing.
pub const BANK_GROW_LIMIT: usize = BANK_CAPACITY - 1;

mod bank;
mod cell;
mod interpreter;
mod opcode;
mod program;
mod tape;

pub use bank::Bank;
pub use cell::Cell;
pub use interpreter::Interpreter;
pub use opcode::Opcode;
pub use program::Program;
pub use tape::Tape;

#[cfg(test)]
mod tests;
