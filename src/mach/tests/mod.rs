use super::*;
use crate::lang::{lex, ErrorCode};

mod bank_test;
mod interpreter_test;

fn cell(value: i64) -> Cell {
    let mut cell = Cell::new();
    for _ in 0..value {
        cell.increment();
    }
    assert_eq!(cell.value(), value);
    cell
}

fn execute(source: &str, bank: &mut Bank) -> String {
    let tokens = lex(source).unwrap();
    let mut s = String::new();
    Interpreter::new().execute(&tokens, bank, &mut s).unwrap();
    s
}
