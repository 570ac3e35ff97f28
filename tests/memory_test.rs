mod common;
use common::*;

fn code(source: &str) -> u32 {
    let out = compile_and_exec(source).unwrap();
    let mut chars = out.chars();
    let ch = chars.next().unwrap();
    assert_eq!(chars.next(), None);
    ch as u32
}

#[test]
fn test_increment_saturates() {
    let source = format!("{}@", "+".repeat(200));
    assert_eq!(code(&source), 127);
}

#[test]
fn test_decrement_saturates() {
    assert_eq!(code("---+@"), 1);
}

#[test]
fn test_double_does_not_overflow() {
    assert_eq!(code("+++******@"), 96);
    assert_eq!(code("+******+*@"), 65);
}

#[test]
fn test_half() {
    assert_eq!(code("+++++++/@"), 3);
    assert_eq!(code("+//@"), 0);
}

#[test]
fn test_tape_cursor_does_not_wrap() {
    assert_eq!(code("<+>>>>>>>>>>+<@"), 0);
    assert_eq!(code(")+(+)@"), 1);
}

#[test]
fn test_neighbor_at_last_cell() {
    // cell 6 = 5, cell 7 = 3; 3 ^ 5 = 6
    assert_eq!(code(")<+++++>+++^@"), 6);
    // cell 0 = 5, cell 1 = 3; 5 & 3 = 1
    assert_eq!(code("+++++>+++<&@"), 1);
}

#[test]
fn test_bank_growth_ceiling() {
    let source = format!("{}]+[-]@", "_".repeat(20));
    assert_eq!(code(&source), 1);
    // fifteen tapes: from the first, fourteen moves reach the last
    let source = format!("{}{}+]@", "_".repeat(20), "}".repeat(14));
    assert_eq!(code(&source), 1);
    let source = format!("{}{}+]@", "_".repeat(20), "}".repeat(13));
    assert_eq!(code(&source), 0);
}

#[test]
fn test_bank_cursor_without_growth() {
    assert_eq!(code("}}+{{@"), 1);
}

#[test]
fn test_reset_tape() {
    assert_eq!(code("+++>+++!@"), 0);
    assert_eq!(code("+++_}+++!{@"), 3);
}
