use super::*;

#[test]
fn test_emit_three() {
    let mut bank = Bank::new();
    assert_eq!(execute("+++@", &mut bank), "\u{3}");
}

#[test]
fn test_state_is_left_in_callers_bank() {
    let mut bank = Bank::new();
    execute("+++>++_}+", &mut bank);
    assert_eq!(bank.len(), 2);
    assert_eq!(bank.cursor(), 1);
    assert_eq!(bank.current().current().value(), 1);
    let first = bank.tape(0).unwrap();
    assert_eq!(first.cursor(), 1);
    assert_eq!(first.cells()[0].value(), 3);
    assert_eq!(first.cells()[1].value(), 2);
}

#[test]
fn test_neighbor_on_last_cell_looks_left() {
    let mut bank = Bank::new();
    execute(")<+++>+&", &mut bank);
    assert_eq!(bank.current().current().value(), 1);
    let mut bank = Bank::new();
    execute(")<+++>+|", &mut bank);
    assert_eq!(bank.current().current().value(), 3);
}

#[test]
fn test_neighbor_looks_right() {
    let mut bank = Bank::new();
    execute("++++++>+++<^", &mut bank);
    assert_eq!(bank.current().cursor(), 0);
    assert_eq!(bank.current().current().value(), 6 ^ 3);
}

#[test]
fn test_cell_is_resolved_per_token() {
    let mut bank = Bank::new();
    execute("_]+++[+", &mut bank);
    assert_eq!(bank.tape(0).unwrap().current().value(), 1);
    assert_eq!(bank.tape(1).unwrap().current().value(), 3);
}

#[test]
fn test_reset_only_touches_current_tape() {
    let mut bank = Bank::new();
    execute("++_}+>+!", &mut bank);
    assert_eq!(bank.tape(0).unwrap().current().value(), 2);
    assert_eq!(bank.current(), &Tape::new());
}

#[test]
fn test_terminator_is_noop() {
    let tokens: Vec<_> = "+.+".chars().map(crate::lang::Token::new).collect();
    let mut bank = Bank::new();
    let mut s = String::new();
    Interpreter::new().execute(&tokens, &mut bank, &mut s).unwrap();
    assert_eq!(bank.current().current().value(), 2);
}

#[test]
fn test_out_of_range_reports_position() {
    let tokens = lex("+@~@+@").unwrap();
    let mut bank = Bank::new();
    let mut s = String::new();
    let mut interpreter = Interpreter::new();
    let error = interpreter.execute(&tokens, &mut bank, &mut s).unwrap_err();
    assert_eq!(error.code(), ErrorCode::OutOfRangeCharacter);
    assert_eq!(error.position(), Some(3));
    assert_eq!(s, "\u{1}");
    assert_eq!(interpreter.emitted(), 1);
}
