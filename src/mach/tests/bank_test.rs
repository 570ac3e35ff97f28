use super::*;

#[test]
fn test_starts_with_one_tape() {
    let b = Bank::new();
    assert_eq!(b.len(), 1);
    assert_eq!(b.cursor(), 0);
}

#[test]
fn test_growth_ceiling() {
    let mut b = Bank::new();
    for _ in 0..20 {
        b.grow();
        assert!(b.len() < BANK_CAPACITY);
    }
    assert_eq!(b.len(), 15);
}

#[test]
fn test_cursor_is_clamped_to_len() {
    let mut b = Bank::new();
    b.advance();
    assert_eq!(b.cursor(), 0);
    b.grow();
    b.grow();
    b.advance();
    b.advance();
    b.advance();
    assert_eq!(b.cursor(), 2);
    b.jump_first();
    b.retreat();
    assert_eq!(b.cursor(), 0);
    b.jump_last();
    assert_eq!(b.cursor(), 2);
}

#[test]
fn test_tapes_are_independent() {
    let mut b = Bank::new();
    b.grow();
    b.current_mut().current_mut().increment();
    b.advance();
    assert_eq!(b.current().current().value(), 0);
    assert_eq!(b.tape(0).map(|t| t.current().value()), Some(1));
    assert!(b.tape(2).is_none());
}
