use super::token::*;
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Turns source text into an instruction stream.
///
/// Illegal characters are dropped without complaint so whitespace and
/// comments may be mixed freely with code. Scanning stops right after
/// the first terminator; the terminator is part of the result.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    if s.is_empty() {
        return Err(error!(EmptySource));
    }
    let mut tokens = Vec::new();
    for token in s.chars().map(Token::new) {
        if !token.is_valid() {
            continue;
        }
        tokens.push(token);
        if token.is_terminator() {
            break;
        }
    }
    Ok(tokens)
}

#[cfg(test)]
#[path = "tests/lex_test.rs"]
mod tests;
