/// Every character the language understands. Anything else in a source
/// text is filler and never reaches the instruction stream.
pub const LEGALS: &str = "+-*/&|~^<>(){}[]_!@.";

/// Ends tokenization. The terminator itself is kept in the stream.
pub const TERMINATOR: char = '.';

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token {
    symbol: char,
    valid: bool,
}

impl Token {
    pub fn new(symbol: char) -> Token {
        Token {
            symbol,
            valid: LEGALS.contains(symbol),
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_terminator(&self) -> bool {
        self.symbol == TERMINATOR
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
