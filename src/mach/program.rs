use super::{Bank, Interpreter};
use crate::error;
use crate::lang::{lex, Error, Token};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Source text, instruction stream and machine
///
/// The surface an editor or terminal talks to. Every `run` starts from a
/// fresh bank and throws the instruction stream away afterwards, so a
/// program must be compiled again before it can be run again.

#[derive(Debug, Default)]
pub struct Program {
    source: String,
    tokens: Option<Vec<Token>>,
    bank: Bank,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Replace the source text wholesale.
    pub fn write(&mut self, source: &str) {
        self.source = source.to_string();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_compiled(&self) -> bool {
        matches!(&self.tokens, Some(tokens) if !tokens.is_empty())
    }

    pub fn compile(&mut self) -> Result<()> {
        let tokens = lex(&self.source)?;
        debug!(
            source = self.source.len(),
            tokens = tokens.len(),
            "compiled"
        );
        self.tokens = Some(tokens);
        Ok(())
    }

    /// Execute the compiled stream, writing emitted characters to `out`.
    /// The program is reset whether or not execution succeeds.
    pub fn run<W: std::fmt::Write>(&mut self, out: &mut W) -> Result<()> {
        let tokens = match self.tokens.take() {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => return Err(error!(NotCompiled)),
        };
        let mut interpreter = Interpreter::new();
        let result = interpreter.execute(&tokens, &mut self.bank, out);
        self.bank = Bank::new();
        result
    }

    /// The compiled symbols in order.
    pub fn extract_symbols(&self) -> Result<String> {
        match &self.tokens {
            Some(tokens) if !tokens.is_empty() => Ok(tokens.iter().map(Token::symbol).collect()),
            _ => Err(error!(NotCompiled)),
        }
    }

    pub fn clear(&mut self) {
        self.source.clear();
        self.tokens = None;
        self.bank = Bank::new();
    }
}
