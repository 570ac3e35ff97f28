/*!
# Rust Language Module

This Rust module turns Symbol source text into an instruction stream.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use token::Token;
pub use token::{LEGALS, TERMINATOR};
