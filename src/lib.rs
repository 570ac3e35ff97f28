//! # Symbol
//!
//! A tiny esoteric language made only of punctuation. There are no loops
//! and no conditionals: a program is a straight line of symbols that
//! pokes at a bank of tapes, each tape holding eight seven-bit cells.
//!
//! Run the executable with no arguments for an interactive session.
//! Type source lines, then `COMPILE` and `RUN`.
//! ```text
//! SYMBOL
//! READY.
//! +++*****+++++@.
//! COMPILE
//! RUN
//! e
//! ```
//!
//! A file can be run directly with `symbol hello.sym`.
//!
//! From Rust the same steps are available on [`mach::Program`].
//! ```
//! let mut program = symbol::mach::Program::new();
//! program.write("+******++++++++@ this prints an H");
//! program.compile().unwrap();
//! let mut out = String::new();
//! program.run(&mut out).unwrap();
//! assert_eq!(out, "H");
//! ```

#[path = "doc/guide.rs"]
#[allow(non_snake_case)]
pub mod _Guide;

#[path = "doc/hello_world.rs"]
#[allow(non_snake_case)]
pub mod __Hello_World;

pub mod lang;
pub mod mach;
