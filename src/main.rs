//! # Symbol
//!
//! Interactive editor and file runner.
//!

mod term;

fn main() {
    term::main();
}
