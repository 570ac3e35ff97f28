use super::{Bank, Opcode};
use crate::error;
use crate::lang::{Error, Token};
use std::convert::TryFrom;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// Runs an instruction stream start to finish against a bank owned by
/// the caller. There is no branching: every token is visited exactly once
/// and the current tape and cell are looked up again for each one.

#[derive(Debug, Default)]
pub struct Interpreter {
    emitted: usize,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter::default()
    }

    /// Number of characters written by the last `execute`.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn execute<W>(&mut self, tokens: &[Token], bank: &mut Bank, out: &mut W) -> Result<()>
    where
        W: std::fmt::Write,
    {
        self.emitted = 0;
        for (pc, token) in tokens.iter().enumerate() {
            let opcode = match Opcode::try_from(token) {
                Ok(opcode) => opcode,
                Err(_) => continue,
            };
            trace!(pc, %opcode, tape = bank.cursor(), cell = bank.current().cursor());
            self.step(opcode, bank, out)
                .map_err(|error| error.at_position(pc))?;
        }
        debug!(tokens = tokens.len(), emitted = self.emitted, "executed");
        Ok(())
    }

    fn step<W>(&mut self, opcode: Opcode, bank: &mut Bank, out: &mut W) -> Result<()>
    where
        W: std::fmt::Write,
    {
        use Opcode::*;
        let tape = bank.current_mut();
        match opcode {
            Increment => tape.current_mut().increment(),
            Decrement => tape.current_mut().decrement(),
            Double => tape.current_mut().double(),
            Half => tape.current_mut().half(),
            And => {
                let other = tape.neighbor().value();
                tape.current_mut().and(other)
            }
            Or => {
                let other = tape.neighbor().value();
                tape.current_mut().or(other)
            }
            Xor => {
                let other = tape.neighbor().value();
                tape.current_mut().xor(other)
            }
            Not => tape.current_mut().not(),
            Retreat => tape.retreat(),
            Advance => tape.advance(),
            JumpFirst => tape.jump_first(),
            JumpLast => tape.jump_last(),
            Reset => tape.reset(),
            Emit => {
                let ch = tape.current().emit()?;
                if out.write_char(ch).is_err() {
                    return Err(error!(InternalError; "OUTPUT REFUSED CHARACTER"));
                }
                self.emitted += 1;
            }
            BankRetreat => bank.retreat(),
            BankAdvance => bank.advance(),
            BankJumpFirst => bank.jump_first(),
            BankJumpLast => bank.jump_last(),
            Grow => bank.grow(),
            Terminate => {}
        }
        Ok(())
    }
}
