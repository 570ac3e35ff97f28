use crate::lang::Token;
use std::convert::TryFrom;

/// ## Machine instruction set
///
/// One opcode per legal symbol. The machine has no registers beyond the
/// current cell, which is found afresh through the bank and tape cursors
/// before every instruction.
///
/// For example: `+>++<&@` stores 1 and 2 in the first two cells, ANDs
/// them into the first cell and emits the result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Cell arithmetic
    Increment,
    Decrement,
    Double,
    Half,

    // *** Bitwise, second operand is the neighbor cell
    And,
    Or,
    Xor,
    /// Full-width complement. Not masked back into seven bits.
    Not,

    // *** Tape navigation
    Retreat,
    Advance,
    JumpFirst,
    JumpLast,

    // *** Bank navigation
    BankRetreat,
    BankAdvance,
    BankJumpFirst,
    BankJumpLast,

    // *** Machine
    Emit,
    Grow,
    Reset,
    Terminate,
}

impl Opcode {
    pub fn from_symbol(symbol: char) -> Option<Opcode> {
        use Opcode::*;
        Some(match symbol {
            '+' => Increment,
            '-' => Decrement,
            '*' => Double,
            '/' => Half,
            '&' => And,
            '|' => Or,
            '^' => Xor,
            '~' => Not,
            '<' => Retreat,
            '>' => Advance,
            '(' => JumpFirst,
            ')' => JumpLast,
            '{' => BankRetreat,
            '}' => BankAdvance,
            '[' => BankJumpFirst,
            ']' => BankJumpLast,
            '@' => Emit,
            '_' => Grow,
            '!' => Reset,
            '.' => Terminate,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> char {
        use Opcode::*;
        match self {
            Increment => '+',
            Decrement => '-',
            Double => '*',
            Half => '/',
            And => '&',
            Or => '|',
            Xor => '^',
            Not => '~',
            Retreat => '<',
            Advance => '>',
            JumpFirst => '(',
            JumpLast => ')',
            BankRetreat => '{',
            BankAdvance => '}',
            BankJumpFirst => '[',
            BankJumpLast => ']',
            Emit => '@',
            Grow => '_',
            Reset => '!',
            Terminate => '.',
        }
    }
}

impl TryFrom<&Token> for Opcode {
    type Error = ();
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        Opcode::from_symbol(token.symbol()).ok_or(())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Increment => write!(f, "INC"),
            Decrement => write!(f, "DEC"),
            Double => write!(f, "DBL"),
            Half => write!(f, "HALF"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Xor => write!(f, "XOR"),
            Not => write!(f, "NOT"),
            Retreat => write!(f, "PREV"),
            Advance => write!(f, "NEXT"),
            JumpFirst => write!(f, "FIRST"),
            JumpLast => write!(f, "LAST"),
            BankRetreat => write!(f, "BANKPREV"),
            BankAdvance => write!(f, "BANKNEXT"),
            BankJumpFirst => write!(f, "BANKFIRST"),
            BankJumpLast => write!(f, "BANKLAST"),
            Emit => write!(f, "EMIT"),
            Grow => write!(f, "GROW"),
            Reset => write!(f, "RESET"),
            Terminate => write!(f, "END"),
        }
    }
}
