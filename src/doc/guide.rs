/*!
# Language Guide

Source text is read one character at a time. Only the twenty symbols
below mean anything; every other character is ignored, so spaces, line
breaks and plain words can be used as comments. Reading stops after the
first `.` and nothing after it is part of the program.

The machine is a bank of tapes. A new bank holds one tape and can grow to
fifteen. Each tape has eight cells, each holding a value from 0 to 127.
The bank and every tape have their own cursor; the current cell is the
cell under the current tape's cursor. Cursors stop at the ends and never
wrap around.

## Cell arithmetic

| Symbol | Effect |
|---|---|
| `+` | Add 1, stopping at 127 |
| `-` | Subtract 1, stopping at 0 |
| `*` | Double, unless the result would pass 127 |
| `/` | Halve, rounding down |

## Bitwise operations

The second operand of `&`, `|` and `^` is the cell to the right of the
current cell. On the last cell of a tape it is the cell to the left.

| Symbol | Effect |
|---|---|
| `&` | AND with the neighbor cell |
| `\|` | OR with the neighbor cell |
| `^` | XOR with the neighbor cell |
| `~` | Complement every bit |

`~` is not limited to seven bits. Complementing 0 gives -1, which `+`
will still count up from but `-` will not count down from, and which
`@` cannot print. Complement again to return to the normal range.

## Moving around

| Symbol | Effect |
|---|---|
| `>` | Next cell of the current tape |
| `<` | Previous cell of the current tape |
| `(` | First cell of the current tape |
| `)` | Last cell of the current tape |
| `}` | Next tape of the bank |
| `{` | Previous tape of the bank |
| `[` | First tape of the bank |
| `]` | Last tape of the bank |

## Everything else

| Symbol | Effect |
|---|---|
| `@` | Print the character whose code is the current cell |
| `_` | Add a tape to the bank |
| `!` | Zero every cell of the current tape and rewind its cursor |
| `.` | End of program |

Every run starts from a fresh bank. Nothing is remembered from one run
to the next, and a program has to be compiled again before each run.
*/
