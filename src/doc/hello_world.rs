/*!
# Hello World

Without loops every character has to be built by hand. Doubling is the
quickest way up: start small, double a few times, then nudge the value
into place with `+` or `-`.

| Char | Code | Recipe | Symbols |
|---|---|---|---|
| `H` | 72 | 1 × 2⁶ + 8 | `+******++++++++@` |
| `e` | 101 | 3 × 2⁵ + 5 | `+++*****+++++@` |
| `l` | 108 | 3 × 2⁵ + 12 | `+++*****++++++++++++@` |
| `o` | 111 | 3 × 2⁵ + 15 | `+++*****+++++++++++++++@` |
| ` ` | 32 | 1 × 2⁵ | `+*****@` |
| `W` | 87 | 3 × 2⁵ − 9 | `+++*****---------@` |
| `r` | 114 | 3 × 2⁵ + 18 | `+++*****++++++++++++++++++@` |
| `d` | 100 | 3 × 2⁵ + 4 | `+++*****++++@` |

Each letter gets its own cell, and letters that repeat are printed again
by moving back to the cell that already holds them.

```text
+******++++++++@>+++*****+++++@>+++*****++++++++++++@@>+++*****+++++++++++++++@>+*****@>+++*****---------@<<@>>>+++*****++++++++++++++++++@<<<<@>>>>>>+++*****++++@.
```

```
let mut program = symbol::mach::Program::new();
program.write(concat!(
    "+******++++++++@>+++*****+++++@>+++*****++++++++++++@@>",
    "+++*****+++++++++++++++@>+*****@>+++*****---------@<<@>>>",
    "+++*****++++++++++++++++++@<<<<@>>>>>>+++*****++++@.",
));
program.compile().unwrap();
let mut out = String::new();
program.run(&mut out).unwrap();
assert_eq!(out, "Hello World");
```
*/
