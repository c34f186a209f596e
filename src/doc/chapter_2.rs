/*!
# Statements

Statements end at a newline or `;`. A statement may also be followed
directly by another one on the same line, so `var a=5 a=a+1 print a`
is three statements.

Calling a function as a statement discards its value. Builtin functions
used as statements may leave out the parentheses: `print a, b` calls
`print` with two arguments.

## Builtin functions

| Call | Result |
|------|--------|
| `print(x)` | Writes a string, or `x` in decimal, and a newline. |
| `putc(x)` | Writes the byte `x`, or a string without a newline. |
| `exists(path)` | `1` when the file exists. |
| `source(path)` | Evaluates a script file at top level. |
| `rand(n)` | A random value in `0..n`, or `0` when `n <= 0`. |
| `time()` | Seconds since the Unix epoch. |
*/

#[path = "statements/var.rs"]
#[allow(non_snake_case)]
pub mod VAR;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;

#[path = "statements/func.rs"]
#[allow(non_snake_case)]
pub mod FUNC;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;
