/*!
# Expressions

Every value is a 64-bit signed integer. Arithmetic wraps on overflow.

Numbers are decimal (`031` is thirty-one, there is no octal) or
hexadecimal with a `0x` prefix (`0x1F`). A `0x` without a hex digit after
it is the number `0` followed by the name `x`.

Names start with a letter and continue with letters or `.`, `:` and `_`.
Digits are not part of names.

## Operators

Lower levels bind tighter. Every level is left associative.

| Level | Operators |
|-------|-----------|
| 1 | `*` `/` |
| 2 | `+` `-` |
| 3 | `&` `\|` `^` `>>` `<<` |
| 4 | `=` `<>` `<` `<=` `>` `>=` |

Comparisons give `1` or `0`. Division by zero is an error. Shift counts
are taken modulo 64. Both operands are always evaluated.

An operator written in front of a value applies to zero and the whole
expression after it, so `-1+2` is `0-(1+2)`, which is `-3`. Operator characters run together: `a=-1` is read as
`a`, the unknown operator `=-`, and `1`. Write `a = -1` instead.

```text
print 2+3*4       # 14
print ((2+3)*4)   # 20
print 1 < 2 = 1   # 1
print 0x10 >> 2   # 4
```

## Strings

A quoted string or a `{...}` block inside an expression has the value `0`.
In the argument list of a call, a quoted string may span lines and its
text is handed to the function being called. `print` and `putc` write it.

## Comments

`#` starts a comment that runs to the end of the line. A `\` right before
a newline joins the two lines.
*/
