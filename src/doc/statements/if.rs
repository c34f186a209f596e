/*!
# `if <expression> {...} [else {...}]`

## Purpose
Runs the first block when the expression is not zero, otherwise the
`else` block if there is one.

## Remarks
`else` must follow the closing brace on the same line.

## Example
```text
if 0 {print "a"} else {print "b"}
b
```
*/
