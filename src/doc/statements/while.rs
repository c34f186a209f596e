/*!
# `while <expression> {...} [else {...}]`

## Purpose
Repeats the block while the expression is not zero.

## Remarks
The expression is evaluated again before every pass. When it is zero the
`else` block, if any, runs once and the loop ends. A `return` inside the
block ends that pass only; the expression is checked again as usual.

## Example
```text
var i = 0
while i < 3 {print i; i = i + 1}
0
1
2
```
*/
