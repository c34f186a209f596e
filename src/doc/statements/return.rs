/*!
# `return [<expression>]`

## Purpose
Sets the value of the running function and ends the current block.

## Remarks
Without an expression the value is `0`. A `return` inside an `if` or
`while` block ends only that block. The function carries on after it and
gives the value last set. At the top level of a script the rest of the
script is skipped and the value is kept as the instance's result.

## Example
```text
func sign(x) {
  if x < 0 {return -1}
  if x > 0 {return 1}
}
print sign(-7)
-1
func f() {
  if 1 {return 1}
  return 2
}
print f()
2
```
*/
