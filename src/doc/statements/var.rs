/*!
# `var <name> = <expression>`

## Purpose
Declares a variable.

## Remarks
The variable exists, with value `0`, before the expression is evaluated.
Declaring a name again shadows the earlier one. Variables declared inside
a block or function vanish when it ends, and the shadowed one is visible
again. Keywords can be shadowed too.

Assignment to an existing variable leaves out the `var`.

## Example
```text
var a = 1
if 1 {var a = 2; print a}
print a
2
1
```
*/
