/*!
# `func <name>[(<param>, ...)] {...}`

## Purpose
Defines a function.

## Remarks
A function takes at most three parameters. It must be called with
exactly as many arguments as it has parameters. The value of a call is
the value last given to `return`, or `0`.

## Example
```text
func add(x, y) {return x + y}
print add(2, 3)
5
```
*/
