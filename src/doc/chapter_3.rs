/*!
# Embedding

An interpreter instance is a [`Runtime`](crate::mach::Runtime). It owns a
fixed arena for its symbols and value stack, and talks to the outside
world through a [`Host`](crate::mach::Host).

```
use pocket::mach::{Host, Options, Runtime, Stream};

struct Out(String);

impl Host for Out {
    fn print_bytes(&mut self, _stream: Stream, bytes: &[u8]) {
        self.0.push_str(&String::from_utf8_lossy(bytes));
    }
}

let mut runtime = Runtime::new(Options::default(), Box::new(Out(String::new()))).unwrap();
runtime.define_constant("limit", 10).unwrap();
runtime.eval_string("var twice = limit * 2", false, true).unwrap();
assert_eq!(runtime.value("twice"), Some(20));
```

## Natives

A host function takes the runtime and its argument words. Strings passed
to it come out of [`pop_literal`](crate::mach::Runtime::pop_literal),
oldest first.

```
use pocket::lang::Error;
use pocket::mach::{Options, Runtime, StdHost, LITERAL};

fn length(runtime: &mut Runtime, args: &[i64]) -> Result<i64, Error> {
    if args[0] == LITERAL {
        Ok(runtime.pop_literal().map_or(0, |s| s.len() as i64))
    } else {
        Ok(0)
    }
}

let mut runtime = Runtime::new(Options::default(), Box::new(StdHost)).unwrap();
runtime.define_native("length", 1, length).unwrap();
runtime.eval_string("return length(\"four\")", false, true).unwrap();
assert_eq!(runtime.result(), 4);
```

## Definitions and script text

`eval_string(text, duplicate_names, top_level)` decides how long the
definitions of a script live. Top-level definitions stay after the call.
When `duplicate_names` is false, functions keep pointing into the script
text, so the instance keeps a copy of it. When it is true, names and
function bodies are copied into the arena and the text is dropped.
[`eval_file`](crate::mach::Runtime::eval_file) always duplicates.

## Instances

A [`Registry`](crate::mach::Registry) keeps any number of instances and
which one is current. Instances share nothing.

## Errors

Every failure is an [`Error`](crate::lang::Error). The outermost
evaluation also writes it to the error stream. [`Error::code`](crate::lang::Error::code)
gives the negative result code.
*/
