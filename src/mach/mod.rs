/*!
## Rust Machine Module

This Rust module is the Pocket interpreter. There is no compile step:
statements are parsed and evaluated in one pass over the script text,
with every symbol and stack word charged against a fixed arena.

*/

/// Register file width; the most arguments any call can take.
pub const MAX_ARGS: usize = 3;

mod arena;
mod call;
mod expression;
mod function;
mod host;
mod literal;
mod operation;
mod registry;
mod runtime;
mod statement;

pub use arena::{Arena, Src, Str, Symbol, Tag, FUNC_SIZE, SYMBOL_SIZE, WORD};
pub use function::{Function, Native, UserFunc, LITERAL};
pub use host::{Host, StdHost, Stream};
pub use literal::Literals;
pub use operation::Operation;
pub use registry::Registry;
pub use runtime::{Options, Runtime, DEFAULT_ARENA_SIZE, DEFAULT_MAX_SCRIPT_SIZE};
pub use statement::Flow;
