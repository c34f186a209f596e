//! # Pocket
//!
//! Runs Pocket scripts given on the command line, or an interactive
//! prompt when there are none.
//!

mod term;

fn main() {
    term::main();
}
