//! # Pocket
//!
//! A tiny embeddable scripting language. Scripts are parsed and evaluated
//! in a single pass, and every instance works inside one fixed-size arena.
//!
//! Run `pocket script.pk` to evaluate files, or `pocket` alone for an
//! interactive prompt.
//! ```text
//! pocket1> func add(x, y) {return x + y}
//! pocket1> print add(2, 3)
//! 5
//! ```
//!
//! Hosts embed the interpreter through [`mach::Runtime`] and supply output
//! through [`mach::Host`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
