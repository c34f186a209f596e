mod common;
use common::*;
use pocket::lang::ErrorCode;
use pocket::mach::{Options, Runtime, StdHost, SYMBOL_SIZE, WORD};
use pretty_assertions::assert_eq;

fn name(mut n: usize) -> String {
    let mut s = String::from("v");
    loop {
        s.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            return s;
        }
    }
}

fn small() -> Options {
    Options {
        arena_size: 2048,
        ..Options::default()
    }
}

#[test]
fn test_many_vars_run_out_of_memory() {
    let (mut r, capture) = runtime_with(small());
    let script: String = (0..100).map(|n| format!("var {} = {}\n", name(n), n)).collect();
    let error = r.eval_string(&script, false, true).unwrap_err();
    assert_eq!(error.kind(), ErrorCode::OutOfMemory);
    assert!(capture.err().starts_with("OUT OF MEMORY IN LINE"));
    assert!(r.arena().free() < SYMBOL_SIZE);
    assert!(r.arena().symptr() <= r.arena().valptr());
}

#[test]
fn test_definitions_before_failure_remain() {
    let (mut r, _) = runtime_with(small());
    let script: String = (0..100).map(|n| format!("var {} = {}\n", name(n), n)).collect();
    assert!(r.eval_string(&script, false, true).is_err());
    assert_eq!(r.value(&name(0)), Some(0));
    assert_eq!(r.value(&name(99)), None);
}

#[test]
fn test_tiny_arena_cannot_start() {
    let options = Options {
        arena_size: 64,
        ..Options::default()
    };
    let error = Runtime::new(options, Box::new(StdHost)).err();
    assert_eq!(error.map(|e| e.kind()), Some(ErrorCode::OutOfMemory));
}

#[test]
fn test_duplicated_names_use_durable_space() {
    let (mut r, _) = runtime();
    let before = r.arena().valptr();
    r.eval_string("var abc = 1", false, true).unwrap();
    assert_eq!(r.arena().valptr(), before);
    r.eval_string("var xyz = 2", true, true).unwrap();
    assert_eq!(r.arena().valptr(), before - WORD);
    assert_eq!(r.value("xyz"), Some(2));
}

#[test]
fn test_duplicated_function_outlives_text() {
    let (mut r, capture) = runtime();
    r.eval_string("func inc(x) {return x+1}", true, true).unwrap();
    r.eval_string("print inc(inc(1))", false, true).unwrap();
    assert_eq!(capture.out(), "3\n");
}

#[test]
fn test_nested_calls_release_symbols() {
    let (mut r, _) = runtime();
    r.eval_string("func f(a) {var b = a return b}", false, true).unwrap();
    let symptr = r.arena().symptr();
    r.eval_string("var i = 0 while i < 50 {i = i + f(1)}", false, true).unwrap();
    assert_eq!(r.arena().symptr(), symptr + SYMBOL_SIZE);
    assert_eq!(r.arena().depth(), 0);
    assert_eq!(r.value("i"), Some(50));
}
