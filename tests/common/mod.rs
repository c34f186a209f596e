#![allow(dead_code)]
use pocket::lang::{Error, ErrorCode};
use pocket::mach::{Host, Options, Runtime, Stream};
use std::cell::RefCell;
use std::rc::Rc;

/// Host that keeps everything written to it.
#[derive(Clone, Default)]
pub struct Capture {
    pub out: Rc<RefCell<String>>,
    pub err: Rc<RefCell<String>>,
}

impl Capture {
    pub fn out(&self) -> String {
        self.out.borrow().clone()
    }

    pub fn err(&self) -> String {
        self.err.borrow().clone()
    }
}

impl Host for Capture {
    fn print_bytes(&mut self, stream: Stream, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        match stream {
            Stream::Out => self.out.borrow_mut().push_str(&text),
            Stream::Err => self.err.borrow_mut().push_str(&text),
        }
    }
}

pub fn runtime_with(options: Options) -> (Runtime, Capture) {
    let capture = Capture::default();
    let runtime = Runtime::new(options, Box::new(capture.clone())).unwrap();
    (runtime, capture)
}

pub fn runtime() -> (Runtime, Capture) {
    runtime_with(Options::default())
}

/// Output of a script on a fresh instance, followed by any error report.
pub fn exec(script: &str) -> String {
    let (mut r, capture) = runtime();
    let _ = r.eval_string(script, false, true);
    capture.out() + &capture.err()
}

pub fn exec_err(script: &str) -> Error {
    let (mut r, _) = runtime();
    r.eval_string(script, false, true).unwrap_err()
}

pub fn error_kind(script: &str) -> ErrorCode {
    exec_err(script).kind()
}
