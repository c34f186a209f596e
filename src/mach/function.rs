use super::{Runtime, Str, Stream, MAX_ARGS};
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// Host-registered function. Receives exactly as many words as its
/// registered arity.
pub type Native = fn(&mut Runtime, &[i64]) -> Result<i64>;

/// Value of a quoted string passed to a call. The text itself waits
/// on the literal stack; see [`Runtime::pop_literal`].
pub const LITERAL: i64 = i64::MIN;

/// User function descriptor, kept in durable arena storage.
#[derive(Debug, Clone, Copy)]
pub struct UserFunc {
    pub params: [Str; MAX_ARGS],
    pub nargs: usize,
    pub body: Str,
}

impl UserFunc {
    pub fn params(&self) -> &[Str] {
        &self.params[..self.nargs]
    }
}

pub(crate) const BUILTINS: [(&str, u8, Native); 6] = [
    ("print", 1, Function::print),
    ("putc", 1, Function::putc),
    ("exists", 1, Function::exists),
    ("source", 1, Function::source),
    ("rand", 1, Function::rand),
    ("time", 0, Function::time),
];

/// ## Builtin natives

pub struct Function {}

impl Function {
    fn arg(args: &[i64], n: usize) -> i64 {
        args.get(n).copied().unwrap_or(0)
    }

    fn literal(runtime: &mut Runtime, value: i64) -> Option<String> {
        if value == LITERAL {
            runtime.pop_literal()
        } else {
            None
        }
    }

    pub fn print(runtime: &mut Runtime, args: &[i64]) -> Result<i64> {
        let value = Function::arg(args, 0);
        let text = match Function::literal(runtime, value) {
            Some(s) => s,
            None => value.to_string(),
        };
        runtime
            .host()
            .print_fmt(Stream::Out, format_args!("{}\n", text));
        Ok(0)
    }

    pub fn putc(runtime: &mut Runtime, args: &[i64]) -> Result<i64> {
        let value = Function::arg(args, 0);
        match Function::literal(runtime, value) {
            Some(s) => runtime.host().print_bytes(Stream::Out, s.as_bytes()),
            None => runtime.host().print_byte(Stream::Out, value as u8),
        }
        Ok(0)
    }

    pub fn exists(runtime: &mut Runtime, args: &[i64]) -> Result<i64> {
        match Function::literal(runtime, Function::arg(args, 0)) {
            Some(path) => Ok(std::path::Path::new(&path).exists() as i64),
            None => Ok(0),
        }
    }

    pub fn source(runtime: &mut Runtime, args: &[i64]) -> Result<i64> {
        match Function::literal(runtime, Function::arg(args, 0)) {
            Some(path) => {
                runtime.eval_file(&path)?;
                Ok(0)
            }
            None => Err(error!(ArgumentMismatch; "EXPECTED STRING")),
        }
    }

    pub fn rand(_runtime: &mut Runtime, args: &[i64]) -> Result<i64> {
        let n = Function::arg(args, 0);
        if n <= 0 {
            return Ok(0);
        }
        Ok(rand::thread_rng().gen_range(0..n))
    }

    pub fn time(_runtime: &mut Runtime, _args: &[i64]) -> Result<i64> {
        Ok(chrono::Utc::now().timestamp())
    }
}
