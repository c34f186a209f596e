use std::io::Write;

/// Output stream handles passed to every [`Host`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// ## I/O callbacks supplied by the embedding host
///
/// Only `print_bytes` is required. The other two fall back to it.
pub trait Host {
    fn print_bytes(&mut self, stream: Stream, bytes: &[u8]);

    fn print_byte(&mut self, stream: Stream, byte: u8) {
        self.print_bytes(stream, &[byte])
    }

    fn print_fmt(&mut self, stream: Stream, args: std::fmt::Arguments<'_>) {
        self.print_bytes(stream, args.to_string().as_bytes())
    }
}

/// Writes to the process stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdHost;

impl Host for StdHost {
    fn print_bytes(&mut self, stream: Stream, bytes: &[u8]) {
        let _ = match stream {
            Stream::Out => std::io::stdout().write_all(bytes),
            Stream::Err => std::io::stderr().write_all(bytes),
        };
    }
}
