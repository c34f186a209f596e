use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: &'static str,
    context: Option<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

/// Longest context snippet carried by an error.
const MAX_CONTEXT: usize = 40;

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "",
            context: None,
        }
    }

    pub fn kind(&self) -> ErrorCode {
        self.code
    }

    /// Negative result code handed back to embedding hosts.
    pub fn code(&self) -> i32 {
        self.code as i32
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }

    /// Attaches the first line of the unparsed remainder, clipped.
    pub fn in_context(self, rest: &str) -> Error {
        let line = rest.trim_start().lines().next().unwrap_or("").trim_end();
        let context = if line.chars().count() > MAX_CONTEXT {
            let mut s: String = line.chars().take(MAX_CONTEXT).collect();
            s.push_str("...");
            s
        } else {
            line.to_string()
        };
        Error {
            context: Some(context),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    OutOfMemory = -1,
    SyntaxError = -2,
    UnknownSymbol = -3,
    ArgumentMismatch = -4,
    TooManyArguments = -5,
    FileNotFound = -6,
    ScriptTooLarge = -7,
    DivisionByZero = -8,
    NoSuchInstance = -9,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            OutOfMemory => "OUT OF MEMORY",
            SyntaxError => "SYNTAX ERROR",
            UnknownSymbol => "UNKNOWN SYMBOL",
            ArgumentMismatch => "ARGUMENT MISMATCH",
            TooManyArguments => "TOO MANY ARGUMENTS",
            FileNotFound => "FILE NOT FOUND",
            ScriptTooLarge => "SCRIPT TOO LARGE",
            DivisionByZero => "DIVISION BY ZERO",
            NoSuchInstance => "NO SUCH INSTANCE",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN LINE {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        if let Some(context) = &self.context {
            if !context.is_empty() {
                write!(f, " AT \"{}\"", context)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
