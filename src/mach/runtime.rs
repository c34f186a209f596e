use super::function::BUILTINS;
use super::{Arena, Host, Literals, Native, Src, Str, Stream, Symbol, Tag, MAX_ARGS};
use crate::error;
use crate::lang::{line_number, Error, Lexer, Operator, Quoting, Token, Word};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

pub const DEFAULT_ARENA_SIZE: usize = 64 * 1024;
pub const DEFAULT_MAX_SCRIPT_SIZE: usize = 64 * 1024;

/// Host configuration for one interpreter instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub arena_size: usize,
    pub max_script_size: usize,
    pub name: Option<String>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            arena_size: DEFAULT_ARENA_SIZE,
            max_script_size: DEFAULT_MAX_SCRIPT_SIZE,
            name: None,
        }
    }
}

/// Lexer state for the body being parsed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    pub src: Src,
    pub pos: usize,
    pub end: usize,
    /// Where the current token's lexing started.
    pub mark: usize,
}

impl Cursor {
    fn new(body: Str) -> Cursor {
        Cursor {
            src: body.src,
            pos: body.at,
            end: body.end(),
            mark: body.at,
        }
    }
}

/// Token after symbol resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Lexeme {
    Eof,
    End,
    Comma,
    LParen,
    RParen,
    Number(i64),
    Name(Str),
    Symbol(usize),
    Text(Str),
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Normal,
    Arguments,
}

fn text_bytes(texts: &[Option<String>], id: usize) -> &[u8] {
    match texts.get(id) {
        Some(Some(text)) => text.as_bytes(),
        _ => &[],
    }
}

fn src_bytes<'a>(texts: &'a [Option<String>], arena: &'a Arena, src: Src) -> &'a [u8] {
    match src {
        Src::Static(s) => s.as_bytes(),
        Src::Arena => arena.durable(),
        Src::Text(id) => text_bytes(texts, id),
    }
}

fn str_bytes<'a>(texts: &'a [Option<String>], arena: &'a Arena, s: Str) -> &'a [u8] {
    src_bytes(texts, arena, s.src)
        .get(s.at..s.end())
        .unwrap_or(&[])
}

/// ## Interpreter instance
///
/// Parses and evaluates in one pass. Every piece of working state
/// lives in the arena except the script texts under evaluation and
/// the literal side stack.
pub struct Runtime {
    name: String,
    options: Options,
    pub(crate) arena: Arena,
    texts: Vec<Option<String>>,
    pub(crate) cursor: Cursor,
    pub(crate) token: Lexeme,
    pub(crate) scope: Scope,
    pub(crate) duplicate: bool,
    pub(crate) result: i64,
    pub(crate) registers: [i64; MAX_ARGS],
    pub(crate) literals: Literals,
    host: Box<dyn Host>,
    depth: usize,
}

impl Runtime {
    pub fn new(options: Options, host: Box<dyn Host>) -> Result<Runtime> {
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| "pocket".to_string());
        let mut runtime = Runtime {
            name,
            arena: Arena::new(options.arena_size),
            options,
            texts: vec![],
            cursor: Cursor::new(Str::from_static("")),
            token: Lexeme::Eof,
            scope: Scope::Normal,
            duplicate: true,
            result: 0,
            registers: [0; MAX_ARGS],
            literals: Literals::default(),
            host,
            depth: 0,
        };
        runtime.install()?;
        debug!(
            instance = %runtime.name,
            arena = runtime.options.arena_size,
            free = runtime.arena.free(),
            "instance created"
        );
        Ok(runtime)
    }

    fn install(&mut self) -> Result<()> {
        for op in Operator::ALL.iter() {
            self.arena
                .alloc_symbol(Str::from_static(op.as_str()), Tag::Operator(*op), 0)?;
        }
        for word in Word::ALL.iter() {
            self.arena
                .alloc_symbol(Str::from_static(word.as_str()), Tag::Word(*word), 0)?;
        }
        for (name, arity, func) in BUILTINS.iter() {
            let tag = Tag::Native {
                func: *func,
                arity: *arity,
            };
            self.arena.alloc_symbol(Str::from_static(name), tag, 0)?;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Value of the last `return` executed at this level.
    pub fn result(&self) -> i64 {
        self.result
    }

    pub fn host(&mut self) -> &mut dyn Host {
        self.host.as_mut()
    }

    /// Defines a symbol visible to every script evaluated afterwards.
    /// The name is copied into the arena.
    pub fn define(&mut self, name: &str, tag: Tag, value: i64) -> Result<usize> {
        if tag.arity().map_or(false, |arity| arity > MAX_ARGS) {
            return Err(error!(TooManyArguments));
        }
        let name = self.arena.alloc_bytes(name.as_bytes())?;
        self.arena.alloc_symbol(name, tag, value)
    }

    pub fn define_native(&mut self, name: &str, arity: usize, func: Native) -> Result<usize> {
        if arity > MAX_ARGS {
            return Err(error!(TooManyArguments));
        }
        let tag = Tag::Native {
            func,
            arity: arity as u8,
        };
        self.define(name, tag, 0)
    }

    pub fn define_constant(&mut self, name: &str, value: i64) -> Result<usize> {
        self.define(name, Tag::Var, value)
    }

    /// Oldest string literal not yet taken by the running native call.
    pub fn pop_literal(&mut self) -> Option<String> {
        self.literals.pop_oldest()
    }

    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.lookup_bytes(name.as_bytes())
            .and_then(|index| self.arena.symbol(index).copied())
    }

    /// Current value of a variable or constant.
    pub fn value(&self, name: &str) -> Option<i64> {
        match self.lookup(name) {
            Some(Symbol {
                tag: Tag::Var,
                value,
                ..
            }) => Some(value),
            _ => None,
        }
    }

    pub fn bytes(&self, s: Str) -> &[u8] {
        str_bytes(&self.texts, &self.arena, s)
    }

    fn lookup_bytes(&self, name: &[u8]) -> Option<usize> {
        self.arena
            .symbols()
            .iter()
            .rposition(|symbol| self.bytes(symbol.name) == name)
    }

    pub(crate) fn symbol(&self, index: usize) -> Result<Symbol> {
        self.arena
            .symbol(index)
            .copied()
            .ok_or_else(|| error!(UnknownSymbol))
    }

    /// Evaluates `text`. Top-level definitions outlive the call;
    /// `duplicate_names` copies names and bodies into the arena so the
    /// text can be released afterwards.
    pub fn eval_string(&mut self, text: &str, duplicate_names: bool, top_level: bool) -> Result<()> {
        trace!(instance = %self.name, len = text.len(), top_level, "eval");
        let id = self.retain_text(text);
        self.depth += 1;
        let flow = self.eval_body(Str::text(id, text.len()), top_level, duplicate_names);
        self.depth -= 1;
        if duplicate_names || !top_level {
            self.release_text(id);
        }
        match flow {
            Ok(_) => Ok(()),
            Err(error) => Err(self.report(error)),
        }
    }

    pub fn eval_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        match self.read_script(path.as_ref()) {
            Ok(text) => self.eval_string(&text, true, true),
            Err(error) => Err(self.report(error)),
        }
    }

    fn read_script(&self, path: &Path) -> Result<String> {
        let name = path.display().to_string();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return Err(error!(FileNotFound).in_context(&name)),
        };
        let limit = self.options.max_script_size;
        let mut bytes = Vec::new();
        if file.take(limit as u64 + 1).read_to_end(&mut bytes).is_err() {
            return Err(error!(FileNotFound; "UNREADABLE").in_context(&name));
        }
        if bytes.len() > limit {
            return Err(error!(ScriptTooLarge).in_context(&name));
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn report(&mut self, error: Error) -> Error {
        if self.depth == 0 {
            debug!(instance = %self.name, code = error.code(), "{}", error);
            self.host
                .print_fmt(Stream::Err, format_args!("{}\n", error));
        }
        error
    }

    fn retain_text(&mut self, text: &str) -> usize {
        match self.texts.iter().position(Option::is_none) {
            Some(id) => {
                self.texts[id] = Some(text.to_string());
                id
            }
            None => {
                self.texts.push(Some(text.to_string()));
                self.texts.len() - 1
            }
        }
    }

    fn release_text(&mut self, id: usize) {
        if let Some(slot) = self.texts.get_mut(id) {
            *slot = None;
        }
        while let Some(None) = self.texts.last() {
            self.texts.pop();
        }
    }

    /// Copies a name or body out of the script text when this
    /// evaluation duplicates names.
    pub(crate) fn durable(&mut self, s: Str) -> Result<Str> {
        match s.src {
            Src::Text(id) if self.duplicate => {
                let bytes = text_bytes(&self.texts, id)
                    .get(s.at..s.end())
                    .unwrap_or(&[]);
                self.arena.alloc_bytes(bytes)
            }
            _ => Ok(s),
        }
    }

    pub(crate) fn next_token(&mut self) -> Result<()> {
        self.lex(false)
    }

    /// Leaves names unresolved; used where a name is being defined.
    pub(crate) fn next_raw_token(&mut self) -> Result<()> {
        self.lex(true)
    }

    fn lex(&mut self, raw: bool) -> Result<()> {
        let quoting = match self.scope {
            Scope::Arguments => Quoting::Argument,
            Scope::Normal => Quoting::Normal,
        };
        let src = self.cursor.src;
        self.cursor.mark = self.cursor.pos;
        let (token, pos) = {
            let bytes = src_bytes(&self.texts, &self.arena, src);
            let mut lexer = Lexer::new(bytes, self.cursor.pos, self.cursor.end);
            let token = lexer.next_token(quoting)?;
            (token, lexer.pos())
        };
        self.cursor.pos = pos;
        self.token = match token {
            Token::Eof => Lexeme::Eof,
            Token::Newline | Token::Semicolon => Lexeme::End,
            Token::Comma => Lexeme::Comma,
            Token::LParen => Lexeme::LParen,
            Token::RParen => Lexeme::RParen,
            Token::Number(n) => Lexeme::Number(n),
            Token::Name(span) => {
                let name = Str::new(src, span);
                match self.lookup_bytes(self.bytes(name)) {
                    Some(index) if !raw => Lexeme::Symbol(index),
                    _ => Lexeme::Name(name),
                }
            }
            Token::Operator(span) => match self.lookup_bytes(self.bytes(Str::new(src, span))) {
                Some(index) => Lexeme::Symbol(index),
                None => return Err(error!(SyntaxError; "UNKNOWN OPERATOR")),
            },
            Token::Block(span) => Lexeme::Text(Str::new(src, span)),
            Token::Quote(span) => {
                let text = Str::new(src, span);
                if quoting == Quoting::Argument {
                    let s = String::from_utf8_lossy(self.bytes(text)).into_owned();
                    self.literals.push(s);
                    Lexeme::Literal
                } else {
                    Lexeme::Text(text)
                }
            }
        };
        Ok(())
    }

    /// Attaches the unparsed remainder, and the line when parsing a
    /// script text, to an error that has no context yet.
    pub(crate) fn locate(&self, error: Error) -> Error {
        if error.has_context() {
            return error;
        }
        let bytes = src_bytes(&self.texts, &self.arena, self.cursor.src);
        let start = self.cursor.mark.min(self.cursor.end);
        let rest = bytes.get(start..self.cursor.end).unwrap_or(&[]);
        let error = error.in_context(&String::from_utf8_lossy(rest));
        match self.cursor.src {
            Src::Text(_) if error.line_number().is_none() => {
                error.in_line_number(Some(line_number(bytes, start)))
            }
            _ => error,
        }
    }

    pub(crate) fn enter(&mut self, body: Str) -> Cursor {
        std::mem::replace(&mut self.cursor, Cursor::new(body))
    }
}
