use super::runtime::{Lexeme, Scope};
use super::{Runtime, Str, Tag, UserFunc, MAX_ARGS};
use crate::error;
use crate::lang::{Error, Operator, Word};

type Result<T> = std::result::Result<T, Error>;

/// How a statement finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Normal,
    /// An `if` whose condition was zero. Only `while` looks at this.
    False,
    /// A `return` ran; the rest of the current body is skipped.
    Return,
}

impl Runtime {
    /// Runs a body with its own cursor. Nested bodies discard the
    /// symbols they define, on error too.
    pub(crate) fn eval_body(&mut self, body: Str, top_level: bool, duplicate: bool) -> Result<Flow> {
        let cursor = self.enter(body);
        let token = self.token;
        let scope = self.scope;
        let outer_duplicate = self.duplicate;
        self.scope = Scope::Normal;
        self.duplicate = duplicate;
        let checkpoint = self.arena.checkpoint();

        let flow = match self.next_token() {
            Ok(()) => self.statements(),
            Err(error) => Err(error),
        };
        let flow = flow.map_err(|error| self.locate(error));

        if !top_level {
            self.arena.rollback(checkpoint);
        }
        self.cursor = cursor;
        self.token = token;
        self.scope = scope;
        self.duplicate = outer_duplicate;
        flow
    }

    fn statements(&mut self) -> Result<Flow> {
        loop {
            match self.token {
                Lexeme::Eof => return Ok(Flow::Normal),
                Lexeme::End => {
                    self.next_token()?;
                    continue;
                }
                _ => {}
            }
            if let Flow::Return = self.statement()? {
                return Ok(Flow::Return);
            }
            self.end_of_statement()?;
        }
    }

    /// A separator, or a token that can only begin the next statement.
    fn end_of_statement(&mut self) -> Result<()> {
        let next_statement = match self.token {
            Lexeme::Eof | Lexeme::Name(_) => true,
            Lexeme::End => return self.next_token(),
            Lexeme::Symbol(index) => match self.symbol(index)?.tag {
                Tag::Var | Tag::Native { .. } | Tag::Func { .. } => true,
                Tag::Word(word) => word != Word::Else,
                Tag::Operator(_) => false,
            },
            _ => false,
        };
        if next_statement {
            Ok(())
        } else {
            Err(error!(SyntaxError; "EXPECTED END OF STATEMENT"))
        }
    }

    fn statement(&mut self) -> Result<Flow> {
        let index = match self.token {
            Lexeme::Symbol(index) => index,
            Lexeme::Name(_) => return Err(error!(UnknownSymbol)),
            _ => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        let symbol = self.symbol(index)?;
        match symbol.tag {
            Tag::Var => self.assignment(index)?,
            Tag::Native { .. } => self.command(symbol)?,
            Tag::Func { .. } => {
                self.call(symbol)?;
            }
            Tag::Word(Word::Var) => self.var_statement()?,
            Tag::Word(Word::If) => {
                self.if_statement()?;
            }
            Tag::Word(Word::While) => {
                self.while_statement()?;
            }
            Tag::Word(Word::Func) => self.func_statement()?,
            Tag::Word(Word::Return) => return self.return_statement(),
            Tag::Word(Word::Else) => return Err(error!(SyntaxError; "UNEXPECTED ELSE")),
            Tag::Operator(_) => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
        Ok(Flow::Normal)
    }

    fn var_statement(&mut self) -> Result<()> {
        self.next_raw_token()?;
        let name = match self.token {
            Lexeme::Name(name) => self.durable(name)?,
            _ => return Err(error!(SyntaxError; "EXPECTED NAME")),
        };
        let index = self.arena.alloc_symbol(name, Tag::Var, 0)?;
        self.next_token()?;
        self.assign(index)
    }

    fn assignment(&mut self, index: usize) -> Result<()> {
        self.next_token()?;
        self.assign(index)
    }

    /// Current token must be `=`.
    fn assign(&mut self, index: usize) -> Result<()> {
        let is_equal = match self.token {
            Lexeme::Symbol(op) => matches!(self.symbol(op)?.tag, Tag::Operator(Operator::Equal)),
            _ => false,
        };
        if !is_equal {
            return Err(error!(SyntaxError; "EXPECTED ="));
        }
        self.next_token()?;
        let value = self.expression()?;
        if let Some(symbol) = self.arena.symbol_mut(index) {
            symbol.value = value;
        }
        Ok(())
    }

    /// Both bodies are read before either runs. A `return` inside a
    /// body ends only that body.
    fn if_statement(&mut self) -> Result<Flow> {
        self.next_token()?;
        let condition = self.expression()?;
        let then = self.body()?;
        let otherwise = if self.is_word(Word::Else)? {
            self.next_token()?;
            Some(self.body()?)
        } else {
            None
        };
        if condition != 0 {
            self.eval_body(then, false, false)?;
            return Ok(Flow::Normal);
        }
        if let Some(body) = otherwise {
            self.eval_body(body, false, false)?;
        }
        Ok(Flow::False)
    }

    fn while_statement(&mut self) -> Result<Flow> {
        let start = self.cursor;
        while self.if_statement()? != Flow::False {
            self.cursor = start;
        }
        Ok(Flow::Normal)
    }

    fn func_statement(&mut self) -> Result<()> {
        self.next_raw_token()?;
        let name = match self.token {
            Lexeme::Name(name) => self.durable(name)?,
            _ => return Err(error!(SyntaxError; "EXPECTED NAME")),
        };
        let mut params = [Str::EMPTY; MAX_ARGS];
        let mut nargs = 0;
        self.next_raw_token()?;
        if self.token == Lexeme::LParen {
            self.next_raw_token()?;
            while self.token != Lexeme::RParen {
                let param = match self.token {
                    Lexeme::Name(param) => param,
                    _ => return Err(error!(SyntaxError; "EXPECTED NAME")),
                };
                if nargs == MAX_ARGS {
                    return Err(error!(TooManyArguments));
                }
                params[nargs] = self.durable(param)?;
                nargs += 1;
                self.next_raw_token()?;
                match self.token {
                    Lexeme::Comma => self.next_raw_token()?,
                    Lexeme::RParen => {}
                    _ => return Err(error!(SyntaxError; "EXPECTED )")),
                }
            }
            self.next_raw_token()?;
        }
        let body = match self.token {
            Lexeme::Text(body) => self.durable(body)?,
            _ => return Err(error!(SyntaxError; "EXPECTED BODY")),
        };
        let func = self.arena.alloc_func(UserFunc { params, nargs, body })?;
        self.arena.alloc_symbol(
            name,
            Tag::Func {
                nargs: nargs as u8,
            },
            func as i64,
        )?;
        self.next_token()
    }

    fn return_statement(&mut self) -> Result<Flow> {
        self.next_token()?;
        self.result = if self.starts_expression()? {
            self.expression()?
        } else {
            0
        };
        Ok(Flow::Return)
    }

    /// Takes a `{...}` or quoted string.
    fn body(&mut self) -> Result<Str> {
        match self.token {
            Lexeme::Text(body) => {
                self.next_token()?;
                Ok(body)
            }
            _ => Err(error!(SyntaxError; "EXPECTED BODY")),
        }
    }

    fn is_word(&self, word: Word) -> Result<bool> {
        match self.token {
            Lexeme::Symbol(index) => Ok(match self.symbol(index)?.tag {
                Tag::Word(w) => w == word,
                _ => false,
            }),
            _ => Ok(false),
        }
    }
}
