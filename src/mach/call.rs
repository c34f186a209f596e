use super::runtime::{Lexeme, Scope};
use super::{Native, Runtime, Symbol, Tag};
use crate::error;
use crate::lang::Error;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    /// `name(args)` anywhere an expression may appear. The current token
    /// is the callee.
    pub(crate) fn call(&mut self, symbol: Symbol) -> Result<i64> {
        let mark = self.literals.len();
        let depth = self.arena.depth();
        let scope = self.scope;
        self.scope = Scope::Arguments;
        let count = self.paren_call();
        self.scope = scope;
        let count = match count {
            Ok(count) => count,
            Err(error) => {
                self.arena.unwind(depth);
                self.literals.truncate(mark);
                return Err(error);
            }
        };
        let value = self.dispatch(symbol, count, mark)?;
        self.next_token()?;
        Ok(value)
    }

    /// A native at statement level, with or without parentheses.
    pub(crate) fn command(&mut self, symbol: Symbol) -> Result<()> {
        let mark = self.literals.len();
        let depth = self.arena.depth();
        let scope = self.scope;
        self.scope = Scope::Arguments;
        let arguments = self.command_arguments();
        self.scope = scope;
        let (count, parenthesized) = match arguments {
            Ok(arguments) => arguments,
            Err(error) => {
                self.arena.unwind(depth);
                self.literals.truncate(mark);
                return Err(error);
            }
        };
        self.dispatch(symbol, count, mark)?;
        if parenthesized {
            self.next_token()?;
        }
        Ok(())
    }

    fn paren_call(&mut self) -> Result<usize> {
        self.next_token()?;
        match self.token {
            Lexeme::LParen => self.paren_arguments(),
            _ => Err(error!(SyntaxError; "EXPECTED (")),
        }
    }

    fn command_arguments(&mut self) -> Result<(usize, bool)> {
        self.next_token()?;
        if self.token == Lexeme::LParen {
            return Ok((self.paren_arguments()?, true));
        }
        let mut count = 0;
        if self.starts_expression()? {
            loop {
                let value = self.expression()?;
                self.arena.push(value)?;
                count += 1;
                if self.token != Lexeme::Comma {
                    break;
                }
                self.next_token()?;
            }
        }
        Ok((count, false))
    }

    /// Pushes each argument on the value stack. Leaves `)` as the
    /// current token.
    fn paren_arguments(&mut self) -> Result<usize> {
        self.next_token()?;
        if self.token == Lexeme::RParen {
            return Ok(0);
        }
        let mut count = 0;
        loop {
            let value = self.expression()?;
            self.arena.push(value)?;
            count += 1;
            match self.token {
                Lexeme::Comma => self.next_token()?,
                Lexeme::RParen => return Ok(count),
                _ => return Err(error!(SyntaxError; "EXPECTED )")),
            }
        }
    }

    fn dispatch(&mut self, symbol: Symbol, count: usize, mark: usize) -> Result<i64> {
        let arity = symbol.tag.arity().unwrap_or(0);
        if count != arity {
            for _ in 0..count {
                self.arena.pop();
            }
            self.literals.truncate(mark);
            return Err(error!(ArgumentMismatch));
        }
        for n in (0..count).rev() {
            self.registers[n] = self.arena.pop();
        }
        let registers = self.registers;
        let args = &registers[..count];
        trace!(name = %String::from_utf8_lossy(self.bytes(symbol.name)), ?args, "call");
        let value = match symbol.tag {
            Tag::Native { func, .. } => self.call_native(func, args, mark),
            Tag::Func { .. } => self.call_user(symbol.value as usize, args),
            _ => Err(error!(SyntaxError; "EXPECTED FUNCTION")),
        };
        self.literals.truncate(mark);
        value
    }

    fn call_native(&mut self, func: Native, args: &[i64], mark: usize) -> Result<i64> {
        let outer = self.literals.open(mark);
        let value = func(self, args);
        self.literals.close(outer);
        value
    }

    fn call_user(&mut self, index: usize, args: &[i64]) -> Result<i64> {
        let func = match self.arena.func(index) {
            Some(func) => *func,
            None => return Err(error!(UnknownSymbol)),
        };
        let checkpoint = self.arena.checkpoint();
        let caller_result = self.result;
        let mut flow = Ok(());
        for (name, value) in func.params().iter().zip(args) {
            if let Err(error) = self.arena.alloc_symbol(*name, Tag::Var, *value) {
                flow = Err(error);
                break;
            }
        }
        self.result = 0;
        let flow = flow.and_then(|_| self.eval_body(func.body, false, false));
        let value = self.result;
        self.arena.rollback(checkpoint);
        self.result = caller_result;
        flow.map(|_| value)
    }
}
