use super::runtime::{Lexeme, Scope};
use super::{Operation, Runtime, Tag, LITERAL};
use crate::error;
use crate::lang::{Error, Operator, MAX_PRECEDENCE};

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    pub(crate) fn expression(&mut self) -> Result<i64> {
        self.binary(MAX_PRECEDENCE)
    }

    /// Left-associative precedence climbing. Level 0 is a primary.
    fn binary(&mut self, level: u8) -> Result<i64> {
        if level == 0 {
            return self.primary();
        }
        let mut lhs = self.binary(level - 1)?;
        while let Some(op) = self.operator_at(level)? {
            self.next_token()?;
            let rhs = self.binary(level - 1)?;
            lhs = Operation::apply(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn operator_at(&self, level: u8) -> Result<Option<Operator>> {
        match self.token {
            Lexeme::Symbol(index) => Ok(match self.symbol(index)?.tag {
                Tag::Operator(op) if op.precedence() == level => Some(op),
                _ => None,
            }),
            _ => Ok(None),
        }
    }

    fn primary(&mut self) -> Result<i64> {
        match self.token {
            Lexeme::Number(n) => {
                self.next_token()?;
                Ok(n)
            }
            Lexeme::LParen => {
                let scope = self.scope;
                self.scope = Scope::Normal;
                let value = self.parenthesized();
                self.scope = scope;
                let value = value?;
                self.next_token()?;
                Ok(value)
            }
            Lexeme::Text(_) => {
                self.next_token()?;
                Ok(0)
            }
            Lexeme::Literal => {
                self.next_token()?;
                Ok(LITERAL)
            }
            Lexeme::Name(_) => Err(error!(UnknownSymbol)),
            Lexeme::Symbol(index) => {
                let symbol = self.symbol(index)?;
                match symbol.tag {
                    Tag::Var => {
                        self.next_token()?;
                        Ok(symbol.value)
                    }
                    Tag::Native { .. } | Tag::Func { .. } => self.call(symbol),
                    Tag::Operator(op) => {
                        self.next_token()?;
                        let rhs = self.expression()?;
                        Operation::apply(op, 0, rhs)
                    }
                    Tag::Word(_) => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
                }
            }
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn parenthesized(&mut self) -> Result<i64> {
        self.next_token()?;
        let value = self.expression()?;
        match self.token {
            Lexeme::RParen => Ok(value),
            _ => Err(error!(SyntaxError; "EXPECTED )")),
        }
    }

    /// Whether the current token can begin an expression.
    pub(crate) fn starts_expression(&self) -> Result<bool> {
        Ok(match self.token {
            Lexeme::Number(_)
            | Lexeme::LParen
            | Lexeme::Text(_)
            | Lexeme::Literal
            | Lexeme::Name(_) => true,
            Lexeme::Symbol(index) => !matches!(self.symbol(index)?.tag, Tag::Word(_)),
            Lexeme::Eof | Lexeme::End | Lexeme::Comma | Lexeme::RParen => false,
        })
    }
}
