use super::{token::*, Error, Span};

type Result<T> = std::result::Result<T, Error>;

/// Tokenizes a whole string in normal quoting scope.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(s.as_bytes(), 0, s.len());
    let mut tokens = vec![];
    loop {
        match lexer.next_token(Quoting::Normal)? {
            Token::Eof => return Ok(tokens),
            token => tokens.push(token),
        }
    }
}

/// One-based line of a byte offset.
pub fn line_number(src: &[u8], pos: usize) -> usize {
    let pos = pos.min(src.len());
    src[..pos].iter().filter(|&&b| b == b'\n').count() + 1
}

/// How a double quote is read. Inside a call's argument list a quoted
/// string may span lines and ends only at the next quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    Normal,
    Argument,
}

fn is_pocket_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\r'
}

fn is_pocket_operator(b: u8) -> bool {
    matches!(
        b,
        b'*' | b'/' | b'+' | b'-' | b'&' | b'|' | b'^' | b'<' | b'>' | b'='
    )
}

fn is_pocket_alphabetic(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

fn is_pocket_name(b: u8) -> bool {
    is_pocket_alphabetic(b) || b == b'.' || b == b':' || b == b'_'
}

pub struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a [u8], pos: usize, end: usize) -> Lexer<'a> {
        let end = end.min(src.len());
        Lexer {
            src,
            pos: pos.min(end),
            end,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        let at = self.pos + n;
        if at < self.end {
            Some(self.src[at])
        } else {
            None
        }
    }

    pub fn next_token(&mut self, quoting: Quoting) -> Result<Token> {
        self.blank();
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };
        let single = match ch {
            b'\n' => Some(Token::Newline),
            b';' => Some(Token::Semicolon),
            b',' => Some(Token::Comma),
            b'(' => Some(Token::LParen),
            b')' => Some(Token::RParen),
            _ => None,
        };
        if let Some(token) = single {
            self.pos += 1;
            return Ok(token);
        }
        if ch == b'{' {
            return self.block();
        }
        if ch == b'"' {
            return self.quote(quoting);
        }
        if ch.is_ascii_digit() {
            return Ok(self.number());
        }
        if is_pocket_alphabetic(ch) {
            return Ok(Token::Name(self.run(is_pocket_name)));
        }
        if is_pocket_operator(ch) {
            return Ok(Token::Operator(self.run(is_pocket_operator)));
        }
        Err(error!(SyntaxError; "UNEXPECTED CHARACTER"))
    }

    fn blank(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if is_pocket_whitespace(ch) => self.pos += 1,
                Some(b'\\') => match (self.peek_at(1), self.peek_at(2)) {
                    (Some(b'\n'), _) => self.pos += 2,
                    (Some(b'\r'), Some(b'\n')) => self.pos += 3,
                    _ => return,
                },
                Some(b'#') => {
                    while let Some(ch) = self.peek() {
                        if ch == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => return,
            }
        }
    }

    fn run(&mut self, accept: fn(u8) -> bool) -> Span {
        let start = self.pos;
        self.pos += 1;
        while let Some(ch) = self.peek() {
            if !accept(ch) {
                break;
            }
            self.pos += 1;
        }
        start..self.pos
    }

    fn number(&mut self) -> Token {
        let hex = self.peek() == Some(b'0')
            && matches!(self.peek_at(1), Some(b'x') | Some(b'X'))
            && self.peek_at(2).map_or(false, |ch| ch.is_ascii_hexdigit());
        let radix = if hex {
            self.pos += 2;
            16
        } else {
            10
        };
        let mut n: i64 = 0;
        while let Some(digit) = self.peek().and_then(|ch| (ch as char).to_digit(radix)) {
            n = n.wrapping_mul(radix as i64).wrapping_add(digit as i64);
            self.pos += 1;
        }
        Token::Number(n)
    }

    fn block(&mut self) -> Result<Token> {
        let start = self.pos + 1;
        let mut depth = 0usize;
        while let Some(ch) = self.peek() {
            self.pos += 1;
            match ch {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(Token::Block(start..self.pos - 1));
                    }
                }
                _ => {}
            }
        }
        Err(error!(SyntaxError; "UNTERMINATED BLOCK"))
    }

    fn quote(&mut self, quoting: Quoting) -> Result<Token> {
        self.pos += 1;
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch == b'"' {
                let span = start..self.pos;
                self.pos += 1;
                return Ok(Token::Quote(span));
            }
            if ch == b'\n' && quoting == Quoting::Normal {
                break;
            }
            self.pos += 1;
        }
        Err(error!(SyntaxError; "UNTERMINATED STRING"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number() {
        assert_eq!(line_number(b"a\nb\nc", 0), 1);
        assert_eq!(line_number(b"a\nb\nc", 4), 3);
        assert_eq!(line_number(b"a", 99), 1);
    }

    #[test]
    fn test_bounded_by_end() {
        let src = b"12 34";
        let mut lexer = Lexer::new(src, 0, 2);
        assert_eq!(lexer.next_token(Quoting::Normal), Ok(Token::Number(12)));
        assert_eq!(lexer.next_token(Quoting::Normal), Ok(Token::Eof));
    }

    #[test]
    fn test_argument_quote_spans_lines() {
        let src = b"\"a\nb\"";
        let mut lexer = Lexer::new(src, 0, src.len());
        assert_eq!(lexer.next_token(Quoting::Argument), Ok(Token::Quote(1..4)));
        let mut lexer = Lexer::new(src, 0, src.len());
        assert!(lexer.next_token(Quoting::Normal).is_err());
    }

    #[test]
    fn test_hex_needs_a_digit() {
        assert_eq!(
            lex("0xg").unwrap(),
            vec![Token::Number(0), Token::Name(1..3)]
        );
    }
}
