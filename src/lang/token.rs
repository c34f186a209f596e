use super::Span;

/// Raw lexical unit. Names and operator runs are left unresolved;
/// the runtime resolves them against its symbol table.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Eof,
    Newline,
    Semicolon,
    Comma,
    LParen,
    RParen,
    Number(i64),
    Name(Span),
    Operator(Span),
    Block(Span),
    Quote(Span),
}

/// Reserved words, registered as keyword symbols on every instance.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Var,
    If,
    Else,
    While,
    Func,
    Return,
}

impl Word {
    pub const ALL: [Word; 6] = [
        Word::Var,
        Word::If,
        Word::Else,
        Word::While,
        Word::Func,
        Word::Return,
    ];

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Var => "var",
            If => "if",
            Else => "else",
            While => "while",
            Func => "func",
            Return => "return",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    And,
    Or,
    Xor,
    ShiftRight,
    ShiftLeft,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

/// Loosest binding level; level 1 binds tightest.
pub const MAX_PRECEDENCE: u8 = 4;

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::Multiply,
        Operator::Divide,
        Operator::Plus,
        Operator::Minus,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::ShiftRight,
        Operator::ShiftLeft,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
    ];

    pub fn precedence(&self) -> u8 {
        use Operator::*;
        match self {
            Multiply | Divide => 1,
            Plus | Minus => 2,
            And | Or | Xor | ShiftRight | ShiftLeft => 3,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        use Operator::*;
        match self {
            Multiply => "*",
            Divide => "/",
            Plus => "+",
            Minus => "-",
            And => "&",
            Or => "|",
            Xor => "^",
            ShiftRight => ">>",
            ShiftLeft => "<<",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_levels() {
        assert!(Operator::Multiply.precedence() < Operator::Plus.precedence());
        assert!(Operator::Plus.precedence() < Operator::ShiftLeft.precedence());
        assert!(Operator::Xor.precedence() < Operator::LessEqual.precedence());
        assert!(Operator::ALL
            .iter()
            .all(|op| op.precedence() <= MAX_PRECEDENCE));
    }

    #[test]
    fn test_spellings_are_unique() {
        for (i, a) in Operator::ALL.iter().enumerate() {
            for b in &Operator::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
