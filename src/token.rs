use crate::symbols::MathFunction;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start..span.end).into()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Which of the two free variables a token or tree node refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Variable {
    X,
    Y,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Caret,

    // Grouping
    OpenParen,
    CloseParen,

    // Operands
    Number(f64),
    Variable(Variable),
    Function(MathFunction),
}

/// Binding power used for the operand of a unary prefix operator and for the
/// argument of a function application. `sin 4+5` parses as `sin(4)+5`, and
/// `-2^2` as `-(2^2)`.
pub const PREFIX_BINDING_POWER: u8 = 70;

// Precedence and associativity live on the token itself; the parser's
// expression loop is entirely driven by these three methods.
impl TokenKind {
    /// How eagerly this token binds to an already-parsed left operand. 0 for
    /// tokens with no infix role, which stops the parser's infix loop.
    pub fn left_binding_power(&self) -> u8 {
        match self {
            TokenKind::Plus | TokenKind::Minus => 50,
            TokenKind::Star | TokenKind::Slash => 60,
            TokenKind::Caret => 75,
            TokenKind::OpenParen => 80,
            TokenKind::CloseParen
            | TokenKind::Number(_)
            | TokenKind::Variable(_)
            | TokenKind::Function(_) => 0,
        }
    }

    /// Right-associative operators re-enter the expression loop at one less
    /// than their own binding power, so equal-precedence chains nest
    /// rightward: `2^3^2` is `2^(3^2)`.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, TokenKind::Caret)
    }

    /// Whether the same symbol also acts as a unary prefix operator.
    pub fn supports_prefix(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }
}
