use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{Error, SyntaxError};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind, PREFIX_BINDING_POWER};

/// Top-down operator precedence parser. All precedence and associativity is
/// encoded in the tokens themselves (`TokenKind::left_binding_power` and
/// friends); the grammar here is a single expression loop.
pub struct Parser<'source> {
    source: &'source str,
    lexer: Lexer<'source>,
}

impl<'source> Parser<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
        }
    }

    pub fn parse(mut self) -> Result<Expr, Error> {
        let expression = self.parse_expression(0)?;

        // Ensure we've consumed all tokens. This is where a stray ')' or an
        // operand in infix position ('2 3') surfaces.
        if let Some(token) = self.lexer.next().transpose()? {
            return Err(SyntaxError::UnexpectedToken {
                src: self.source.to_string(),
                span: token.span.into(),
            }
            .into());
        }

        Ok(expression)
    }

    /// The core loop: a prefix step for the token that starts the
    /// (sub-)expression, then absorb infix operators for as long as their
    /// binding power exceeds `min_bp`.
    fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, Error> {
        let token = match self.lexer.next().transpose()? {
            Some(token) => token,
            None => {
                return Err(SyntaxError::UnexpectedEndOfInput {
                    src: self.source.to_string(),
                    span: (self.source.len()..self.source.len()).into(),
                }
                .into())
            }
        };

        let mut lhs = self.parse_prefix(token)?;

        loop {
            let token = match self.lexer.peek()? {
                Some(token) if token.kind.left_binding_power() > min_bp => token,
                _ => break,
            };
            self.lexer.next();

            lhs = self.parse_infix(token, lhs)?;
        }

        Ok(lhs)
    }

    /// Prefix (null denotation) step: how `token` parses with no left
    /// operand in sight.
    fn parse_prefix(&mut self, token: Token) -> Result<Expr, Error> {
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Variable(variable) => Ok(Expr::Variable(variable)),

            // A function applies to exactly one operand, bound as tightly
            // as a unary operator: 'sin 4+5' is 'sin(4)+5'.
            TokenKind::Function(function) => {
                let argument = self.parse_expression(PREFIX_BINDING_POWER)?;
                Ok(Expr::FunctionCall {
                    function,
                    argument: Box::new(argument),
                })
            }

            kind if kind.supports_prefix() => {
                let op = match kind {
                    TokenKind::Plus => UnaryOperator::Plus,
                    TokenKind::Minus => UnaryOperator::Neg,
                    _ => unreachable!("supports_prefix is only true for + and -"),
                };
                let operand = self.parse_expression(PREFIX_BINDING_POWER)?;
                Ok(Expr::UnaryOp {
                    op,
                    operand: Box::new(operand),
                })
            }

            TokenKind::OpenParen => {
                let inner = self.parse_expression(0)?;
                match self.lexer.next().transpose()? {
                    Some(Token {
                        kind: TokenKind::CloseParen,
                        ..
                    }) => Ok(inner),
                    // Either way the '(' has no partner; point at it
                    Some(_) | None => Err(SyntaxError::UnmatchedParenthesis {
                        src: self.source.to_string(),
                        span: token.span.into(),
                    }
                    .into()),
                }
            }

            // ')' or an infix-only operator where an operand should start
            _ => Err(SyntaxError::ExpectedOperand {
                src: self.source.to_string(),
                span: token.span.into(),
            }
            .into()),
        }
    }

    /// Infix (left denotation) step: combine `token` with the already
    /// parsed `lhs`. Only binary operators have an infix role.
    fn parse_infix(&mut self, token: Token, lhs: Expr) -> Result<Expr, Error> {
        let op = match token.kind {
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Sub,
            TokenKind::Star => BinaryOperator::Mul,
            TokenKind::Slash => BinaryOperator::Div,
            TokenKind::Caret => BinaryOperator::Pow,
            _ => {
                return Err(SyntaxError::UnexpectedToken {
                    src: self.source.to_string(),
                    span: token.span.into(),
                }
                .into())
            }
        };

        // Left-associative operators re-enter at their own binding power so
        // an equal-precedence follow-up stops the inner loop; right
        // associative ones re-enter one lower so it doesn't.
        let min_bp = if token.kind.is_right_associative() {
            token.kind.left_binding_power() - 1
        } else {
            token.kind.left_binding_power()
        };
        let rhs = self.parse_expression(min_bp)?;

        Ok(Expr::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }
}
