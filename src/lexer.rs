use crate::error::{Error, LexicalError};
use crate::symbols::{self, MathFunction};
use crate::token::{Span, Token, TokenKind, Variable};

pub struct Lexer<'source> {
    source: &'source str,
    rest: &'source str,
    position: usize,
    peeked: Option<Token>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            peeked: None,
        }
    }

    fn source_code(&self) -> String {
        self.source.to_string()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(peeked) = self.peeked.take() {
            return Some(Ok(peeked));
        }

        loop {
            let mut chars = self.rest.chars();
            let c = chars.next()?;
            let c_start = self.position;

            self.rest = chars.as_str();
            self.position += c.len_utf8();

            break Some(match c {
                '+' => Ok(self.token(TokenKind::Plus, c_start)),
                '-' => Ok(self.token(TokenKind::Minus, c_start)),
                '*' => Ok(self.token(TokenKind::Star, c_start)),
                '/' => Ok(self.token(TokenKind::Slash, c_start)),
                '^' => Ok(self.token(TokenKind::Caret, c_start)),
                '(' => Ok(self.token(TokenKind::OpenParen, c_start)),
                ')' => Ok(self.token(TokenKind::CloseParen, c_start)),

                '0'..='9' | '.' => self.lex_number(c, c_start),
                'a'..='z' | 'A'..='Z' | '_' => self.lex_identifier(c_start),

                c if c.is_whitespace() => continue,

                _ => Err(LexicalError::UnexpectedCharacter {
                    character: c,
                    src: self.source_code(),
                    span: Span {
                        start: c_start,
                        end: self.position,
                    }
                    .into(),
                }
                .into()),
            });
        }
    }
}

impl Lexer<'_> {
    /// One-token lookahead for the parser's infix loop.
    pub fn peek(&mut self) -> Result<Option<Token>, Error> {
        if self.peeked.is_none() {
            self.peeked = self.next().transpose()?;
        }

        Ok(self.peeked)
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            span: Span {
                start,
                end: self.position,
            },
        }
    }

    /// Called with the leading digit or dot already consumed. Accepts
    /// `digits`, `digits.digits`, a trailing dot as in `12.`, and the
    /// dot-led form `.5`. No exponent or sign; `-2` is the unary minus
    /// operator applied to `2`.
    fn lex_number(&mut self, starting_character: char, start: usize) -> Result<Token, Error> {
        let mut has_fraction = starting_character == '.';

        // A lone dot is not a number
        if has_fraction && !matches!(self.rest.chars().next(), Some('0'..='9')) {
            return Err(LexicalError::UnexpectedCharacter {
                character: '.',
                src: self.source_code(),
                span: Span {
                    start,
                    end: self.position,
                }
                .into(),
            }
            .into());
        }

        let mut chars = self.rest.chars().peekable();
        while let Some(c) = chars.peek() {
            match c {
                '0'..='9' => {}
                '.' if !has_fraction => has_fraction = true,
                _ => break,
            }

            chars.next();
            self.position += 1;
        }
        self.rest = &self.source[self.position..];

        let literal = &self.source[start..self.position];
        let value = literal.parse().map_err(|_| LexicalError::InvalidNumber {
            src: self.source_code(),
            span: Span {
                start,
                end: self.position,
            }
            .into(),
        })?;

        Ok(self.token(TokenKind::Number(value), start))
    }

    /// Called with the leading letter or underscore already consumed.
    /// Identifiers are classified against the fixed symbol tables; `x` and
    /// `y` take priority, then function names, then constants.
    fn lex_identifier(&mut self, start: usize) -> Result<Token, Error> {
        let mut chars = self.rest.chars().peekable();
        while let Some(c) = chars.peek() {
            if matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_') {
                chars.next();
                self.position += 1;
            } else {
                break;
            }
        }
        self.rest = &self.source[self.position..];

        let ident = &self.source[start..self.position];
        let kind = match ident {
            "x" => TokenKind::Variable(Variable::X),
            "y" => TokenKind::Variable(Variable::Y),
            ident => match MathFunction::from_name(ident) {
                Some(function) => TokenKind::Function(function),
                None => match symbols::constant(ident) {
                    Some(value) => TokenKind::Number(value),
                    None => {
                        return Err(LexicalError::UnknownIdentifier {
                            name: ident.to_string(),
                            src: self.source_code(),
                            span: Span {
                                start,
                                end: self.position,
                            }
                            .into(),
                        }
                        .into())
                    }
                },
            },
        };

        Ok(self.token(kind, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .map(|t| t.expect("lexing should succeed").kind)
            .collect()
    }

    #[test]
    fn test_operators_and_variables() {
        assert_eq!(
            kinds("x + y * 2 ^ 3"),
            vec![
                TokenKind::Variable(Variable::X),
                TokenKind::Plus,
                TokenKind::Variable(Variable::Y),
                TokenKind::Star,
                TokenKind::Number(2.0),
                TokenKind::Caret,
                TokenKind::Number(3.0),
            ]
        );

        assert_eq!(
            kinds("(x-y)/2"),
            vec![
                TokenKind::OpenParen,
                TokenKind::Variable(Variable::X),
                TokenKind::Minus,
                TokenKind::Variable(Variable::Y),
                TokenKind::CloseParen,
                TokenKind::Slash,
                TokenKind::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        for (input, expected) in [
            ("3", 3.0),
            ("345", 345.0),
            ("3.25", 3.25),
            ("12.", 12.0),
            (".5", 0.5),
            ("0.31416", 0.31416),
        ] {
            assert_eq!(
                kinds(input),
                vec![TokenKind::Number(expected)],
                "when lexing '{input}'"
            );
        }

        // A minus sign in front of a literal is the unary operator
        assert_eq!(
            kinds("-2"),
            vec![TokenKind::Minus, TokenKind::Number(2.0)]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            kinds("sin x"),
            vec![
                TokenKind::Function(MathFunction::Sin),
                TokenKind::Variable(Variable::X),
            ]
        );

        // Constants resolve to number tokens at lex time
        assert_eq!(kinds("pi"), vec![TokenKind::Number(std::f64::consts::PI)]);
        assert_eq!(kinds("E"), vec![TokenKind::Number(std::f64::consts::E)]);
    }

    #[test]
    fn test_unknown_identifier() {
        let mut lexer = Lexer::new("foo2 + 1");
        let error = lexer.next().unwrap().unwrap_err();
        assert!(matches!(
            error,
            Error::Lexical(LexicalError::UnknownIdentifier { ref name, .. }) if name == "foo2"
        ));
    }

    #[test]
    fn test_unexpected_character() {
        for input in ["2 % 3", "x ? y", "."] {
            let error = Lexer::new(input)
                .find_map(|t| t.err())
                .expect("lexing should fail");
            assert!(
                matches!(
                    error,
                    Error::Lexical(LexicalError::UnexpectedCharacter { .. })
                ),
                "when lexing '{input}'"
            );
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::new("1 + 2");
        assert_eq!(
            lexer.peek().unwrap().map(|t| t.kind),
            Some(TokenKind::Number(1.0))
        );
        assert_eq!(
            lexer.next().unwrap().unwrap().kind,
            TokenKind::Number(1.0)
        );
        assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Plus);
    }

    #[test]
    fn test_spans() {
        let tokens: Vec<_> = Lexer::new("  sin x")
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(tokens[0].span, Span { start: 2, end: 5 });
        assert_eq!(tokens[1].span, Span { start: 6, end: 7 });
    }
}
