use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Anything that can go wrong between source text and a finished tree.
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

#[derive(Debug, Diagnostic, Error)]
pub enum LexicalError {
    #[error("unexpected character '{character}'")]
    #[diagnostic(code(plotexpr::lex::unexpected_character))]
    UnexpectedCharacter {
        character: char,
        #[source_code]
        src: String,
        #[label("not part of any token")]
        span: SourceSpan,
    },

    #[error("invalid number literal")]
    #[diagnostic(code(plotexpr::lex::invalid_number))]
    InvalidNumber {
        #[source_code]
        src: String,
        #[label("this literal")]
        span: SourceSpan,
    },

    #[error("unknown identifier '{name}'")]
    #[diagnostic(
        code(plotexpr::lex::unknown_identifier),
        help("known names are x, y, the built-in functions, and the constants pi and e")
    )]
    UnknownIdentifier {
        name: String,
        #[source_code]
        src: String,
        #[label("not a variable, function, or constant")]
        span: SourceSpan,
    },
}

#[derive(Debug, Diagnostic, Error)]
pub enum SyntaxError {
    #[error("expected an operand")]
    #[diagnostic(code(plotexpr::parse::expected_operand))]
    ExpectedOperand {
        #[source_code]
        src: String,
        #[label("this token cannot start an expression")]
        span: SourceSpan,
    },

    #[error("unexpected token")]
    #[diagnostic(code(plotexpr::parse::unexpected_token))]
    UnexpectedToken {
        #[source_code]
        src: String,
        #[label("expected an operator here")]
        span: SourceSpan,
    },

    #[error("unmatched parenthesis")]
    #[diagnostic(code(plotexpr::parse::unmatched_parenthesis))]
    UnmatchedParenthesis {
        #[source_code]
        src: String,
        #[label("this '(' is never closed")]
        span: SourceSpan,
    },

    #[error("unexpected end of input")]
    #[diagnostic(code(plotexpr::parse::unexpected_end_of_input))]
    UnexpectedEndOfInput {
        #[source_code]
        src: String,
        #[label("expected an expression")]
        span: SourceSpan,
    },
}
