//! An embeddable arithmetic expression engine over the two free variables
//! `x` and `y`. Parse once, then evaluate the resulting tree at as many
//! points as you like:
//!
//! ```
//! let expr = plotexpr::parse("sin x + y^2")?;
//! let eval = plotexpr::evaluator(expr);
//! assert_eq!(eval(0.0, 3.0), 9.0);
//! # Ok::<(), plotexpr::Error>(())
//! ```

pub mod ast;
pub mod error;
mod eval;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod token;

pub use ast::Expr;
pub use error::{Error, LexicalError, SyntaxError};

/// Parse an expression into a tree, or fail with a lexical or syntax error.
pub fn parse(source: &str) -> Result<Expr, Error> {
    parser::Parser::new(source).parse()
}

/// Wrap a parsed tree in a reusable evaluation closure.
pub fn evaluator(expr: Expr) -> impl Fn(f64, f64) -> f64 {
    move |x, y| expr.evaluate(x, y)
}
