use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::token::Variable;

impl Expr {
    /// Evaluate the tree at a concrete `(x, y)` point. Pure: no state is
    /// touched, so the same tree can be evaluated from multiple threads.
    ///
    /// Arithmetic follows host `f64` semantics: division by zero yields a
    /// signed infinity or NaN, `0^0` is 1, and a negative base with a
    /// fractional exponent is NaN.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Variable(Variable::X) => x,
            Expr::Variable(Variable::Y) => y,
            Expr::UnaryOp { op, operand } => {
                let operand = operand.evaluate(x, y);
                match op {
                    UnaryOperator::Plus => operand,
                    UnaryOperator::Neg => -operand,
                }
            }
            Expr::BinaryOp { op, lhs, rhs } => {
                let lhs = lhs.evaluate(x, y);
                let rhs = rhs.evaluate(x, y);
                match op {
                    BinaryOperator::Add => lhs + rhs,
                    BinaryOperator::Sub => lhs - rhs,
                    BinaryOperator::Mul => lhs * rhs,
                    BinaryOperator::Div => lhs / rhs,
                    BinaryOperator::Pow => lhs.powf(rhs),
                }
            }
            Expr::FunctionCall { function, argument } => function.call(argument.evaluate(x, y)),
        }
    }
}
