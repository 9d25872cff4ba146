use core::f64;

/// The fixed set of unary functions an expression may apply. Resolved by
/// name at lex time, so an unknown name is rejected before parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    Abs,
    Acos,
    Asin,
    Atan,
    Ceil,
    Cos,
    Exp,
    Floor,
    Log,
    Round,
    Sin,
    Sinc,
    Sqrt,
    Tan,
}

impl MathFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "abs" => Self::Abs,
            "acos" => Self::Acos,
            "asin" => Self::Asin,
            "atan" => Self::Atan,
            "ceil" => Self::Ceil,
            "cos" => Self::Cos,
            "exp" => Self::Exp,
            "floor" => Self::Floor,
            "log" => Self::Log,
            "round" => Self::Round,
            "sin" => Self::Sin,
            "sinc" => Self::Sinc,
            "sqrt" => Self::Sqrt,
            "tan" => Self::Tan,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Acos => "acos",
            Self::Asin => "asin",
            Self::Atan => "atan",
            Self::Ceil => "ceil",
            Self::Cos => "cos",
            Self::Exp => "exp",
            Self::Floor => "floor",
            Self::Log => "log",
            Self::Round => "round",
            Self::Sin => "sin",
            Self::Sinc => "sinc",
            Self::Sqrt => "sqrt",
            Self::Tan => "tan",
        }
    }

    pub fn call(&self, value: f64) -> f64 {
        match self {
            Self::Abs => value.abs(),
            Self::Acos => value.acos(),
            Self::Asin => value.asin(),
            Self::Atan => value.atan(),
            Self::Ceil => value.ceil(),
            Self::Cos => value.cos(),
            Self::Exp => value.exp(),
            Self::Floor => value.floor(),
            Self::Log => value.ln(),
            Self::Round => value.round(),
            Self::Sin => value.sin(),
            // Normalized sinc has a removable singularity at zero
            Self::Sinc => {
                if value == 0.0 {
                    1.0
                } else {
                    value.sin() / value
                }
            }
            Self::Sqrt => value.sqrt(),
            Self::Tan => value.tan(),
        }
    }
}

/// Named constants, usable anywhere a number literal is.
pub fn constant(name: &str) -> Option<f64> {
    Some(match name {
        "pi" | "PI" => f64::consts::PI,
        "e" | "E" => f64::consts::E,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_names_round_trip() {
        for name in [
            "abs", "acos", "asin", "atan", "ceil", "cos", "exp", "floor", "log", "round", "sin",
            "sinc", "sqrt", "tan",
        ] {
            let function = MathFunction::from_name(name).expect("known function");
            assert_eq!(function.name(), name);
        }

        assert_eq!(MathFunction::from_name("signum"), None);
        // Lookup is case-sensitive
        assert_eq!(MathFunction::from_name("Sin"), None);
    }

    #[test]
    fn sinc_is_one_at_zero() {
        assert_eq!(MathFunction::Sinc.call(0.0), 1.0);
        let v = MathFunction::Sinc.call(f64::consts::PI);
        assert!(v.abs() < 1e-15, "sinc(pi) should be ~0, got {v}");
    }

    #[test]
    fn constants_resolve() {
        assert_eq!(constant("pi"), Some(f64::consts::PI));
        assert_eq!(constant("PI"), Some(f64::consts::PI));
        assert_eq!(constant("e"), Some(f64::consts::E));
        assert_eq!(constant("E"), Some(f64::consts::E));
        assert_eq!(constant("phi"), None);
    }
}
