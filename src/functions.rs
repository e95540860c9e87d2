use crate::error::Error;
use hashbrown::HashMap;

/// Single-argument scientific functions available on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Function {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Natural logarithm
    Ln,
    /// Base-10 logarithm
    Log,
    /// Principal square root
    Sqrt,
}

impl Function {
    /// Apply the function to `arg`, checking its domain.
    ///
    /// Trigonometric functions take their argument in degrees.
    pub fn apply(self, arg: f64) -> Result<f64, Error> {
        let value = match self {
            Self::Sin => libm::sin(to_radians(arg)),
            Self::Cos => libm::cos(to_radians(arg)),
            Self::Tan => libm::tan(to_radians(arg)),
            Self::Ln | Self::Log if arg <= 0.0 => {
                return Err(Error::Domain(format!(
                    "{} of non-positive value {}",
                    self.name(),
                    arg
                )));
            }
            Self::Ln => libm::log(arg),
            Self::Log => libm::log10(arg),
            Self::Sqrt if arg < 0.0 => {
                return Err(Error::Domain(format!("square root of negative value {}", arg)));
            }
            Self::Sqrt => libm::sqrt(arg),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::Domain(format!("{}({}) is undefined", self.name(), arg)))
        }
    }

    /// Canonical name of the function
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }
}

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

lazy_static! {
    /// Function names recognized in expressions, including the `√` glyph.
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::new();
        map.insert("sin", Function::Sin);
        map.insert("cos", Function::Cos);
        map.insert("tan", Function::Tan);
        map.insert("ln", Function::Ln);
        map.insert("log", Function::Log);
        map.insert("sqrt", Function::Sqrt);
        map.insert("√", Function::Sqrt);
        map.shrink_to_fit();
        map
    };
}

#[cfg(test)]
mod tests {
    use super::{Function, FUNCTIONS};
    use crate::error::Error;
    use test_case::test_case;

    const EPSILON: f64 = 1e-9;

    #[test_case(Function::Sin, 30.0, 0.5 ; "sine of thirty degrees")]
    #[test_case(Function::Sin, 90.0, 1.0 ; "sine of right angle")]
    #[test_case(Function::Cos, 60.0, 0.5 ; "cosine of sixty degrees")]
    #[test_case(Function::Cos, 180.0, -1.0 ; "cosine of straight angle")]
    #[test_case(Function::Tan, 45.0, 1.0 ; "tangent of forty-five degrees")]
    #[test_case(Function::Ln, std::f64::consts::E, 1.0 ; "natural logarithm of e")]
    #[test_case(Function::Log, 1000.0, 3.0 ; "decimal logarithm")]
    #[test_case(Function::Sqrt, 16.0, 4.0 ; "square root")]
    #[test_case(Function::Sqrt, 0.0, 0.0 ; "square root of zero")]
    fn apply(function: Function, arg: f64, expected: f64) {
        let value = function.apply(arg).unwrap();
        assert!((value - expected).abs() < EPSILON, "{} != {}", value, expected);
    }

    #[test_case(Function::Log, -1.0 ; "log of negative")]
    #[test_case(Function::Log, 0.0 ; "log of zero")]
    #[test_case(Function::Ln, 0.0 ; "ln of zero")]
    #[test_case(Function::Sqrt, -4.0 ; "root of negative")]
    fn domain_errors(function: Function, arg: f64) {
        match function.apply(arg) {
            Err(Error::Domain(_)) => {}
            other => panic!("expected a domain error, got {:?}", other),
        }
    }

    #[test]
    fn names() {
        for name in &["sin", "cos", "tan", "ln", "log", "sqrt", "√"] {
            assert!(FUNCTIONS.contains_key(name));
        }
        assert_eq!(FUNCTIONS.get("√"), Some(&Function::Sqrt));
        assert!(!FUNCTIONS.contains_key("exp"));
        assert!(!FUNCTIONS.contains_key("e"));
    }
}
