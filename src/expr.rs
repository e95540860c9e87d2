use crate::lexer::Lexer;
use crate::normalize::normalize;
use crate::resolve::resolve;
use crate::rpn;
use crate::token::Token;
use crate::Error;

/// Evaluate a single calculator expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed. The result is always a
/// finite number.
///
/// # Example
///
/// ```
/// # use torchlite::{eval, Error};
///
/// assert_eq!(eval("45 − 2^3"), Ok(37.0));
/// assert_eq!(eval("sqrt(9) × 2"), Ok(6.0));
/// assert_eq!(eval("1 ÷ 0"), Err(Error::DivisionByZero));
/// ```
pub fn eval(input: &str) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// Evaluate a normalized expression that holds no function call anymore
pub(crate) fn eval_resolved(input: &str) -> Result<f64, Error> {
    rpn::eval(&Lexer::new(input).parse()?)
}

/// A parsed mathematical expression.
///
/// Function calls are reduced to values while parsing, so parsing alone may
/// already fail with a domain error.
///
/// # Examples
/// ```
/// # use torchlite::Expr;
/// let expr = Expr::parse("3 + 5 × 2").unwrap();
/// assert_eq!(expr.eval(), Ok(13.0));
///
/// let expr = Expr::parse("-2 × cos(60)").unwrap();
/// assert!((expr.eval().unwrap() + 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Tokens in reverse polish notation
    postfix: Vec<Token>,
}

impl Expr {
    /// Parse the given display `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use torchlite::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 × 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3eff + 5 × 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let resolved = resolve(&normalize(expression))?;
        let postfix = Lexer::new(&resolved).parse()?;
        Ok(Self { postfix })
    }

    /// Evaluate the expression.
    ///
    /// # Examples
    ///
    /// ```
    /// # use torchlite::{Expr, Error};
    /// let expr = Expr::parse("2 ^ 3 ^ 2").unwrap();
    /// assert_eq!(expr.eval(), Ok(512.0));
    ///
    /// let expr = Expr::parse("5 % (3 − 3)").unwrap();
    /// assert_eq!(expr.eval(), Err(Error::DivisionByZero));
    /// ```
    pub fn eval(&self) -> Result<f64, Error> {
        rpn::eval(&self.postfix)
    }
}
