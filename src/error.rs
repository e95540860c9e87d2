use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the torchlite crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed expression: unbalanced parenthesis, trailing operator,
    /// empty sub-expression, ...
    Syntax(String),
    /// A character that is neither a digit, an operator nor a parenthesis
    UnknownToken(char),
    /// Division or modulo by zero
    DivisionByZero,
    /// Mathematically undefined input to a function or operator
    Domain(String),
}

impl Error {
    /// Short name of the error kind, as shown on the calculator display
    pub fn kind(&self) -> &'static str {
        match *self {
            Self::Syntax(_) => "SyntaxError",
            Self::UnknownToken(_) => "UnknownToken",
            Self::DivisionByZero => "DivisionByZero",
            Self::Domain(_) => "DomainError",
        }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Syntax(ref message) => write!(fmt, "SyntaxError: {}", message),
            Self::UnknownToken(c) => write!(fmt, "UnknownToken: unexpected character '{}'", c),
            Self::DivisionByZero => write!(fmt, "DivisionByZero"),
            Self::Domain(ref message) => write!(fmt, "DomainError: {}", message),
        }
    }
}

impl error::Error for Error {}
