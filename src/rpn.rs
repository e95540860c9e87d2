use crate::error::Error;
use crate::token::{Op, Token};

/// Evaluate tokens in reverse polish notation with an explicit value stack.
///
/// The work and memory are proportional to the number of tokens, whatever
/// the shape of the expression. Fails instead of producing an infinite or
/// `NaN` value.
pub fn eval(postfix: &[Token]) -> Result<f64, Error> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix.len() / 2 + 1);

    for token in postfix {
        let value = match *token {
            Token::Number(number) => number,
            Token::Op(Op::Neg) => match values.pop() {
                Some(operand) => -operand,
                None => return Err(Error::Syntax("empty expression after sign".into())),
            },
            Token::Op(op) => {
                let right = values.pop();
                let left = values.pop();
                match (left, right) {
                    (Some(left), Some(right)) => apply(op, left, right)?,
                    (None, Some(_)) => {
                        return Err(Error::Syntax("empty expression before operator".into()))
                    }
                    _ => return Err(Error::Syntax("empty expression after operator".into())),
                }
            }
            Token::LParen | Token::RParen => {
                return Err(Error::Syntax("mismatched parenthesis".into()))
            }
        };
        values.push(value);
    }

    match (values.pop(), values.is_empty()) {
        (Some(value), true) => Ok(value),
        (Some(_), false) => Err(Error::Syntax("missing operator".into())),
        (None, _) => Err(Error::Syntax("empty expression".into())),
    }
}

/// Apply a binary operator, checking for zero divisors and non-finite
/// results
fn apply(op: Op, left: f64, right: f64) -> Result<f64, Error> {
    let value = match op {
        Op::Plus => left + right,
        Op::Minus => left - right,
        Op::Mul => left * right,
        Op::Div | Op::Mod if right == 0.0 => return Err(Error::DivisionByZero),
        Op::Div => left / right,
        Op::Mod => libm::fmod(left, right),
        Op::Pow => {
            if left == 0.0 && right < 0.0 {
                return Err(Error::DivisionByZero);
            }
            let value = libm::pow(left, right);
            if value.is_nan() {
                return Err(Error::Domain(format!(
                    "{} raised to the non-integer power {}",
                    left, right
                )));
            }
            value
        }
        Op::Neg => -right,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Domain("result is out of range".into()))
    }
}
