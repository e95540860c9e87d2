use crate::error::Error;
use crate::expr;
use crate::functions::{Function, FUNCTIONS};
use std::fmt::Write;
use tracing::trace;

/// Replace every function application in the normalized `input` by the
/// parenthesized literal value of its result.
///
/// The input is read once, left to right. Each open call keeps the offset
/// where its argument starts in the output, so when its closing parenthesis
/// arrives every nested call inside it has already been replaced by a value
/// and the argument is plain arithmetic. `sin(log(10))` is therefore reduced
/// innermost first. Identifiers that are not function names are left in
/// place for the lexer to reject.
pub fn resolve(input: &str) -> Result<String, Error> {
    let mut output = String::with_capacity(input.len());
    let mut frames: Vec<Frame> = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let mut end = start + c.len_utf8();
        if c.is_ascii_alphabetic() {
            while let Some(&(i, c)) = chars.peek() {
                if !c.is_ascii_alphabetic() {
                    break;
                }
                chars.next();
                end = i + c.len_utf8();
            }
        }

        if let Some(&function) = FUNCTIONS.get(&input[start..end]) {
            match chars.next() {
                Some((_, '(')) => frames.push(Frame {
                    function: Some(function),
                    argument: output.len(),
                }),
                _ => {
                    return Err(Error::Syntax(format!(
                        "{} requires a parenthesized argument",
                        function.name()
                    )))
                }
            }
            continue;
        }

        match c {
            '(' => {
                output.push('(');
                frames.push(Frame {
                    function: None,
                    argument: output.len(),
                });
            }
            ')' => match frames.pop() {
                Some(Frame {
                    function: Some(function),
                    argument,
                }) => {
                    let value = apply(function, &output[argument..])?;
                    output.truncate(argument);
                    // writing to a String never fails
                    let _ = write!(output, "({})", value);
                }
                // unbalanced closing parentheses are reported by the lexer
                _ => output.push(')'),
            },
            _ => output.push_str(&input[start..end]),
        }
    }

    if frames.is_empty() {
        Ok(output)
    } else {
        Err(Error::Syntax("mismatched parenthesis".into()))
    }
}

/// A parenthesis opened but not closed yet
#[derive(Debug)]
struct Frame {
    /// The function applied to the content, if any
    function: Option<Function>,
    /// Byte offset in the output where the content starts
    argument: usize,
}

/// Evaluate a call argument free of function calls and apply `function`
fn apply(function: Function, argument: &str) -> Result<f64, Error> {
    let value = match expr::eval_resolved(argument) {
        Err(Error::Syntax(ref message)) if argument.trim().is_empty() => {
            return Err(Error::Syntax(format!(
                "{} in call to {}",
                message,
                function.name()
            )));
        }
        other => function.apply(other?)?,
    };
    trace!(function = function.name(), argument, value, "resolved function call");
    Ok(value)
}
