//! Mapping of display glyphs and named constants to evaluator syntax.

use std::f64::consts::{E, PI};
use std::fmt::Write;

/// Rewrite the display `input` using only evaluator-internal symbols.
///
/// `×`, `÷` and `−` become `*`, `/` and `-`, `^` becomes the `**` power
/// operator. `π` and standalone `e` are replaced by their parenthesized
/// double-precision value, so that `2π` stays a syntax error instead of
/// silently reading as `23.14…`. An `e` touching a letter is left alone, as
/// part of an identifier.
///
/// ```
/// # use torchlite::normalize;
/// assert_eq!(normalize("6×7−2÷1^2"), "6*7-2/1**2");
/// assert_eq!(normalize("2*π"), "2*(3.141592653589793)");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '×' => output.push('*'),
            '÷' => output.push('/'),
            '−' => output.push('-'),
            '^' => output.push_str("**"),
            'π' => push_constant(&mut output, PI),
            'e' if is_standalone(&chars, i) => push_constant(&mut output, E),
            other => output.push(other),
        }
    }
    output
}

fn push_constant(output: &mut String, value: f64) {
    // writing to a String never fails
    let _ = write!(output, "({})", value);
}

/// Check that the character at `index` is not part of a longer identifier
fn is_standalone(chars: &[char], index: usize) -> bool {
    let before = index.checked_sub(1).and_then(|i| chars.get(i));
    let after = chars.get(index + 1);
    let is_letter = |c: &char| c.is_ascii_alphabetic();
    !before.map_or(false, is_letter) && !after.map_or(false, is_letter)
}
