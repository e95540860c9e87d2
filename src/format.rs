/// Decimal digits an `f64` carries before binary noise shows up
const SIGNIFICANT_DIGITS: usize = 15;

/// Render a result for the calculator display.
///
/// The value is rounded to `precision` decimal places, which hides the
/// floating point noise of degree conversions (`0.49999999999999994` shows as
/// `0.5`). Decimals are also limited so that no more than 15 significant
/// digits are shown. Trailing zeros are dropped and negative zero shows as
/// `0`.
///
/// ```
/// # use torchlite::format_number;
/// assert_eq!(format_number(0.49999999999999994, 10), "0.5");
/// assert_eq!(format_number(42.0, 10), "42");
/// assert_eq!(format_number(-0.26, 1), "-0.3");
/// assert_eq!(format_number(1000246000000.0, 10), "1000246000000");
/// ```
pub fn format_number(value: f64, precision: usize) -> String {
    let integer_digits = format!("{:.0}", value.abs()).len();
    if !value.is_finite() || integer_digits > SIGNIFICANT_DIGITS {
        // no room for decimals, the shortest representation is the exact one
        return value.to_string();
    }

    let decimals = precision.min(SIGNIFICANT_DIGITS - integer_digits);
    let text = format!("{:.*}", decimals, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    match text {
        "0" | "-0" => "0".into(),
        _ => text.into(),
    }
}
