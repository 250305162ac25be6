use crate::interpreter::error::ArithmeticError;

/// Results are rounded to this many significant digits.
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Renders a calculated value for display.
///
/// Integral values within the range of `i64` are written without a decimal point.
/// Anything else is rounded to [`SIGNIFICANT_DIGITS`] significant digits with trailing
/// zeros trimmed, switching to scientific notation for very small or very large magnitudes.
///
/// # Examples
///
/// ```
/// use kacalc::interpreter::formatter::format_number;
///
/// assert_eq!(format_number(8.0).unwrap(), "8");
/// assert_eq!(format_number(std::f64::consts::TAU).unwrap(), "6.283185307");
/// assert_eq!(format_number(0.1 + 0.2).unwrap(), "0.3");
/// ```
pub fn format_number(value: f64) -> Result<String, ArithmeticError> {
    if !value.is_finite() {
        return Err(ArithmeticError::NonFinite);
    }
    if value.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&value) {
        return Ok(format!("{}", value as i64));
    }
    Ok(format_significant(value, SIGNIFICANT_DIGITS))
}

fn format_significant(value: f64, digits: usize) -> String {
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{}", trim_trailing_zeros(mantissa), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
