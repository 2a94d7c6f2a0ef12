//! Argument handling and report rendering for the `black_scholes` binary.

use anyhow::{anyhow, Result};

use crate::models::bs::types::{CallGreeks, OptionInputs};

/// Number of positional operands: spot, strike, maturity, rate, volatility
pub const OPERAND_COUNT: usize = 5;

/// Significant digits in the report, the C++ stream default
pub const REPORT_PRECISION: usize = 6;

/// Parse a number the way C `atof` does.
///
/// Leading whitespace is skipped and the longest prefix that reads as a float
/// is used; text with no numeric prefix yields `0.0` instead of an error.
pub fn parse_lenient(text: &str) -> f64 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    text[..end].parse::<f64>().unwrap_or(0.0)
}

/// Length of the longest prefix of `bytes` matching the decimal float grammar
/// (`[sign] digits [. digits] [e [sign] digits]`, or `inf`, `infinity`, `nan`).
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    for word in [&b"infinity"[..], b"inf", b"nan"] {
        let rest = &bytes[i..];
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
            return i + word.len();
        }
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Turn the operands (program name excluded) into option inputs.
pub fn parse_args<S: AsRef<str>>(operands: &[S]) -> Result<OptionInputs> {
    if operands.len() != OPERAND_COUNT {
        return Err(anyhow!(
            "expected {} arguments, got {}",
            OPERAND_COUNT,
            operands.len()
        ));
    }

    let v: Vec<f64> = operands.iter().map(|s| parse_lenient(s.as_ref())).collect();
    Ok(OptionInputs::new(v[0], v[1], v[2], v[3], v[4]))
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} <stock_price> <strike_price> <time_to_maturity> <risk_free_rate> <volatility>",
        program
    )
}

/// Render `value` like C's `%g`: `precision` significant digits, trailing zeros
/// dropped, scientific notation outside `1e-4 <= |value| < 10^precision`.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let precision = precision.max(1);
    // Rounding to the requested digits decides the exponent, e.g. 9.9999996 -> 1e1.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Six labelled lines, price first, each terminated by a newline.
pub fn render_report(greeks: &CallGreeks) -> String {
    let g = |v: f64| format_general(v, REPORT_PRECISION);
    format!(
        "Call Option Price: ${}\nDelta: {}\nGamma: {}\nTheta: {}\nVega: {}\nRho: {}\n",
        g(greeks.price),
        g(greeks.delta),
        g(greeks.gamma),
        g(greeks.theta),
        g(greeks.vega),
        g(greeks.rho),
    )
}
