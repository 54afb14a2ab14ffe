//! Argentine-locale money parsing
//!
//! `"1.234,56"` reads as 1234.56: every `.` is a thousands separator and the
//! first `,` is the decimal point. A dot is never a decimal point, so `"0.5"`
//! reads as 5. Form fields are always pre-formatted with thousands grouping,
//! so callers feeding plain numeric strings must convert them first.

use super::RawValue;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a monetary form value into a non-negative amount
///
/// Missing, unparseable, non-finite or negative input yields zero. Amounts
/// too large for `Decimal` saturate at `Decimal::MAX`, like the quote math.
pub fn parse_money(raw: &RawValue) -> Decimal {
    let parsed = match raw {
        RawValue::Number(n) => from_f64(*n),
        RawValue::Text(s) => {
            let normalized = s.replace('.', "").replacen(',', ".", 1);
            parse_leading_decimal(&normalized)
        }
        RawValue::Missing => None,
    };

    match parsed {
        Some(value) if value.is_sign_positive() => value,
        _ => Decimal::ZERO,
    }
}

/// Parse an installment count
///
/// Plain numeric coercion without locale handling. Non-numeric or negative
/// input yields zero and fractional counts are truncated.
pub fn parse_count(raw: &RawValue) -> u32 {
    let parsed = match raw {
        RawValue::Number(n) => from_f64(*n),
        RawValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Decimal::from_str(trimmed).ok()
            }
        }
        RawValue::Missing => None,
    };

    match parsed {
        Some(value) if value.is_sign_positive() => value.trunc().to_u32().unwrap_or(u32::MAX),
        _ => 0,
    }
}

fn from_f64(n: f64) -> Option<Decimal> {
    if !n.is_finite() {
        return None;
    }
    match Decimal::try_from(n) {
        Ok(value) => Some(value),
        Err(_) if n.abs() >= 1.0 => Some(saturated(n < 0.0)),
        Err(_) => Some(Decimal::ZERO),
    }
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Parse the longest leading float literal, ignoring trailing garbage
///
/// Accepts an optional exponent (`"1e3"`); a malformed exponent (`"1e"`)
/// leaves the mantissa as parsed. Magnitudes beyond `Decimal` saturate and
/// magnitudes below its precision read as zero.
fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let int_part = &rest[..int_len];

    let (frac_part, mantissa_len) = match rest[int_len..].strip_prefix('.') {
        Some(after_dot) => {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            (&after_dot[..frac_len], int_len + 1 + frac_len)
        }
        None => ("", int_len),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(int_part.len() + frac_part.len() + 2);
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }

    let mantissa = match Decimal::from_str(&literal) {
        Ok(value) => value,
        Err(_) if int_part.bytes().any(|b| b != b'0') => Decimal::MAX,
        Err(_) => Decimal::ZERO,
    };

    let magnitude = match parse_exponent(&rest[mantissa_len..]) {
        Some(exp) if !mantissa.is_zero() => scale_by_exponent(&literal, mantissa, exp),
        _ => mantissa,
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Exponent suffix `[eE][+-]?digits`, if well formed
fn parse_exponent(s: &str) -> Option<i64> {
    let rest = s.strip_prefix(['e', 'E'])?;
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let exp = digits[..len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -exp } else { exp })
}

fn scale_by_exponent(literal: &str, mantissa: Decimal, exp: i64) -> Decimal {
    if let Ok(value) = Decimal::from_scientific(&format!("{literal}e{exp}")) {
        return value;
    }
    if exp < 0 {
        return Decimal::ZERO;
    }

    // Consume fractional digits before growing the integer part
    let mut value = mantissa.normalize();
    for _ in 0..exp.min(64) {
        let scale = value.scale();
        if scale > 0 {
            if value.set_scale(scale - 1).is_err() {
                return Decimal::MAX;
            }
            continue;
        }
        match value.checked_mul(Decimal::TEN) {
            Some(next) => value = next,
            None => return Decimal::MAX,
        }
    }
    value
}
