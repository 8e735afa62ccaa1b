//! Per-type casts applied to positional arguments.

use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

use crate::catalog::{ParamKind, ParamSpec};

/// Cast `args` against the declared parameter list.
///
/// Only as many values as there are declared parameters are returned; extra
/// values are dropped and missing ones are simply absent from the result.
pub fn coerce_arguments(args: &[Value], params: &[ParamSpec]) -> Vec<Value> {
    args.iter()
        .zip(params)
        .map(|(value, param)| coerce_value(value, param.kind))
        .collect()
}

/// Cast a single value to `kind`.
pub fn coerce_value(value: &Value, kind: ParamKind) -> Value {
    match kind {
        ParamKind::Integer => Value::from(to_integer(value)),
        ParamKind::Str => Value::String(to_text(value)),
        ParamKind::Double => Value::from(to_double(value)),
        ParamKind::DateTime => Value::String(to_datetime(value)),
        ParamKind::Binary | ParamKind::Passthrough => value.clone(),
    }
}

fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| n.as_f64().map(float_to_integer).unwrap_or(0)),
        Value::String(s) => match numeric_prefix(s) {
            Some(prefix) => prefix
                .parse::<i64>()
                .unwrap_or_else(|_| prefix.parse::<f64>().map(float_to_integer).unwrap_or(0)),
            None => 0,
        },
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
    }
}

fn float_to_integer(f: f64) -> i64 {
    if f.is_finite() {
        f.trunc() as i64
    } else {
        0
    }
}

fn to_double(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => numeric_prefix(s)
            .and_then(|prefix| prefix.parse::<f64>().ok())
            .unwrap_or(0.0),
        Value::Array(items) => f64::from(u8::from(!items.is_empty())),
        Value::Object(map) => f64::from(u8::from(!map.is_empty())),
    }
}

/// String cast. Containers are rendered as compact JSON.
fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => float_to_text(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Significant digits used when a float is cast to string.
const FLOAT_PRECISION: usize = 14;

/// Float rendering of the legacy string cast: 14 significant digits, no
/// trailing zeros, and `1.0E+20` notation for exponents below -4 or of 14
/// and more.
fn float_to_text(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", FLOAT_PRECISION - 1, f);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if f < 0.0 { "-" } else { "" };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    if exponent < -4 || exponent >= FLOAT_PRECISION as i32 {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{first}.{rest}E{exp_sign}{}", exponent.unsigned_abs())
    } else if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        format!("{sign}0.{zeros}{digits}")
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            format!("{sign}{digits}{}", "0".repeat(int_len - digits.len()))
        } else {
            format!("{sign}{}.{}", &digits[..int_len], &digits[int_len..])
        }
    }
}

/// Numbers (and numeric strings) within i64 range are Unix timestamps and
/// are rendered as RFC 3339 in UTC; anything else goes through the string
/// cast unchanged. Arbitrary date strings are not parsed.
fn to_datetime(value: &Value) -> String {
    let timestamp = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(float_in_i64_range)),
        Value::String(s) if is_numeric(s) => {
            let trimmed = s.trim_matches(PHP_WHITESPACE);
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(float_in_i64_range))
        }
        _ => None,
    };

    timestamp
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
        .unwrap_or_else(|| to_text(value))
}

fn float_in_i64_range(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

const PHP_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Longest leading numeric literal of `s` (after leading whitespace), e.g.
/// `"12abc"` → `"12"`, `" -1.5e3x"` → `"-1.5e3"`.
pub(crate) fn numeric_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start_matches(PHP_WHITESPACE);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Whole-string numeric check: surrounding whitespace allowed, nothing else.
pub(crate) fn is_numeric(s: &str) -> bool {
    match numeric_prefix(s) {
        Some(prefix) => {
            let rest_start = s.len() - s.trim_start_matches(PHP_WHITESPACE).len() + prefix.len();
            s[rest_start..].trim_matches(PHP_WHITESPACE).is_empty()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ParamKind::*;
    use serde_json::json;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::new("id", Integer),
        ParamSpec::new("name", Str),
        ParamSpec::new("price", Double),
        ParamSpec::new("when", DateTime),
        ParamSpec::new("blob", Binary),
        ParamSpec::new("extra", Passthrough),
    ];

    #[test]
    fn test_casts_per_kind() {
        let out = coerce_arguments(
            &[json!("42"), json!(7), json!("3.14"), json!(1700000000), json!("AAEC"), json!([1, 2])],
            PARAMS,
        );
        assert_eq!(out[0], json!(42));
        assert_eq!(out[1], json!("7"));
        assert_eq!(out[2], json!(3.14));
        assert_eq!(out[3], json!("2023-11-14T22:13:20+00:00"));
        assert_eq!(out[4], json!("AAEC"));
        assert_eq!(out[5], json!([1, 2]));
    }

    #[test]
    fn test_extra_arguments_dropped() {
        let params = &PARAMS[..2];
        let out = coerce_arguments(&[json!(1), json!("a"), json!("dropped"), json!(9)], params);
        assert_eq!(out, vec![json!(1), json!("a")]);
    }

    #[test]
    fn test_missing_arguments_not_produced() {
        let out = coerce_arguments(&[json!(1)], PARAMS);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_datetime_passthrough_for_date_strings() {
        assert_eq!(coerce_value(&json!("2024-01-01"), DateTime), json!("2024-01-01"));
        assert_eq!(coerce_value(&json!("1700000000"), DateTime), json!("2023-11-14T22:13:20+00:00"));
        assert_eq!(coerce_value(&json!(0), DateTime), json!("1970-01-01T00:00:00+00:00"));
        assert_eq!(coerce_value(&Value::Null, DateTime), json!(""));
    }

    #[test]
    fn test_datetime_out_of_range_falls_back_to_text() {
        assert_eq!(coerce_value(&json!("1e30"), DateTime), json!("1e30"));
    }

    #[test]
    fn test_loose_integer_cast() {
        assert_eq!(coerce_value(&json!("12abc"), Integer), json!(12));
        assert_eq!(coerce_value(&json!("abc"), Integer), json!(0));
        assert_eq!(coerce_value(&json!(" 8"), Integer), json!(8));
        assert_eq!(coerce_value(&json!(9.99), Integer), json!(9));
        assert_eq!(coerce_value(&json!("1e3"), Integer), json!(1000));
        assert_eq!(coerce_value(&json!(true), Integer), json!(1));
        assert_eq!(coerce_value(&Value::Null, Integer), json!(0));
    }

    #[test]
    fn test_string_cast() {
        assert_eq!(coerce_value(&json!(false), Str), json!(""));
        assert_eq!(coerce_value(&json!(2.0), Str), json!("2"));
        assert_eq!(coerce_value(&json!(2.5), Str), json!("2.5"));
        assert_eq!(coerce_value(&json!({"a": 1}), Str), json!("{\"a\":1}"));
    }

    #[test]
    fn test_float_string_cast_uses_fourteen_digits() {
        assert_eq!(coerce_value(&json!(0.1 + 0.2), Str), json!("0.3"));
        assert_eq!(coerce_value(&json!(1e20), Str), json!("1.0E+20"));
        assert_eq!(coerce_value(&json!(1e14), Str), json!("1.0E+14"));
        assert_eq!(coerce_value(&json!(123456789012.5), Str), json!("123456789012.5"));
        assert_eq!(coerce_value(&json!(-1.5e-7), Str), json!("-1.5E-7"));
        assert_eq!(coerce_value(&json!(0.0001), Str), json!("0.0001"));
        assert_eq!(coerce_value(&json!(1.0 / 3.0), Str), json!("0.33333333333333"));
        assert_eq!(coerce_value(&json!(-0.0), Str), json!("-0"));
        assert_eq!(coerce_value(&json!(1200.0), Str), json!("1200"));
    }

    #[test]
    fn test_numeric_helpers() {
        assert_eq!(numeric_prefix("  -1.5e3x"), Some("-1.5e3"));
        assert_eq!(numeric_prefix(".5"), Some(".5"));
        assert_eq!(numeric_prefix("1e"), Some("1"));
        assert_eq!(numeric_prefix("-"), None);
        assert!(is_numeric(" 0 "));
        assert!(is_numeric("0.0"));
        assert!(!is_numeric("12abc"));
        assert!(!is_numeric(""));
    }
}
