//! Loose scalar conversions for raw item values.
//!
//! Item maps arrive from forms, JSON payloads and storage rows, so the same field may
//! hold `"3"`, `3` or `3.0`. Getters never fail: they coerce whatever is stored.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Converts a raw value into text.
///
/// * `null` → `""`
/// * `true`/`false` → `"1"`/`""`
/// * numbers → their decimal form, whole floats without a fraction (`1.0` → `"1"`)
/// * strings → borrowed as is
/// * arrays and objects → compact JSON
#[must_use]
pub fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null | Value::Bool(false) => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Number(n) => Cow::Owned(number_text(n)),
        Value::String(s) => Cow::Borrowed(s),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Converts a raw value into an integer.
///
/// * `null` → `0`, booleans → `0`/`1`
/// * integers as is (saturating above `i64::MAX`), floats truncated towards zero
/// * strings → the leading integer (`" 12abc"` → `12`), `0` without digits
/// * arrays → `0` when empty, `1` otherwise; objects → `1`
#[must_use]
pub fn as_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(truncate))
            .unwrap_or_default(),
        Value::String(s) => leading_int(s),
        Value::Array(a) => i64::from(!a.is_empty()),
        Value::Object(_) => 1,
    }
}

/// Floats beyond this magnitude are no longer exact integers.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.trunc() == f && f.abs() <= MAX_EXACT_FLOAT => {
            (f as i64).to_string()
        },
        _ => n.to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(f: f64) -> i64 {
    // `as` saturates at the bounds and maps NaN to 0.
    f.trunc() as i64
}

fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for d in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(d - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        };
    }
    acc
}
