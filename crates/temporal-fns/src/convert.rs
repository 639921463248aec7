//! Conversions between host values and canonical calendar values.
//!
//! - [`to_temporal_date_time`] / [`to_temporal_date`]: host value → wall-clock
//!   calendar value in the configured zone, or [`DateError::InvalidDate`].
//! - [`to_date`]: calendar or host value → [`LegacyDate`]; never fails, bad
//!   input yields [`LegacyDate::INVALID`].
//! - [`to_integer`]: host value → truncated integer count.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::diagnostics::Diagnostic;
use crate::error::{DateError, Result};
use crate::options::Options;
use crate::value::{LegacyDate, Value};

// ── to_temporal_date_time ───────────────────────────────────────────────────

/// Convert a value to a wall-clock date-time in the system zone.
///
/// See [`to_temporal_date_time_with_options`].
pub fn to_temporal_date_time(argument: impl Into<Value>) -> Result<NaiveDateTime> {
    to_temporal_date_time_with_options(argument, &Options::default())
}

/// Convert a value to a wall-clock date-time.
///
/// - A plain date-time is returned as is; a plain date becomes its midnight.
/// - A legacy date, a number or a boxed number is read as epoch milliseconds
///   and converted to wall-clock time in `options.time_zone`. So is an
///   instant.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] for anything else, including NaN and
/// out-of-range timestamps. A string argument additionally reports a
/// diagnostic to `options.diagnostics`.
///
/// # Examples
///
/// ```
/// use temporal_fns::{to_temporal_date_time_with_options, Options};
///
/// let options = Options::in_zone("UTC").unwrap();
/// let dt = to_temporal_date_time_with_options(1_392_118_230_000_i64, &options).unwrap();
/// assert_eq!(dt.to_string(), "2014-02-11 11:30:30");
/// ```
pub fn to_temporal_date_time_with_options(
    argument: impl Into<Value>,
    options: &Options,
) -> Result<NaiveDateTime> {
    coerce_date_time(&argument.into(), "to_temporal_date_time", options)
}

// ── to_temporal_date ────────────────────────────────────────────────────────

/// Convert a value to a calendar date in the system zone.
///
/// See [`to_temporal_date_with_options`].
pub fn to_temporal_date(argument: impl Into<Value>) -> Result<NaiveDate> {
    to_temporal_date_with_options(argument, &Options::default())
}

/// Convert a value to a calendar date.
///
/// A plain date is returned as is and a plain date-time gives its date part.
/// Timestamps are read in `options.time_zone`.
///
/// # Errors
///
/// Same as [`to_temporal_date_time_with_options`].
pub fn to_temporal_date_with_options(
    argument: impl Into<Value>,
    options: &Options,
) -> Result<NaiveDate> {
    coerce_date(&argument.into(), "to_temporal_date", options)
}

// ── to_date ─────────────────────────────────────────────────────────────────

/// Convert a value to a legacy date, reading wall-clock values in the system
/// zone.
pub fn to_date(argument: impl Into<Value>) -> LegacyDate {
    to_date_with_options(argument, &Options::default())
}

/// Convert a value to a legacy date.
///
/// - A legacy date is copied.
/// - An instant converts through its epoch milliseconds.
/// - A plain date-time (or plain date, at midnight) is read in
///   `options.time_zone`.
/// - A number or boxed number is used as epoch milliseconds.
///
/// Anything else gives [`LegacyDate::INVALID`]; strings also report a
/// diagnostic.
pub fn to_date_with_options(argument: impl Into<Value>, options: &Options) -> LegacyDate {
    legacy_from(&argument.into(), "to_date", options)
}

// ── to_integer ──────────────────────────────────────────────────────────────

/// Interpret a value as an integer count, truncating toward zero.
///
/// Numbers are used directly, numeric strings are parsed (an empty string is
/// zero) and legacy dates give their timestamp. Everything else, and NaN,
/// gives `None`. Infinite values saturate.
pub fn to_integer(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) | Value::NumberObject(n) => *n,
        Value::String(s) => parse_number(s),
        Value::Date(date) => date.timestamp_millis().map_or(f64::NAN, |ms| ms as f64),
        _ => f64::NAN,
    };
    if number.is_nan() {
        None
    } else {
        Some(number.trunc() as i64)
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

pub(crate) fn coerce_date_time(
    value: &Value,
    function: &'static str,
    options: &Options,
) -> Result<NaiveDateTime> {
    match value {
        Value::PlainDateTime(dt) => Ok(*dt),
        Value::PlainDate(date) => date.and_hms_opt(0, 0, 0).ok_or(DateError::InvalidDate),
        _ => wall_clock_of(value, function, options),
    }
}

pub(crate) fn coerce_date(
    value: &Value,
    function: &'static str,
    options: &Options,
) -> Result<NaiveDate> {
    match value {
        Value::PlainDate(date) => Ok(*date),
        Value::PlainDateTime(dt) => Ok(dt.date()),
        _ => wall_clock_of(value, function, options).map(|dt| dt.date()),
    }
}

pub(crate) fn legacy_from(value: &Value, function: &'static str, options: &Options) -> LegacyDate {
    match value {
        Value::Date(date) => *date,
        Value::Instant(instant) => LegacyDate::from_instant(*instant),
        Value::PlainDateTime(dt) => legacy_from_local(dt, options),
        Value::PlainDate(date) => date
            .and_hms_opt(0, 0, 0)
            .map_or(LegacyDate::INVALID, |dt| legacy_from_local(&dt, options)),
        Value::Number(n) | Value::NumberObject(n) => LegacyDate::from_millis_f64(*n),
        other => {
            warn_if_string(other, function, options);
            LegacyDate::INVALID
        }
    }
}

/// Read a wall-clock value in the configured zone.
pub(crate) fn legacy_from_local(local: &NaiveDateTime, options: &Options) -> LegacyDate {
    options
        .time_zone
        .to_instant(local)
        .map_or(LegacyDate::INVALID, LegacyDate::from_instant)
}

/// The absolute instant of a timestamp-like value.
fn instant_of(value: &Value, function: &'static str, options: &Options) -> Result<DateTime<Utc>> {
    let date = match value {
        Value::Date(date) => *date,
        Value::Instant(instant) => return Ok(*instant),
        Value::Number(n) | Value::NumberObject(n) => LegacyDate::from_millis_f64(*n),
        other => {
            warn_if_string(other, function, options);
            return Err(DateError::InvalidDate);
        }
    };
    date.to_instant().ok_or(DateError::InvalidDate)
}

/// Wall-clock reading of a timestamp-like value in the configured zone.
fn wall_clock_of(
    value: &Value,
    function: &'static str,
    options: &Options,
) -> Result<NaiveDateTime> {
    let instant = instant_of(value, function, options)?;
    options
        .time_zone
        .to_local(&instant)
        .ok_or(DateError::InvalidDate)
}

fn warn_if_string(value: &Value, function: &'static str, options: &Options) {
    if matches!(value, Value::String(_)) {
        options.warn(Diagnostic::string_argument(function));
    }
}

/// Parse a numeric string the way the host's `Number()` does for the forms
/// that matter here: decimal, exponent, hex, and signed `Infinity`.
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => {
            if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                return u64::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
            }
            // Rust accepts "inf" and "nan" spellings; the host does not.
            if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
                return f64::NAN;
            }
            s.parse().unwrap_or(f64::NAN)
        }
    }
}
