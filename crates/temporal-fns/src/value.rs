//! Host values accepted at the API boundary.
//!
//! Every public entry point classifies its arguments through [`Value`] before
//! any arithmetic runs. The set of variants is closed: anything a caller can
//! hand to a function is one of these, and each function decides which
//! variants it understands.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::duration::Duration;

/// Largest magnitude of an epoch-millisecond timestamp a legacy date can hold
/// (±100,000,000 days around the epoch).
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

// ── LegacyDate ──────────────────────────────────────────────────────────────

/// A plain epoch-millisecond date, the type every arithmetic function returns.
///
/// A `LegacyDate` either holds an instant or is the invalid-date sentinel
/// ([`LegacyDate::INVALID`]). Functions return the sentinel instead of an
/// error when their date argument cannot be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyDate {
    millis: Option<i64>,
}

impl LegacyDate {
    /// The "not a valid date" sentinel.
    pub const INVALID: LegacyDate = LegacyDate { millis: None };

    /// Build a date from an integral epoch-millisecond timestamp.
    ///
    /// Timestamps outside ±[`MAX_TIMESTAMP_MILLIS`], or beyond what the
    /// calendar engine can represent, give [`LegacyDate::INVALID`].
    pub fn from_millis(millis: i64) -> Self {
        if millis.unsigned_abs() > MAX_TIMESTAMP_MILLIS as u64
            || DateTime::from_timestamp_millis(millis).is_none()
        {
            return Self::INVALID;
        }
        LegacyDate {
            millis: Some(millis),
        }
    }

    /// Build a date from a floating-point timestamp, truncating fractional
    /// milliseconds toward zero. NaN and infinities give the sentinel.
    pub fn from_millis_f64(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_TIMESTAMP_MILLIS as f64 {
            return Self::INVALID;
        }
        Self::from_millis(millis.trunc() as i64)
    }

    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self::from_millis(instant.timestamp_millis())
    }

    pub fn is_valid(&self) -> bool {
        self.millis.is_some()
    }

    /// Epoch milliseconds, or `None` for the sentinel.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.millis
    }

    /// The absolute instant this date denotes.
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        self.millis.and_then(DateTime::from_timestamp_millis)
    }
}

impl From<DateTime<Utc>> for LegacyDate {
    fn from(instant: DateTime<Utc>) -> Self {
        LegacyDate::from_instant(instant)
    }
}

impl fmt::Display for LegacyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_instant() {
            Some(instant) => f.write_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => f.write_str("Invalid Date"),
        }
    }
}

// ── Value ───────────────────────────────────────────────────────────────────

/// A dynamically typed argument or result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    /// A primitive number.
    Number(f64),
    /// A boxed number object. Coerces exactly like [`Value::Number`].
    NumberObject(f64),
    String(String),
    /// A legacy epoch-millisecond date.
    Date(LegacyDate),
    /// A zone-independent point in time.
    Instant(DateTime<Utc>),
    /// A calendar date with no time or zone.
    PlainDate(NaiveDate),
    /// A wall-clock calendar date-time with no zone.
    PlainDateTime(NaiveDateTime),
    Duration(Duration),
}

impl Value {
    /// Short lowercase name of the variant, used in diagnostics and CLI output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::NumberObject(_) => "number object",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Instant(_) => "instant",
            Value::PlainDate(_) => "plain date",
            Value::PlainDateTime(_) => "plain datetime",
            Value::Duration(_) => "duration",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<LegacyDate> for Value {
    fn from(date: LegacyDate) -> Self {
        Value::Date(date)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Instant(instant)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::PlainDate(date)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(datetime: NaiveDateTime) -> Self {
        Value::PlainDateTime(datetime)
    }
}

impl From<Duration> for Value {
    fn from(duration: Duration) -> Self {
        Value::Duration(duration)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}
