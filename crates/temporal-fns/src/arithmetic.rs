//! Calendar arithmetic on legacy dates.
//!
//! Every operation reads its date argument as a wall-clock value in the
//! configured zone, shifts it with calendar rules, and reads the result back
//! in the same zone. A date argument that cannot be interpreted, a count that
//! is not a number, or a result outside the representable range all give
//! [`LegacyDate::INVALID`]; none of these operations fail.
//!
//! # Functions
//!
//! - [`add`]: Add a [`Duration`]
//! - [`add_days`]: Add calendar days (wall-clock, not 24-hour blocks)
//! - [`add_months`]: Add months, clamping to the end of shorter months
//! - [`add_business_days`]: Add Monday–Friday days, skipping weekends

use chrono::NaiveDateTime;

use crate::convert::{coerce_date_time, legacy_from, legacy_from_local, to_integer};
use crate::duration::Duration;
use crate::options::Options;
use crate::value::{LegacyDate, Value};
use crate::weekday::{is_saturday_day, is_sunday_day, is_weekend_day};

// ── add ─────────────────────────────────────────────────────────────────────

/// Add a duration to a date, reading wall-clock values in the system zone.
///
/// See [`add_with_options`].
pub fn add(date: impl Into<Value>, duration: Duration) -> LegacyDate {
    add_with_options(date, duration, &Options::default())
}

/// Add years, months, weeks, days, hours, minutes and seconds to a date.
///
/// The clock units are applied first, then years and months, then weeks and
/// days (see [`Duration::add_to`]).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use temporal_fns::{add_with_options, to_temporal_date_time_with_options, Duration, Options};
///
/// let options = Options::in_zone("Europe/Paris").unwrap();
/// let start = NaiveDateTime::parse_from_str("2014-09-01T10:19:50", "%Y-%m-%dT%H:%M:%S").unwrap();
/// let duration = Duration {
///     years: 2,
///     months: 9,
///     weeks: 1,
///     days: 7,
///     hours: 5,
///     minutes: 9,
///     seconds: 30,
/// };
/// let result = add_with_options(start, duration, &options);
/// let local = to_temporal_date_time_with_options(result, &options).unwrap();
/// assert_eq!(local.to_string(), "2017-06-15 15:29:20");
/// ```
pub fn add_with_options(
    date: impl Into<Value>,
    duration: Duration,
    options: &Options,
) -> LegacyDate {
    add_value(&date.into(), &duration, options)
}

pub(crate) fn add_value(date: &Value, duration: &Duration, options: &Options) -> LegacyDate {
    let Ok(start) = coerce_date_time(date, "add", options) else {
        return LegacyDate::INVALID;
    };
    finish(duration.add_to(start), options)
}

// ── add_days ────────────────────────────────────────────────────────────────

pub fn add_days(date: impl Into<Value>, amount: impl Into<Value>) -> LegacyDate {
    add_days_with_options(date, amount, &Options::default())
}

/// Add calendar days to a date.
///
/// The wall-clock time is kept across daylight-saving changes. A count of
/// zero returns the input date unchanged.
pub fn add_days_with_options(
    date: impl Into<Value>,
    amount: impl Into<Value>,
    options: &Options,
) -> LegacyDate {
    add_days_value(&date.into(), &amount.into(), options)
}

pub(crate) fn add_days_value(date: &Value, amount: &Value, options: &Options) -> LegacyDate {
    shift_by_count(date, amount, "add_days", options, Duration::days)
}

// ── add_months ──────────────────────────────────────────────────────────────

pub fn add_months(date: impl Into<Value>, amount: impl Into<Value>) -> LegacyDate {
    add_months_with_options(date, amount, &Options::default())
}

/// Add calendar months to a date.
///
/// The day of month is kept when the target month has it and clamped to the
/// month's last day otherwise: January 31 plus one month is February 28 (or
/// 29). A count of zero returns the input date unchanged.
pub fn add_months_with_options(
    date: impl Into<Value>,
    amount: impl Into<Value>,
    options: &Options,
) -> LegacyDate {
    add_months_value(&date.into(), &amount.into(), options)
}

pub(crate) fn add_months_value(date: &Value, amount: &Value, options: &Options) -> LegacyDate {
    shift_by_count(date, amount, "add_months", options, Duration::months)
}

// ── add_business_days ───────────────────────────────────────────────────────

pub fn add_business_days(date: impl Into<Value>, amount: impl Into<Value>) -> LegacyDate {
    add_business_days_with_options(date, amount, &Options::default())
}

/// Add business days (Monday to Friday) to a date, skipping weekends.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use temporal_fns::{add_business_days_with_options, to_temporal_date_with_options, Options};
///
/// let options = Options::in_zone("UTC").unwrap();
/// let monday = NaiveDate::from_ymd_opt(2014, 9, 1).unwrap();
/// let result = add_business_days_with_options(monday, 10, &options);
/// assert_eq!(
///     to_temporal_date_with_options(result, &options),
///     Ok(NaiveDate::from_ymd_opt(2014, 9, 15).unwrap())
/// );
/// ```
pub fn add_business_days_with_options(
    date: impl Into<Value>,
    amount: impl Into<Value>,
    options: &Options,
) -> LegacyDate {
    add_business_days_value(&date.into(), &amount.into(), options)
}

pub(crate) fn add_business_days_value(
    date: &Value,
    amount: &Value,
    options: &Options,
) -> LegacyDate {
    let Ok(start) = coerce_date_time(date, "add_business_days", options) else {
        return LegacyDate::INVALID;
    };
    let Some(amount) = to_integer(amount) else {
        return LegacyDate::INVALID;
    };
    if amount == 0 {
        return legacy_from(date, "add_business_days", options);
    }
    finish(walk_business_days(start, amount), options)
}

fn walk_business_days(start: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let started_on_weekend = is_weekend_day(start.date());
    let sign = amount.signum();

    // Each whole week covers exactly five business days.
    let full_weeks = i64::try_from(amount.unsigned_abs() / 5).ok()?;
    let weeks = if sign >= 0 { full_weeks } else { -full_weeks };
    let mut date = shift(start, Duration::weeks(weeks))?;

    let mut rest_days = (amount % 5).unsigned_abs();
    while rest_days > 0 {
        date = shift(date, Duration::days(sign))?;
        if !is_weekend_day(date.date()) {
            rest_days -= 1;
        }
    }

    // Starting on a weekend and moving a multiple of five business days
    // lands on a weekend again; step to the nearest business day.
    if started_on_weekend && is_weekend_day(date.date()) {
        if is_saturday_day(date.date()) {
            date = shift(date, Duration::days(if sign < 0 { 2 } else { -1 }))?;
        }
        if is_sunday_day(date.date()) {
            date = shift(date, Duration::days(if sign < 0 { 1 } else { -2 }))?;
        }
    }

    Some(date)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Shared body of [`add_days`] and [`add_months`].
fn shift_by_count(
    date: &Value,
    amount: &Value,
    function: &'static str,
    options: &Options,
    unit: fn(i64) -> Duration,
) -> LegacyDate {
    let Ok(start) = coerce_date_time(date, function, options) else {
        return LegacyDate::INVALID;
    };
    let Some(amount) = to_integer(amount) else {
        return LegacyDate::INVALID;
    };
    if amount == 0 {
        // No-op on the caller's own value; it is never re-read through the zone.
        return legacy_from(date, function, options);
    }
    finish(unit(amount).add_to(start), options)
}

fn shift(date: NaiveDateTime, duration: Duration) -> Option<NaiveDateTime> {
    duration.add_to(date)
}

fn finish(result: Option<NaiveDateTime>, options: &Options) -> LegacyDate {
    result.map_or(LegacyDate::INVALID, |local| legacy_from_local(&local, options))
}
