//! Day-of-week predicates.
//!
//! Each predicate reads its argument at date granularity. An argument that
//! cannot be read as a date is not a weekend day, so the predicates return
//! `false` instead of failing.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::convert::coerce_date;
use crate::options::Options;
use crate::value::Value;

/// ISO day numbers: Monday = 1 … Sunday = 7.
const SATURDAY: u32 = 6;
const SUNDAY: u32 = 7;

/// Does the date fall on a Saturday or Sunday?
///
/// ```
/// use chrono::NaiveDate;
/// use temporal_fns::is_weekend;
///
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2014, 10, 5).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2014, 10, 6).unwrap()));
/// ```
pub fn is_weekend(date: impl Into<Value>) -> bool {
    is_weekend_with_options(date, &Options::default())
}

pub fn is_weekend_with_options(date: impl Into<Value>, options: &Options) -> bool {
    check(&date.into(), "is_weekend", options, is_weekend_day)
}

pub fn is_saturday(date: impl Into<Value>) -> bool {
    is_saturday_with_options(date, &Options::default())
}

pub fn is_saturday_with_options(date: impl Into<Value>, options: &Options) -> bool {
    check(&date.into(), "is_saturday", options, is_saturday_day)
}

pub fn is_sunday(date: impl Into<Value>) -> bool {
    is_sunday_with_options(date, &Options::default())
}

pub fn is_sunday_with_options(date: impl Into<Value>, options: &Options) -> bool {
    check(&date.into(), "is_sunday", options, is_sunday_day)
}

pub(crate) fn is_weekend_day(date: NaiveDate) -> bool {
    matches!(date.weekday().number_from_monday(), SATURDAY | SUNDAY)
}

pub(crate) fn is_saturday_day(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

pub(crate) fn is_sunday_day(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub(crate) fn check(
    value: &Value,
    function: &'static str,
    options: &Options,
    predicate: impl Fn(NaiveDate) -> bool,
) -> bool {
    coerce_date(value, function, options).is_ok_and(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingSink;
    use crate::value::LegacyDate;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_days() {
        // Oct 4-5 2014 is a Saturday and Sunday
        assert!(is_weekend(date(2014, 10, 4)));
        assert!(is_weekend(date(2014, 10, 5)));
    }

    #[test]
    fn test_weekdays_are_not_weekend() {
        for day in 6..=10 {
            assert!(!is_weekend(date(2014, 10, day)), "Oct {day}");
        }
    }

    #[test]
    fn test_date_time_uses_its_date() {
        let dt = NaiveDateTime::parse_from_str("2014-10-05T23:59:59", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert!(is_weekend(dt));
        assert!(is_sunday(dt));
        assert!(!is_saturday(dt));
    }

    #[test]
    fn test_timestamp_in_zone() {
        let options = Options::in_zone("UTC").unwrap();
        // 2014-10-04T12:00:00Z, a Saturday
        assert!(is_saturday_with_options(1_412_424_000_000_i64, &options));
        assert!(is_weekend_with_options(1_412_424_000_000_i64, &options));
        // 21:00 the same Saturday in Tokyo
        let tokyo = Options::in_zone("Asia/Tokyo").unwrap();
        assert!(is_saturday_with_options(1_412_424_000_000_i64, &tokyo));
    }

    #[test]
    fn test_saturday_and_sunday() {
        assert!(is_saturday(date(2014, 10, 4)));
        assert!(!is_saturday(date(2014, 10, 5)));
        assert!(is_sunday(date(2014, 10, 5)));
        assert!(!is_sunday(date(2014, 10, 6)));
    }

    #[test]
    fn test_invalid_input_is_false() {
        assert!(!is_weekend(LegacyDate::INVALID));
        assert!(!is_weekend(f64::NAN));
        assert!(!is_weekend(Value::Null));
        assert!(!is_saturday(Value::Undefined));
        assert!(!is_sunday(false));
    }

    #[test]
    fn test_reading_past_calendar_range_is_false() {
        let latest = LegacyDate::from_millis(NaiveDateTime::MAX.and_utc().timestamp_millis());
        let tokyo = Options::in_zone("Asia/Tokyo").unwrap();
        assert!(!is_weekend_with_options(latest, &tokyo));
        assert!(!is_saturday_with_options(latest, &tokyo));
        assert!(!is_sunday_with_options(latest, &tokyo));
        let earliest = LegacyDate::from_millis(NaiveDateTime::MIN.and_utc().timestamp_millis());
        let new_york = Options::in_zone("America/New_York").unwrap();
        assert!(!is_weekend_with_options(earliest, &new_york));
    }

    #[test]
    fn test_string_is_false_and_warns_once() {
        let sink = RecordingSink::shared();
        let options = Options::default().with_diagnostics(sink.clone());
        assert!(!is_weekend_with_options("2014-10-05", &options));
        let seen = sink.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].function, "is_weekend");
    }
}
