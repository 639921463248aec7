//! Calendar durations and the arithmetic that applies them.

use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize};

/// Signed counts of calendar and clock units.
///
/// Unspecified units are zero. When deserialized, fractional counts are
/// truncated toward zero (floor for positive values, ceil for negative ones).
///
/// ```
/// use temporal_fns::Duration;
///
/// let d: Duration = serde_json::from_str(r#"{ "months": 1.9, "days": -2.5 }"#).unwrap();
/// assert_eq!(d, Duration { months: 1, days: -2, ..Default::default() });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Duration {
    #[serde(deserialize_with = "truncated")]
    pub years: i64,
    #[serde(deserialize_with = "truncated")]
    pub months: i64,
    #[serde(deserialize_with = "truncated")]
    pub weeks: i64,
    #[serde(deserialize_with = "truncated")]
    pub days: i64,
    #[serde(deserialize_with = "truncated")]
    pub hours: i64,
    #[serde(deserialize_with = "truncated")]
    pub minutes: i64,
    #[serde(deserialize_with = "truncated")]
    pub seconds: i64,
}

impl Duration {
    pub fn days(days: i64) -> Self {
        Duration {
            days,
            ..Default::default()
        }
    }

    pub fn weeks(weeks: i64) -> Self {
        Duration {
            weeks,
            ..Default::default()
        }
    }

    pub fn months(months: i64) -> Self {
        Duration {
            months,
            ..Default::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Duration::default()
    }

    /// Add this duration to a wall-clock date-time.
    ///
    /// The clock part is applied first and any whole days it spills over are
    /// carried. Years and months are then added together, clamping the day of
    /// month to the end of a shorter target month. Last come weeks, days and
    /// the carried days. Returns `None` if any step leaves the representable
    /// range.
    pub fn add_to(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        let clock = TimeDelta::try_hours(self.hours)?
            .checked_add(&TimeDelta::try_minutes(self.minutes)?)?
            .checked_add(&TimeDelta::try_seconds(self.seconds)?)?;
        let shifted = start.checked_add_signed(clock)?;
        let carried_days = (shifted.date() - start.date()).num_days();

        let total_months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let total_days = self
            .weeks
            .checked_mul(7)?
            .checked_add(self.days)?
            .checked_add(carried_days)?;

        let date = add_months(start.date(), total_months)?;
        let date = add_days(date, total_days)?;
        Some(date.and_time(shifted.time()))
    }
}

/// Add a signed number of calendar months, clamping to the last day of the
/// target month.
pub(crate) fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        date.checked_sub_months(magnitude)
    } else {
        date.checked_add_months(magnitude)
    }
}

pub(crate) fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

fn truncated<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "duration field must be finite, got {value}"
        )));
    }
    Ok(value.trunc() as i64)
}
