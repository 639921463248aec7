//! Call configuration: the time zone used to read and write wall-clock values,
//! and where diagnostics go.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::diagnostics::{Diagnostic, DiagnosticSink, NoopSink};
use crate::error::DateError;

// ── Zone ────────────────────────────────────────────────────────────────────

/// The zone in which epoch timestamps become wall-clock values and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host system's local zone.
    #[default]
    Local,
    /// A named IANA zone.
    Named(Tz),
}

impl Zone {
    /// Wall-clock reading of `instant` in this zone.
    ///
    /// `None` when the zone offset pushes the reading past the calendar's
    /// range, which can happen within a day of either end.
    pub fn to_local(&self, instant: &DateTime<Utc>) -> Option<NaiveDateTime> {
        match self {
            Zone::Local => local_reading(&chrono::Local, instant),
            Zone::Named(tz) => local_reading(tz, instant),
        }
    }

    /// The instant at which this zone's clocks read `local`.
    ///
    /// Ambiguous readings (clocks turned back) resolve to the earlier instant.
    /// Readings inside a gap (clocks turned forward) use the offset in force
    /// before the gap, landing the same distance past it.
    pub fn to_instant(&self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Local => resolve_local(&chrono::Local, local),
            Zone::Named(tz) => resolve_local(tz, local),
        }
    }
}

impl FromStr for Zone {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        s.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| DateError::InvalidTimeZone(format!("'{}'", s)))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

fn local_reading<T: TimeZone>(tz: &T, instant: &DateTime<Utc>) -> Option<NaiveDateTime> {
    let utc = instant.naive_utc();
    let offset = tz.offset_from_utc_datetime(&utc).fix();
    utc.checked_add_offset(offset)
}

fn resolve_local<T: TimeZone>(tz: &T, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => {
            let before_gap = local.checked_sub_signed(TimeDelta::days(1))?;
            let offset = tz.offset_from_utc_datetime(&before_gap).fix();
            let utc =
                local.checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc() as i64))?;
            Some(utc.and_utc())
        }
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// Options for the `*_with_options` variants of every function.
#[derive(Clone)]
pub struct Options {
    pub time_zone: Zone,
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reading wall-clock values in the named zone (`"local"` for the
    /// system zone).
    pub fn in_zone(name: &str) -> Result<Self, DateError> {
        Ok(Self::default().with_time_zone(name.parse()?))
    }

    pub fn with_time_zone(mut self, time_zone: Zone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub(crate) fn warn(&self, diagnostic: Diagnostic) {
        self.diagnostics.warn(&diagnostic);
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            time_zone: Zone::default(),
            diagnostics: Arc::new(NoopSink),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("time_zone", &self.time_zone)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn new_york() -> Zone {
        Zone::Named(chrono_tz::America::New_York)
    }

    #[test]
    fn test_parse_named_zone() {
        assert_eq!("America/New_York".parse::<Zone>().unwrap(), new_york());
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!(" LOCAL ".parse::<Zone>().unwrap(), Zone::Local);
    }

    #[test]
    fn test_parse_invalid_zone() {
        let err = "Mars/Olympus_Mons".parse::<Zone>().unwrap_err();
        assert!(matches!(err, DateError::InvalidTimeZone(_)));
    }

    #[test]
    fn test_to_local_and_back() {
        let zone = new_york();
        // Jan 15 is EST (UTC-5)
        let instant = Utc.with_ymd_and_hms(2026, 1, 15, 19, 0, 0).unwrap();
        let wall = zone.to_local(&instant).unwrap();
        assert_eq!(wall, local(2026, 1, 15, 14, 0));
        assert_eq!(zone.to_instant(&wall), Some(instant));
    }

    #[test]
    fn test_gap_moves_forward() {
        // March 8, 2026: 02:30 does not exist in New York; EST offset applies.
        let instant = new_york().to_instant(&local(2026, 3, 8, 2, 30)).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 3, 8, 7, 30, 0).unwrap());
        assert_eq!(new_york().to_local(&instant), Some(local(2026, 3, 8, 3, 30)));
    }

    #[test]
    fn test_ambiguous_takes_earlier() {
        // November 1, 2026: 01:30 happens twice in New York; pick EDT.
        let instant = new_york().to_instant(&local(2026, 11, 1, 1, 30)).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 11, 1, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_to_local_past_calendar_range() {
        let latest = NaiveDateTime::MAX.and_utc();
        assert_eq!(Zone::Named(chrono_tz::Asia::Tokyo).to_local(&latest), None);
        assert_eq!(
            Zone::Named(chrono_tz::Etc::UTC).to_local(&latest),
            Some(NaiveDateTime::MAX)
        );
        let earliest = NaiveDateTime::MIN.and_utc();
        assert_eq!(new_york().to_local(&earliest), None);
    }

    #[test]
    fn test_options_in_zone() {
        let options = Options::in_zone("Asia/Tokyo").unwrap();
        assert_eq!(options.time_zone, Zone::Named(chrono_tz::Asia::Tokyo));
        assert!(Options::in_zone("Nowhere/Special").is_err());
    }

    #[test]
    fn test_zone_display() {
        assert_eq!(new_york().to_string(), "America/New_York");
        assert_eq!(Zone::Local.to_string(), "local");
    }
}
