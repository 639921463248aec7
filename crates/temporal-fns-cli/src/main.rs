//! `temporal-fns`: run a calendar helper from the shell.
//!
//! ```text
//! temporal-fns --tz America/New_York add_business_days 2014-09-01 10
//! 2014-09-15T00:00:00.000-04:00
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use clap::Parser;
use flexi_logger::Logger;
use serde_json::json;
use temporal_fns::{call, Duration, LegacyDate, LogSink, Options, Value, Zone};

#[derive(Parser, Debug)]
#[command(
    name = "temporal-fns",
    version,
    about = "Calendar helpers: add, add_days, add_months, add_business_days, is_weekend, ...",
    after_help = "Arguments: @<ms> legacy date, <number>, YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS[.fff]], \
                  RFC 3339 instant, {\"days\": 1} duration, true/false/null/undefined. \
                  Anything else is passed as a string."
)]
struct Cli {
    /// IANA time zone for reading and printing wall-clock values, or "local"
    #[arg(long, default_value = "local")]
    tz: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Function to run (add, add_days, add_months, add_business_days, is_weekend,
    /// is_saturday, is_sunday, to_date, to_temporal_date, to_temporal_date_time)
    function: String,

    /// Positional arguments for the function
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")
        .context("invalid log specification")?
        .log_to_stderr()
        .start()
        .context("failed to start logger")?;

    let cli = Cli::parse();
    let options = Options::in_zone(&cli.tz)?.with_diagnostics(Arc::new(LogSink));

    let args = cli
        .args
        .iter()
        .map(|raw| parse_arg(raw))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("{} {:?} in {}", cli.function, args, options.time_zone);

    let result = call(&cli.function, &args, &options)?;

    if cli.json {
        println!("{}", to_json(&result, options.time_zone));
    } else {
        println!("{}", render(&result, options.time_zone));
    }
    Ok(())
}

// ── Argument parsing ────────────────────────────────────────────────────────

fn parse_arg(raw: &str) -> Result<Value> {
    let s = raw.trim();

    if let Some(millis) = s.strip_prefix('@') {
        let millis: f64 = millis
            .parse()
            .with_context(|| format!("invalid timestamp in '{raw}'"))?;
        return Ok(Value::Date(LegacyDate::from_millis_f64(millis)));
    }

    if s.starts_with('{') {
        let duration: Duration =
            serde_json::from_str(s).with_context(|| format!("invalid duration '{raw}'"))?;
        return Ok(Value::Duration(duration));
    }

    let value = match s {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        "undefined" => Value::Undefined,
        "NaN" => Value::Number(f64::NAN),
        _ => parse_number(s)
            .or_else(|| parse_calendar(s))
            .unwrap_or_else(|| Value::String(raw.to_string())),
    };
    Ok(value)
}

fn parse_number(s: &str) -> Option<Value> {
    let first = s.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
        return None;
    }
    s.parse::<f64>().ok().map(Value::Number)
}

fn parse_calendar(s: &str) -> Option<Value> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Value::PlainDate(date));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Value::PlainDateTime(datetime));
        }
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| Value::Instant(dt.with_timezone(&Utc)))
}

// ── Output ──────────────────────────────────────────────────────────────────

fn render(value: &Value, zone: Zone) -> String {
    match value {
        Value::Date(date) => date
            .to_instant()
            .map_or_else(|| "Invalid Date".to_string(), |i| format_instant(i, zone)),
        Value::Instant(instant) => format_instant(*instant, zone),
        Value::PlainDate(date) => date.to_string(),
        Value::PlainDateTime(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) | Value::NumberObject(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Duration(d) => serde_json::to_string(d).unwrap_or_default(),
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
    }
}

fn to_json(value: &Value, zone: Zone) -> serde_json::Value {
    match value {
        Value::Date(date) => json!({
            "type": value.type_name(),
            "valid": date.is_valid(),
            "timestamp": date.timestamp_millis(),
            "value": date.to_instant().map(|i| format_instant(i, zone)),
        }),
        Value::Bool(b) => json!({ "type": value.type_name(), "value": b }),
        other => json!({ "type": other.type_name(), "value": render(other, zone) }),
    }
}

/// RFC 3339 in `zone`, or in UTC when the zone's reading is past the
/// calendar's range.
fn format_instant(instant: DateTime<Utc>, zone: Zone) -> String {
    if zone.to_local(&instant).is_none() {
        return instant.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    match zone {
        Zone::Local => instant
            .with_timezone(&Local)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        Zone::Named(tz) => instant
            .with_timezone(&tz)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
