//! # temporal-fns
//!
//! Small, independent calendar helpers over legacy epoch-millisecond dates
//! and Temporal-style plain dates.
//!
//! Each function reads its date argument (a [`LegacyDate`], an epoch
//! millisecond number, an instant, or a plain date/date-time) as a wall-clock
//! value in the configured [`Zone`], does one piece of calendar arithmetic
//! with `chrono`, and hands back a [`LegacyDate`]. Bad dates produce
//! [`LegacyDate::INVALID`] (or `false` for predicates), never an error.
//!
//! ## Modules
//!
//! - [`arithmetic`]: `add`, `add_days`, `add_months`, `add_business_days`
//! - [`weekday`]: `is_weekend`, `is_saturday`, `is_sunday`
//! - [`convert`]: `to_date`, `to_temporal_date`, `to_temporal_date_time`, `to_integer`
//! - [`dispatch`]: run any function by name over positional arguments
//! - [`duration`]: the [`Duration`] record and how it is applied
//! - [`options`]: time zone and diagnostics configuration
//! - [`diagnostics`]: warning sinks for recognized misuse
//! - [`value`]: the [`Value`] and [`LegacyDate`] boundary types
//! - [`error`]: error types

pub mod arithmetic;
pub mod convert;
pub mod diagnostics;
pub mod dispatch;
pub mod duration;
pub mod error;
pub mod options;
pub mod value;
pub mod weekday;

pub use arithmetic::{
    add, add_business_days, add_business_days_with_options, add_days, add_days_with_options,
    add_months, add_months_with_options, add_with_options,
};
pub use convert::{
    to_date, to_date_with_options, to_integer, to_temporal_date, to_temporal_date_time,
    to_temporal_date_time_with_options, to_temporal_date_with_options,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, NoopSink, STRING_ARGUMENT_WARNING};
pub use dispatch::{call, call_function, required_args, Function};
pub use duration::Duration;
pub use error::DateError;
pub use options::{Options, Zone};
pub use value::{LegacyDate, Value, MAX_TIMESTAMP_MILLIS};
pub use weekday::{
    is_saturday, is_saturday_with_options, is_sunday, is_sunday_with_options, is_weekend,
    is_weekend_with_options,
};
