//! Positional-argument entry points.
//!
//! [`call`] runs a function by name over a slice of [`Value`]s. This is the
//! surface where a call can be the wrong shape: the argument count is checked
//! before anything else, and a short call is always a [`DateError::Arity`],
//! never an invalid-date result.

use std::fmt;
use std::str::FromStr;

use crate::arithmetic::{add_business_days_value, add_days_value, add_months_value, add_value};
use crate::convert::{coerce_date, coerce_date_time, legacy_from};
use crate::error::{DateError, Result};
use crate::options::Options;
use crate::value::{LegacyDate, Value};
use crate::weekday::{check, is_saturday_day, is_sunday_day, is_weekend_day};

/// Every function reachable through [`call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Add,
    AddDays,
    AddMonths,
    AddBusinessDays,
    IsWeekend,
    IsSaturday,
    IsSunday,
    ToDate,
    ToTemporalDate,
    ToTemporalDateTime,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Function::Add,
        Function::AddDays,
        Function::AddMonths,
        Function::AddBusinessDays,
        Function::IsWeekend,
        Function::IsSaturday,
        Function::IsSunday,
        Function::ToDate,
        Function::ToTemporalDate,
        Function::ToTemporalDateTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::Add => "add",
            Function::AddDays => "add_days",
            Function::AddMonths => "add_months",
            Function::AddBusinessDays => "add_business_days",
            Function::IsWeekend => "is_weekend",
            Function::IsSaturday => "is_saturday",
            Function::IsSunday => "is_sunday",
            Function::ToDate => "to_date",
            Function::ToTemporalDate => "to_temporal_date",
            Function::ToTemporalDateTime => "to_temporal_date_time",
        }
    }

    /// Number of positional arguments the function requires.
    pub fn arity(self) -> usize {
        match self {
            Function::Add
            | Function::AddDays
            | Function::AddMonths
            | Function::AddBusinessDays => 2,
            Function::IsWeekend
            | Function::IsSaturday
            | Function::IsSunday
            | Function::ToDate
            | Function::ToTemporalDate
            | Function::ToTemporalDateTime => 1,
        }
    }
}

impl FromStr for Function {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        Function::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| DateError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fail with [`DateError::Arity`] unless at least `required` arguments are
/// present. Extra arguments are ignored.
pub fn required_args(required: usize, args: &[Value]) -> Result<()> {
    if args.len() < required {
        return Err(DateError::Arity {
            required,
            given: args.len(),
        });
    }
    Ok(())
}

/// Run `name` over positional `args`.
///
/// # Errors
///
/// - [`DateError::UnknownFunction`] if `name` is not a [`Function`].
/// - [`DateError::Arity`] if too few arguments are given.
/// - [`DateError::InvalidDate`] from `to_temporal_date` and
///   `to_temporal_date_time` only; every other function turns a bad date
///   into [`LegacyDate::INVALID`] or `false`.
///
/// # Examples
///
/// ```
/// use temporal_fns::{call, DateError, Options, Value};
///
/// let options = Options::in_zone("UTC").unwrap();
/// let err = call("add_days", &[Value::Number(0.0)], &options).unwrap_err();
/// assert_eq!(err, DateError::Arity { required: 2, given: 1 });
///
/// let weekend = call("is_weekend", &[Value::Null], &options).unwrap();
/// assert_eq!(weekend, Value::Bool(false));
/// ```
pub fn call(name: &str, args: &[Value], options: &Options) -> Result<Value> {
    call_function(name.parse()?, args, options)
}

/// Run a known [`Function`] over positional `args`.
pub fn call_function(function: Function, args: &[Value], options: &Options) -> Result<Value> {
    required_args(function.arity(), args)?;
    log::trace!("{function}: {} argument(s)", args.len());

    let result = match function {
        Function::Add => match &args[1] {
            Value::Duration(duration) => Value::Date(add_value(&args[0], duration, options)),
            _ => Value::Date(LegacyDate::INVALID),
        },
        Function::AddDays => Value::Date(add_days_value(&args[0], &args[1], options)),
        Function::AddMonths => Value::Date(add_months_value(&args[0], &args[1], options)),
        Function::AddBusinessDays => {
            Value::Date(add_business_days_value(&args[0], &args[1], options))
        }
        Function::IsWeekend => Value::Bool(check(&args[0], "is_weekend", options, is_weekend_day)),
        Function::IsSaturday => {
            Value::Bool(check(&args[0], "is_saturday", options, is_saturday_day))
        }
        Function::IsSunday => Value::Bool(check(&args[0], "is_sunday", options, is_sunday_day)),
        Function::ToDate => Value::Date(legacy_from(&args[0], "to_date", options)),
        Function::ToTemporalDate => {
            Value::PlainDate(coerce_date(&args[0], "to_temporal_date", options)?)
        }
        Function::ToTemporalDateTime => Value::PlainDateTime(coerce_date_time(
            &args[0],
            "to_temporal_date_time",
            options,
        )?),
    };
    Ok(result)
}
