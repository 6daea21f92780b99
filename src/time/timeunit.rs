use crate::time::error::Error;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    static ref DURATION_REGEX: Regex = Regex::new(r"^(?P<value>\d+)(?P<unit>ns|us|ms|s|m|h|d){1}$")
        .expect("Regex compilation error");
}

/// A duration written as `<value><unit>`, e.g. `10s` or `500ms`.
#[derive(Debug, PartialEq)]
pub struct DurationUnit {
    value: u64,
    unit: TimeUnit,
}

#[derive(Debug, PartialEq)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DURATION_REGEX.captures(s.trim()).ok_or_else(|| {
            Error::Syntax(format!("'{}' is not a valid duration, expected e.g. '10s'", s))
        })?;
        let value = caps["value"]
            .parse()
            .map_err(|_| Error::Syntax(format!("'{}' is out of range", &caps["value"])))?;
        let unit = caps["unit"].parse::<TimeUnit>()?;
        Ok(Self { value, unit })
    }
}

impl From<DurationUnit> for Duration {
    fn from(duration: DurationUnit) -> Self {
        let value = duration.value;
        match duration.unit {
            TimeUnit::Nanosecond => Duration::from_nanos(value),
            TimeUnit::Microsecond => Duration::from_micros(value),
            TimeUnit::Millisecond => Duration::from_millis(value),
            TimeUnit::Second => Duration::from_secs(value),
            TimeUnit::Minute => Duration::from_secs(value.saturating_mul(60)),
            TimeUnit::Hour => Duration::from_secs(value.saturating_mul(60 * 60)),
            TimeUnit::Day => Duration::from_secs(value.saturating_mul(60 * 60 * 24)),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(TimeUnit::Nanosecond),
            "us" => Ok(TimeUnit::Microsecond),
            "ms" => Ok(TimeUnit::Millisecond),
            "s" => Ok(TimeUnit::Second),
            "m" => Ok(TimeUnit::Minute),
            "h" => Ok(TimeUnit::Hour),
            "d" => Ok(TimeUnit::Day),
            _ => Err(Error::UnitNotSupported(format!("Unit '{}' not supported", s))),
        }
    }
}
