pub mod error;
pub mod timeunit;

use chrono::{DateTime, SubsecRound, Utc};

/// Format used by Xray for execution timestamps, second precision in UTC.
pub const XRAY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Drops sub-second digits without rounding.
#[inline]
pub fn whole_seconds(date: DateTime<Utc>) -> DateTime<Utc> {
    date.trunc_subsecs(0)
}
