//! # Temporal Types — Pay Periods and UTC Timestamps
//!
//! Defines [`PayPeriod`], the calendar span a payslip covers, and
//! [`Timestamp`], a UTC-only timestamp truncated to seconds precision.
//!
//! ## Invariant
//!
//! Audit-journal entries must serialize to a stable ISO-8601 form with `Z`
//! suffix (`YYYY-MM-DDTHH:MM:SSZ`). Local timezone offsets would make the
//! same instant round-trip to different strings depending on where the
//! serializing process runs. Non-UTC inputs are **rejected at parse**, not
//! silently converted.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The calendar period a payslip covers, usually one civil month.
///
/// Dates are plain calendar dates; payroll periods have no time-of-day
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// First day covered, inclusive.
    pub start: NaiveDate,
    /// Last day covered, inclusive.
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Create a validated pay period.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPeriod`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// The calendar month (1-12) of the period start.
    ///
    /// Annual bucketing keys on the start month: a payslip belongs to the
    /// month its period starts in.
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// The calendar year of the period start.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Whether a date falls within the period, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO-8601 string, rejecting non-UTC offsets.
///
/// # Serialization
///
/// Serializes as the ISO-8601 `Z` string (`YYYY-MM-DDTHH:MM:SSZ`), not as
/// chrono's default offset form. The audit-journal wire contract fixes this
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO-8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted; an explicit `+00:00` offset is rejected even though it
    /// names the same instant, so stored values stay byte-stable.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimestamp`] if the string is not valid
    /// RFC 3339 or uses a non-`Z` offset.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !s.ends_with('Z') {
            return Err(CoreError::InvalidTimestamp {
                value: s.to_owned(),
                reason: "must use Z suffix (UTC only)".to_owned(),
            });
        }
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| CoreError::InvalidTimestamp {
            value: s.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Format as ISO-8601 with `Z` suffix and no sub-seconds:
    /// `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── PayPeriod tests ──────────────────────────────────────────────

    #[test]
    fn test_period_rejects_inverted_range() {
        assert!(PayPeriod::new(date(2025, 2, 1), date(2025, 1, 31)).is_err());
    }

    #[test]
    fn test_period_month_and_year_key_on_start() {
        let p = PayPeriod::new(date(2025, 3, 1), date(2025, 3, 31)).unwrap();
        assert_eq!(p.month(), 3);
        assert_eq!(p.year(), 2025);
    }

    #[test]
    fn test_period_contains_is_inclusive() {
        let p = PayPeriod::new(date(2025, 3, 1), date(2025, 3, 31)).unwrap();
        assert!(p.contains(date(2025, 3, 1)));
        assert!(p.contains(date(2025, 3, 31)));
        assert!(!p.contains(date(2025, 4, 1)));
    }

    // ── Timestamp tests ──────────────────────────────────────────────

    #[test]
    fn test_parse_accepts_z_suffix() {
        let ts = Timestamp::parse("2025-03-31T12:00:05Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2025-03-31T12:00:05Z");
    }

    #[test]
    fn test_parse_rejects_offsets() {
        assert!(Timestamp::parse("2025-03-31T12:00:05+00:00").is_err());
        assert!(Timestamp::parse("2025-03-31T12:00:05+02:00").is_err());
    }

    #[test]
    fn test_parse_truncates_subseconds() {
        let ts = Timestamp::parse("2025-03-31T12:00:05.123456Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2025-03-31T12:00:05Z");
    }
}
