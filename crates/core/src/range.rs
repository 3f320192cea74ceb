//! Inclusive date ranges for trailing reporting windows.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Inclusive timestamp range, `start <= at <= end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Trailing window ending at the current instant.
    ///
    /// The surrounding UI offers a fixed set of day counts (7/30/90/365),
    /// but the day count is validated here regardless.
    pub fn trailing(days_back: i64) -> DomainResult<Self> {
        Self::trailing_from(Utc::now(), days_back)
    }

    /// Trailing window ending at `end`.
    ///
    /// Calendar subtraction: the start keeps the end's time of day rather
    /// than being truncated to midnight.
    pub fn trailing_from(end: DateTime<Utc>, days_back: i64) -> DomainResult<Self> {
        if days_back <= 0 {
            return Err(DomainError::validation(format!(
                "trailing window requires a positive day count, got {days_back}"
            )));
        }

        let start = Duration::try_days(days_back)
            .and_then(|span| end.checked_sub_signed(span))
            .ok_or_else(|| {
                DomainError::validation(format!("day count out of range: {days_back}"))
            })?;

        Ok(Self { start, end })
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

impl ValueObject for DateRange {}
