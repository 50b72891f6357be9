// SPDX-License-Identifier: MIT

//! Error types for Badíʿ calendar conversions.
//!
//! Every failure here is an input-domain failure: the engine performs no
//! network or disk I/O, so there is no transient-fault or retry category.
//! Conversions fail immediately with no partial result, and callers are
//! expected to surface the offending input rather than clamp or default.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors produced by Badíʿ calendar conversions and queries.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum BadiError {
    /// A Badíʿ month outside `0..=19`.
    ///
    /// Months 0–17 are the ordinary months, 18 is Ayyám-i-Há and 19 is the
    /// month of the Fast (ʿAláʼ).
    #[error("invalid Badíʿ month {month}: months run 0 through 19")]
    InvalidMonth { month: u8 },

    /// Non-finite or out-of-range geographic coordinates.
    #[error("invalid location ({latitude_deg}°, {longitude_deg}°): latitude must lie in [-90, 90] and longitude in [-180, 180]")]
    InvalidLocation {
        latitude_deg: f64,
        longitude_deg: f64,
    },

    /// A substituted month-name table of the wrong length.
    #[error("month-name table has {count} entries: one name per the 20 Badíʿ months is required")]
    InvalidMonthTable { count: usize },

    /// The new-moon search exceeded its iteration bound.
    ///
    /// A synodic month is ≈29.5 days, so the search converges within a
    /// handful of 30-day steps against any sane oracle. Hitting the bound
    /// indicates an oracle malfunction, never normal operation.
    #[error("new-moon search exhausted without finding a new moon after {not_before}")]
    SearchExhausted { not_before: DateTime<Utc> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_names_the_offending_input() {
        let err = BadiError::InvalidMonth { month: 42 };
        assert!(err.to_string().contains("42"));

        let err = BadiError::InvalidLocation {
            latitude_deg: 91.0,
            longitude_deg: 0.0,
        };
        assert!(err.to_string().contains("91"));

        let err = BadiError::InvalidMonthTable { count: 3 };
        assert!(err.to_string().contains('3'));

        let after = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        let err = BadiError::SearchExhausted { not_before: after };
        assert!(err.to_string().contains("2024-03-20"));
    }
}
