// SPDX-License-Identifier: MIT

//! Locating Naw-Rúz, the Badíʿ New Year.
//!
//! Naw-Rúz falls on the Gregorian day whose sunset in Tehran first follows
//! the vernal equinox: if the equinox precedes that day's Tehran sunset, the
//! equinox day itself is Naw-Rúz; otherwise the new year begins the next
//! day.
//!
//! Authoritative corrections take precedence over the computation. The
//! Universal House of Justice fixed Naw-Rúz 2026 to March 21: that year the
//! equinox falls within a minute of the Tehran sunset, inside the error
//! margin of the Meeus-style equinox algorithms, so no automated answer is
//! trustworthy. Such rulings live in an override table consulted before the
//! general rule — data, not special-case logic — so further corrections can
//! be supplied as configuration.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::location::TEHRAN;
use crate::oracle::{midnight_utc, AstronomicalOracle};

/// Overrides that bypass the equinox computation, as `(gregorian year,
/// Naw-Rúz day)` pairs.
pub type NawRuzOverrides = Vec<(i32, NaiveDate)>;

/// The default override table: the 2026 ruling only.
pub fn default_overrides() -> NawRuzOverrides {
    vec![(
        2026,
        NaiveDate::from_ymd_opt(2026, 3, 21).expect("fixed override date is a valid civil date"),
    )]
}

/// Finds the Gregorian day that is Badíʿ New Year.
#[derive(Debug)]
pub struct NawRuzFinder<'o, O: AstronomicalOracle> {
    oracle: &'o O,
    overrides: NawRuzOverrides,
}

impl<'o, O: AstronomicalOracle> NawRuzFinder<'o, O> {
    /// Finder with the default override table.
    pub fn new(oracle: &'o O) -> Self {
        Self::with_overrides(oracle, default_overrides())
    }

    /// Finder with an externally supplied override table.
    ///
    /// There is no general rule for when the governing body issues a
    /// correction, so overrides are configuration handed in by the caller,
    /// never inferred.
    pub fn with_overrides(oracle: &'o O, overrides: NawRuzOverrides) -> Self {
        Self { oracle, overrides }
    }

    /// Midnight UTC of the day that is Naw-Rúz in `gregorian_year`.
    pub fn naw_ruz(&self, gregorian_year: i32) -> DateTime<Utc> {
        if let Some(&(_, day)) = self
            .overrides
            .iter()
            .find(|(year, _)| *year == gregorian_year)
        {
            return midnight_utc(day);
        }

        let equinox = self.oracle.vernal_equinox(gregorian_year);
        let sunset = self.oracle.sunset(equinox.date_naive(), TEHRAN);
        let equinox_day = equinox.date_naive();
        if equinox < sunset {
            midnight_utc(equinox_day)
        } else {
            // The equinox happened after that day's sunset, i.e. already
            // inside the next Badíʿ day: the new year starts the day after.
            midnight_utc(equinox_day) + Duration::days(1)
        }
    }
}
