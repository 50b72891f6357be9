// SPDX-License-Identifier: MIT

//! Lunar searches: the next new moon, and the Twin Birthdays.
//!
//! The Twin Birthdays (Birth of the Báb, Birth of Bahá'u'lláh) are the one
//! movable observance of the calendar: they begin on the first or second
//! day after the eighth new moon following Naw-Rúz, depending on whether
//! that new moon precedes or follows the same day's Tehran sunset.

use chrono::{DateTime, Duration, Utc};

use crate::error::BadiError;
use crate::naw_ruz::NawRuzFinder;
use crate::oracle::{midnight_utc, AstronomicalOracle};

/// Iteration bound for the new-moon search.
///
/// A synodic month is ≈29.5 days and each step advances one cycle, so any
/// healthy oracle answers within one or two iterations. The bound only
/// exists to turn an oracle malfunction into an error instead of a hang.
pub const MAX_LUNAR_CYCLES: u32 = 14;

/// Iteratively locates new moons via the oracle's lunar quarters.
#[derive(Debug)]
pub struct NewMoonFinder<'o, O: AstronomicalOracle> {
    oracle: &'o O,
    max_cycles: u32,
}

impl<'o, O: AstronomicalOracle> NewMoonFinder<'o, O> {
    pub fn new(oracle: &'o O) -> Self {
        Self {
            oracle,
            max_cycles: MAX_LUNAR_CYCLES,
        }
    }

    /// First new moon strictly after `not_before`, searching forward from
    /// the cycle containing `search_from`.
    ///
    /// Each rejected moon moves the cursor 30 days past that moon, so every
    /// step advances by exactly one lunar cycle and no qualifying moon can
    /// be skipped.
    ///
    /// # Errors
    ///
    /// [`BadiError::SearchExhausted`] if no qualifying new moon appears
    /// within [`MAX_LUNAR_CYCLES`] cycles.
    pub fn next_new_moon(
        &self,
        search_from: DateTime<Utc>,
        not_before: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, BadiError> {
        let mut cursor = search_from;
        for _ in 0..self.max_cycles {
            let new_moon = self.oracle.moon_quarters(cursor.date_naive())[0];
            if new_moon > not_before {
                return Ok(new_moon);
            }
            cursor = new_moon + Duration::days(30);
        }
        Err(BadiError::SearchExhausted { not_before })
    }
}

/// Locates the start of the Twin Birthdays observance.
#[derive(Debug)]
pub struct BirthdayFinder<'o, O: AstronomicalOracle> {
    oracle: &'o O,
    naw_ruz: NawRuzFinder<'o, O>,
    moons: NewMoonFinder<'o, O>,
}

impl<'o, O: AstronomicalOracle> BirthdayFinder<'o, O> {
    pub fn new(oracle: &'o O) -> Self {
        Self::with_naw_ruz(oracle, NawRuzFinder::new(oracle))
    }

    /// Finder sharing a configured [`NawRuzFinder`] (override table and all).
    pub fn with_naw_ruz(oracle: &'o O, naw_ruz: NawRuzFinder<'o, O>) -> Self {
        Self {
            oracle,
            naw_ruz,
            moons: NewMoonFinder::new(oracle),
        }
    }

    /// Midnight UTC of the day the Twin Birthdays begin in `gregorian_year`.
    pub fn twin_birthdays(&self, gregorian_year: i32) -> Result<DateTime<Utc>, BadiError> {
        // Chain through exactly eight successive new moons after the
        // Naw-Rúz sunset in Tehran.
        let mut cursor = self.oracle.tehran_sunset(self.naw_ruz.naw_ruz(gregorian_year));
        for _ in 0..8 {
            cursor = self.moons.next_new_moon(cursor, cursor)?;
        }

        // One day later if the eighth new moon precedes that day's Tehran
        // sunset, two days later if it follows it.
        let sunset = self.oracle.tehran_sunset(cursor);
        cursor += if cursor < sunset {
            Duration::days(1)
        } else {
            Duration::days(2)
        };

        let sunset = self.oracle.tehran_sunset(cursor);
        Ok(midnight_utc(sunset.date_naive()))
    }
}
