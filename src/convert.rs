// SPDX-License-Identifier: MIT

//! Bidirectional conversion between Badíʿ dates and absolute instants.
//!
//! Both directions are anchored the same way: Naw-Rúz fixes the year, a
//! whole-day offset fixes the Badíʿ day, and the sunset at the date's own
//! location fixes the instant the day began. The two operations are exact
//! inverses (at second precision) for any valid date whose `past_sunset` is
//! under 24 hours.
//!
//! Two pieces of the calendar bend the simple `month × 19 + day` rule:
//!
//! - **Ayyám-i-Há** (month 18) has 4 or 5 days depending on the year. The
//!   count is never looked up — it falls out of the distance between two
//!   consecutive Naw-Rúz days: `year_length − 361`.
//! - **The Fast** (month 19) is anchored *backward* from the following
//!   year's Naw-Rúz, so its dates stay put regardless of how long
//!   Ayyám-i-Há was.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::date::{
    badi_year_to_gregorian, gregorian_year_to_badi, BadiDate, AYYAM_I_HA, MONTH_OF_FAST,
};
use crate::error::BadiError;
use crate::location::GeoLocation;
use crate::naw_ruz::NawRuzFinder;
use crate::oracle::AstronomicalOracle;

const SECS_PER_DAY: i64 = 86_400;

/// Days of ordinary months in a Badíʿ year: 19 months of 19 days.
const ORDINARY_DAYS: i64 = 361;

/// Converts between [`BadiDate`] and `DateTime<Utc>`.
#[derive(Debug)]
pub struct DateConverter<'o, O: AstronomicalOracle> {
    oracle: &'o O,
    naw_ruz: NawRuzFinder<'o, O>,
}

impl<'o, O: AstronomicalOracle> DateConverter<'o, O> {
    pub fn new(oracle: &'o O) -> Self {
        Self::with_naw_ruz(oracle, NawRuzFinder::new(oracle))
    }

    /// Converter sharing a configured [`NawRuzFinder`].
    pub fn with_naw_ruz(oracle: &'o O, naw_ruz: NawRuzFinder<'o, O>) -> Self {
        Self { oracle, naw_ruz }
    }

    /// The absolute instant named by a Badíʿ date.
    ///
    /// The result is the sunset (at the date's location) that opened the
    /// Badíʿ day, plus the date's `past_sunset`.
    ///
    /// # Errors
    ///
    /// [`BadiError::InvalidMonth`] for a month index above 19.
    pub fn badi_to_gregorian(&self, badi: &BadiDate) -> Result<DateTime<Utc>, BadiError> {
        let (naw_ruz, offset_days) = if badi.month < MONTH_OF_FAST {
            // Ordinary months and Ayyám-i-Há count forward from this
            // year's Naw-Rúz.
            let naw_ruz = self.naw_ruz.naw_ruz(badi_year_to_gregorian(badi.year));
            let offset = i64::from(badi.month) * 19 + i64::from(badi.day) - 2;
            (naw_ruz, offset)
        } else if badi.month == MONTH_OF_FAST {
            // The Fast counts backward from next year's Naw-Rúz.
            let naw_ruz = self.naw_ruz.naw_ruz(badi_year_to_gregorian(badi.year) + 1);
            (naw_ruz, i64::from(badi.day) - 21)
        } else {
            return Err(BadiError::InvalidMonth { month: badi.month });
        };

        let day = naw_ruz + Duration::days(offset_days);
        let sunset = self.oracle.sunset_at(day, badi.place);
        Ok(sunset + badi.past_sunset)
    }

    /// The Badíʿ date containing an absolute instant, for an observer at
    /// `place`.
    ///
    /// Inverse of [`badi_to_gregorian`](Self::badi_to_gregorian) at second
    /// precision.
    pub fn gregorian_to_badi(
        &self,
        at: DateTime<Utc>,
        place: GeoLocation,
    ) -> Result<BadiDate, BadiError> {
        // Anchor to the Naw-Rúz at or before `at`.
        let mut gregorian_year = at.year();
        let mut naw_ruz = self.naw_ruz.naw_ruz(gregorian_year);
        if at < naw_ruz {
            gregorian_year -= 1;
            naw_ruz = self.naw_ruz.naw_ruz(gregorian_year);
        }
        let badi_year = gregorian_year_to_badi(gregorian_year);

        // Whole days since Naw-Rúz midnight, bumped by one once the local
        // sunset has passed: the Badíʿ day turned over at that sunset.
        let mut diff = (at - naw_ruz).num_seconds().div_euclid(SECS_PER_DAY);
        let todays_sunset = self.oracle.sunset_at(at, place);
        let past_sunset = if todays_sunset <= at {
            diff += 1;
            at - todays_sunset
        } else {
            at - self.oracle.sunset_at(at - Duration::days(1), place)
        };

        let month = diff.div_euclid(19);
        if month < i64::from(AYYAM_I_HA) {
            let day = diff - month * 19 + 1;
            return BadiDate::new(badi_year, month as u8, day as u8, past_sunset, place);
        }

        if month <= i64::from(MONTH_OF_FAST) {
            // Inside Ayyám-i-Há or the Fast: the split depends on how many
            // intercalary days this particular year has.
            let after_mulk = diff - i64::from(AYYAM_I_HA) * 19;
            let next_naw_ruz = self.naw_ruz.naw_ruz(gregorian_year + 1);
            let year_length = (next_naw_ruz - naw_ruz).num_seconds() / SECS_PER_DAY;
            let ayyam_days = year_length - ORDINARY_DAYS;

            // An instant between the eve-of-Naw-Rúz sunset and the Naw-Rúz
            // civil midnight anchors to the old year above, but the sunset
            // bump has already carried `diff` past the year's end: the
            // Badíʿ day belongs to the new year.
            if diff >= year_length {
                return BadiDate::new(
                    badi_year + 1,
                    0,
                    (diff - year_length + 1) as u8,
                    past_sunset,
                    place,
                );
            }

            return if after_mulk < ayyam_days {
                BadiDate::new(
                    badi_year,
                    AYYAM_I_HA,
                    (after_mulk + 1) as u8,
                    past_sunset,
                    place,
                )
            } else {
                BadiDate::new(
                    badi_year,
                    MONTH_OF_FAST,
                    (after_mulk + 1 - ayyam_days) as u8,
                    past_sunset,
                    place,
                )
            };
        }

        // Unreachable when the year-length computation holds; kept so a
        // broken oracle surfaces as an error instead of a bogus date.
        Err(BadiError::InvalidMonth {
            month: month.clamp(0, i64::from(u8::MAX)) as u8,
        })
    }

    /// Count of intercalary days (normally 4 or 5) in a Badíʿ year.
    pub fn ayyam_i_ha_days(&self, badi_year: i32) -> i64 {
        let gregorian_year = badi_year_to_gregorian(badi_year);
        let naw_ruz = self.naw_ruz.naw_ruz(gregorian_year);
        let next = self.naw_ruz.naw_ruz(gregorian_year + 1);
        (next - naw_ruz).num_seconds() / SECS_PER_DAY - ORDINARY_DAYS
    }
}
