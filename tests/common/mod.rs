// SPDX-License-Identifier: MIT

//! Deterministic oracle fixture shared by the integration tests.
//!
//! The sky here is synthetic but internally consistent: sunset is 18:00
//! local mean solar time every day, the vernal equinox sits on March 20 at
//! 15:30 UTC (after the Tehran sunset, so Naw-Rúz is March 21 in every
//! year, agreeing with the built-in 2026 override), and new moons repeat at
//! exactly one mean synodic month from the real new moon of
//! 2000-01-06 18:14 UTC.

use badi_cal::{AstronomicalOracle, GeoLocation};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Mean synodic month (29.530588 days) in whole seconds.
pub const SYNODIC_SECS: i64 = 2_551_443;

/// 2000-01-06T18:14:00Z.
pub const NEW_MOON_EPOCH_SECS: i64 = 947_182_440;

pub struct SolarOracle;

impl AstronomicalOracle for SolarOracle {
    fn sunset(&self, day: NaiveDate, place: GeoLocation) -> DateTime<Utc> {
        let secs = (18.0 * 3600.0 - place.longitude_deg * 240.0).rem_euclid(86_400.0) as u32;
        day.and_time(NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap())
            .and_utc()
    }

    fn vernal_equinox(&self, gregorian_year: i32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(gregorian_year, 3, 20)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap()
            .and_utc()
    }

    fn moon_quarters(&self, day: NaiveDate) -> [DateTime<Utc>; 4] {
        // A day belongs to the cycle of the last new moon at or before its
        // end, so a new moon falling mid-day still counts as "this cycle".
        let day_end = day.and_time(NaiveTime::MIN).and_utc().timestamp() + 86_400;
        let cycle = (day_end - NEW_MOON_EPOCH_SECS).div_euclid(SYNODIC_SECS);
        let new_moon = NEW_MOON_EPOCH_SECS + cycle * SYNODIC_SECS;
        let quarter =
            |i: i64| DateTime::from_timestamp(new_moon + i * SYNODIC_SECS / 4, 0).unwrap();
        [quarter(0), quarter(1), quarter(2), quarter(3)]
    }
}
