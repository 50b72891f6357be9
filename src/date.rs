// SPDX-License-Identifier: MIT

//! The structured Badíʿ date.
//!
//! A [`BadiDate`] names a moment on the Badíʿ calendar: a year of the era
//! (year 1 began in 1844 CE), a month index, a 1-based day, a duration past
//! the sunset that opened the day, and the observer location whose sunset is
//! meant. Badíʿ days run sunset to sunset, so "hours past sunset" plus a
//! location pins the date to an absolute instant.
//!
//! Months 0–17 are the ordinary 19-day months, index 18 is the intercalary
//! Ayyám-i-Há (4 or 5 days depending on the year), and index 19 is ʿAláʼ,
//! the month of the Fast.

use std::cmp::Ordering;

use chrono::Duration;

use crate::error::BadiError;
use crate::location::GeoLocation;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Month index of the intercalary Ayyám-i-Há period.
pub const AYYAM_I_HA: u8 = 18;

/// Month index of ʿAláʼ, the month of the Fast.
pub const MONTH_OF_FAST: u8 = 19;

/// The names of the twenty Badíʿ months, with Ayyám-i-Há at index 18.
pub const MONTH_NAMES: [&str; 20] = [
    "Bahá",
    "Jalál",
    "Jamál",
    "‘Aẓamat",
    "Núr",
    "Raḥmat",
    "Kalimát",
    "Kamál",
    "Asmá’",
    "‘Izzat",
    "Mashíyyat",
    "‘Ilm",
    "Qudrat",
    "Qawl",
    "Masá’il",
    "Sharaf",
    "Sulṭán",
    "Mulk",
    "Ayyám-i-Há",
    "‘Alá’",
];

/// Gregorian year in which a Badíʿ year begins: Badíʿ year 1 began in 1844.
#[inline]
pub const fn badi_year_to_gregorian(badi_year: i32) -> i32 {
    badi_year + 1843
}

/// Badíʿ year that begins in the given Gregorian year.
#[inline]
pub const fn gregorian_year_to_badi(gregorian_year: i32) -> i32 {
    gregorian_year - 1843
}

/// A date on the Badíʿ calendar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BadiDate {
    /// Year of the Badíʿ era; year 1 is 1844 CE.
    pub year: i32,
    /// Month index in `0..=19` (18 = Ayyám-i-Há, 19 = the Fast).
    pub month: u8,
    /// Day of the month, 1-based.
    pub day: u8,
    /// Time elapsed since the sunset that opened this Badíʿ day,
    /// at second precision.
    pub past_sunset: Duration,
    /// Location whose sunset defines the day boundary.
    pub place: GeoLocation,
}

impl BadiDate {
    /// Create a Badíʿ date.
    ///
    /// The day is taken as given: day bounds depend on the year (the length
    /// of Ayyám-i-Há is astronomical), and validating astronomically
    /// implausible inputs is out of scope here.
    ///
    /// # Errors
    ///
    /// Returns [`BadiError::InvalidMonth`] if `month > 19`.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        past_sunset: Duration,
        place: GeoLocation,
    ) -> Result<Self, BadiError> {
        if month > MONTH_OF_FAST {
            return Err(BadiError::InvalidMonth { month });
        }
        Ok(Self {
            year,
            month,
            day,
            past_sunset,
            place,
        })
    }

    /// The name of this date's month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month)]
    }

    /// Calendar-order comparison on (year, month, day).
    ///
    /// The sub-day fields (`past_sunset`, `place`) do not participate:
    /// two dates naming the same calendar day compare equal even if they
    /// pin different instants within it.
    pub fn cmp_calendar(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for BadiDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

// Serde representation: `past_sunset` travels as whole seconds, keeping the
// wire format free of chrono internals.
#[cfg(feature = "serde")]
impl Serialize for BadiDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("BadiDate", 5)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("past_sunset_s", &self.past_sunset.num_seconds())?;
        s.serialize_field("place", &self.place)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BadiDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u8,
            day: u8,
            past_sunset_s: i64,
            place: GeoLocation,
        }

        let raw = Raw::deserialize(deserializer)?;
        BadiDate::new(
            raw.year,
            raw.month,
            raw.day,
            Duration::seconds(raw.past_sunset_s),
            raw.place,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::TEHRAN;

    fn date(year: i32, month: u8, day: u8) -> BadiDate {
        BadiDate::new(year, month, day, Duration::zero(), TEHRAN).unwrap()
    }

    #[test]
    fn rejects_month_past_the_fast() {
        let err = BadiDate::new(181, 20, 1, Duration::zero(), TEHRAN).unwrap_err();
        assert_eq!(err, BadiError::InvalidMonth { month: 20 });
    }

    #[test]
    fn month_names_line_up_with_indices() {
        assert_eq!(date(181, 0, 1).month_name(), "Bahá");
        assert_eq!(date(181, 17, 1).month_name(), "Mulk");
        assert_eq!(date(181, AYYAM_I_HA, 1).month_name(), "Ayyám-i-Há");
        assert_eq!(date(181, MONTH_OF_FAST, 1).month_name(), "‘Alá’");
    }

    #[test]
    fn display_reads_day_month_year() {
        assert_eq!(date(182, 0, 1).to_string(), "1 Bahá 182");
        assert_eq!(date(181, 19, 17).to_string(), "17 ‘Alá’ 181");
    }

    #[test]
    fn calendar_order_ignores_sub_day_fields() {
        let morning = BadiDate::new(181, 3, 8, Duration::hours(2), TEHRAN).unwrap();
        let evening = BadiDate::new(181, 3, 8, Duration::hours(20), TEHRAN).unwrap();
        assert_eq!(morning.cmp_calendar(&evening), Ordering::Equal);

        assert_eq!(date(181, 3, 8).cmp_calendar(&date(181, 3, 9)), Ordering::Less);
        assert_eq!(date(181, 4, 1).cmp_calendar(&date(181, 3, 19)), Ordering::Greater);
        assert_eq!(date(182, 0, 1).cmp_calendar(&date(181, 19, 19)), Ordering::Greater);
    }

    #[test]
    fn year_helpers_are_inverse() {
        assert_eq!(badi_year_to_gregorian(1), 1844);
        assert_eq!(badi_year_to_gregorian(182), 2025);
        assert_eq!(gregorian_year_to_badi(2025), 182);
        for y in [1, 100, 181, 200] {
            assert_eq!(gregorian_year_to_badi(badi_year_to_gregorian(y)), y);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_preserves_seconds() {
        let original =
            BadiDate::new(181, 18, 4, Duration::seconds(12_345), TEHRAN).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"past_sunset_s\":12345"));
        let back: BadiDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid_month() {
        let json = r#"{"year":181,"month":25,"day":1,"past_sunset_s":0,
                       "place":{"latitude_deg":35.6944,"longitude_deg":51.4215}}"#;
        assert!(serde_json::from_str::<BadiDate>(json).is_err());
    }
}
