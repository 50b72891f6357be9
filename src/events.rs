// SPDX-License-Identifier: MIT

//! Enumerating observances over a time window.
//!
//! [`HolidayEngine`] walks every Badíʿ year touching a query window and
//! emits the fixed holy days, the month boundaries, and the lunar Twin
//! Birthdays as [`CalendarEvent`] spans, chronologically ordered. All label
//! tables (holy days, month names) are injected configuration with
//! canonical defaults, so tests and locales can substitute their own.
//!
//! Events are transient query results: produced, consumed, discarded.
//! A failed conversion aborts the whole query — a partially computed
//! observance calendar is worse than none.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::convert::DateConverter;
use crate::date::{
    badi_year_to_gregorian, gregorian_year_to_badi, BadiDate, AYYAM_I_HA, MONTH_NAMES,
    MONTH_OF_FAST,
};
use crate::error::BadiError;
use crate::location::TEHRAN;
use crate::moon::BirthdayFinder;
use crate::naw_ruz::{NawRuzFinder, NawRuzOverrides};
use crate::oracle::AstronomicalOracle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A holy day fixed to the solar calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HolyDay {
    pub name: String,
    /// Badíʿ month index.
    pub month: u8,
    /// Day of the month, 1-based.
    pub day: u8,
    /// Whether work is suspended on this day.
    pub suspends_work: bool,
}

impl HolyDay {
    fn new(name: &str, month: u8, day: u8, suspends_work: bool) -> Self {
        Self {
            name: name.to_owned(),
            month,
            day,
            suspends_work,
        }
    }
}

/// The nine holy days fixed to the solar calendar, in canonical order.
///
/// The Twin Birthdays are not here: they move with the moon and are
/// computed, not tabulated.
pub fn default_holy_days() -> Vec<HolyDay> {
    vec![
        HolyDay::new("Naw Ruz", 0, 1, true),
        HolyDay::new("First Day of Ridván", 1, 13, true),
        HolyDay::new("Ninth Day of Ridván", 2, 2, true),
        HolyDay::new("Twelfth Day of Ridván", 2, 5, true),
        HolyDay::new("Declaration of the Báb", 3, 8, true),
        HolyDay::new("Ascension of Bahá’u’lláh", 3, 13, true),
        HolyDay::new("Martyrdom of the Báb", 5, 17, true),
        HolyDay::new("Day of the Covenant", 13, 4, false),
        HolyDay::new("Ascension of ‘Abdu’l-Bahá", 13, 6, false),
    ]
}

/// What kind of observance an event marks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// A month boundary.
    Month,
    /// A holy day on which work continues.
    HolyDay,
    /// A holy day on which work is suspended.
    HolyDaySuspended,
}

/// One observance as an absolute-time span.
///
/// Spans run sunset to sunset: `start` is the sunset-side instant one day
/// before the converted date, so the rendered span begins the evening the
/// observance actually starts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub badi: BadiDate,
    pub kind: EventKind,
}

impl std::fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: sunset of {} to sunset of {}",
            self.title,
            self.start.date_naive(),
            self.end.date_naive()
        )
    }
}

/// Enumerates holy days, month boundaries, and the Twin Birthdays.
#[derive(Debug)]
pub struct HolidayEngine<'o, O: AstronomicalOracle> {
    converter: DateConverter<'o, O>,
    birthdays: BirthdayFinder<'o, O>,
    holy_days: Vec<HolyDay>,
    month_names: Vec<String>,
}

impl<'o, O: AstronomicalOracle> HolidayEngine<'o, O> {
    /// Engine with the canonical holy-day table, month names, and Naw-Rúz
    /// overrides.
    pub fn new(oracle: &'o O) -> Self {
        Self::build(
            oracle,
            default_holy_days(),
            MONTH_NAMES.iter().map(|&n| n.to_owned()).collect(),
            crate::naw_ruz::default_overrides(),
        )
    }

    /// Engine with substituted configuration tables.
    ///
    /// # Errors
    ///
    /// [`BadiError::InvalidMonthTable`] unless `month_names` holds twenty
    /// entries, indexed like [`MONTH_NAMES`].
    pub fn with_config(
        oracle: &'o O,
        holy_days: Vec<HolyDay>,
        month_names: Vec<String>,
        overrides: NawRuzOverrides,
    ) -> Result<Self, BadiError> {
        if month_names.len() != MONTH_NAMES.len() {
            return Err(BadiError::InvalidMonthTable {
                count: month_names.len(),
            });
        }
        Ok(Self::build(oracle, holy_days, month_names, overrides))
    }

    fn build(
        oracle: &'o O,
        holy_days: Vec<HolyDay>,
        month_names: Vec<String>,
        overrides: NawRuzOverrides,
    ) -> Self {
        Self {
            converter: DateConverter::with_naw_ruz(
                oracle,
                NawRuzFinder::with_overrides(oracle, overrides.clone()),
            ),
            birthdays: BirthdayFinder::with_naw_ruz(
                oracle,
                NawRuzFinder::with_overrides(oracle, overrides),
            ),
            holy_days,
            month_names,
        }
    }

    /// The converter this engine drives, for follow-up conversions on the
    /// same configuration.
    pub fn converter(&self) -> &DateConverter<'o, O> {
        &self.converter
    }

    /// All observances whose span touches `[start, end]`, ordered by start
    /// instant.
    ///
    /// Ties keep generation order (holy days, then months, then birthdays,
    /// year by year): the final ordering pass is a stable sort.
    ///
    /// # Errors
    ///
    /// Any conversion failure aborts the query; no partial calendar is
    /// returned.
    pub fn find_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, BadiError> {
        let first_year = gregorian_year_to_badi(start.year()) - 1;
        let last_year = gregorian_year_to_badi(end.year()) + 1;

        let mut events = Vec::new();
        for badi_year in first_year..=last_year {
            self.collect_holy_days(badi_year, &mut events)?;
            self.collect_months(badi_year, &mut events)?;
            self.collect_birthdays(badi_year, &mut events)?;
        }

        events.retain(|ev| {
            (start <= ev.start && ev.start <= end) || (start <= ev.end && ev.end <= end)
        });
        events.sort_by_key(|ev| ev.start);
        Ok(events)
    }

    fn collect_holy_days(
        &self,
        badi_year: i32,
        events: &mut Vec<CalendarEvent>,
    ) -> Result<(), BadiError> {
        for holy_day in &self.holy_days {
            let badi = BadiDate::new(
                badi_year,
                holy_day.month,
                holy_day.day,
                Duration::hours(12),
                TEHRAN,
            )?;
            let at = self.converter.badi_to_gregorian(&badi)?;
            let kind = if holy_day.suspends_work {
                EventKind::HolyDaySuspended
            } else {
                EventKind::HolyDay
            };
            events.push(CalendarEvent {
                title: holy_day.name.clone(),
                start: at - Duration::days(1),
                end: at,
                badi,
                kind,
            });
        }
        Ok(())
    }

    fn collect_months(
        &self,
        badi_year: i32,
        events: &mut Vec<CalendarEvent>,
    ) -> Result<(), BadiError> {
        for month in 0..=MONTH_OF_FAST {
            let badi = BadiDate::new(badi_year, month, 1, Duration::hours(12), TEHRAN)?;
            let start = self.converter.badi_to_gregorian(&badi)? - Duration::days(1);

            let (title, end) = if month == AYYAM_I_HA {
                // Ayyám-i-Há runs until the Fast begins, however many
                // intercalary days this year has.
                let fast =
                    BadiDate::new(badi_year, MONTH_OF_FAST, 1, Duration::hours(12), TEHRAN)?;
                let fast_start = self.converter.badi_to_gregorian(&fast)? - Duration::days(1);
                (self.month_names[usize::from(month)].clone(), fast_start)
            } else {
                (
                    format!("Month of {}", self.month_names[usize::from(month)]),
                    start + Duration::days(19),
                )
            };

            events.push(CalendarEvent {
                title,
                start,
                end,
                badi,
                kind: EventKind::Month,
            });
        }
        Ok(())
    }

    fn collect_birthdays(
        &self,
        badi_year: i32,
        events: &mut Vec<CalendarEvent>,
    ) -> Result<(), BadiError> {
        let day = self
            .birthdays
            .twin_birthdays(badi_year_to_gregorian(badi_year))?;
        let next_day = day + Duration::days(1);

        // Round-trip each observance day through the converter so the
        // attached Badíʿ dates are consistent with the conversion engine.
        let first = self.converter.gregorian_to_badi(day, TEHRAN)?;
        let second = self.converter.gregorian_to_badi(next_day, TEHRAN)?;

        events.push(CalendarEvent {
            title: "Birth of the Báb".to_owned(),
            start: day - Duration::days(1),
            end: day,
            badi: first,
            kind: EventKind::HolyDaySuspended,
        });
        events.push(CalendarEvent {
            title: "Birth of Bahá’u’lláh".to_owned(),
            start: day,
            end: next_day,
            badi: second,
            kind: EventKind::HolyDaySuspended,
        });
        Ok(())
    }
}
