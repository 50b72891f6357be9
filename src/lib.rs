// SPDX-License-Identifier: MIT

//! Badíʿ (Baháʼí) Calendar Engine
//!
//! This crate converts between the Gregorian calendar and the Badíʿ
//! calendar — a solar calendar whose year boundaries are astronomical, not
//! civil: the new year (Naw-Rúz) is fixed by the vernal equinox relative to
//! sunset in Tehran, days run from sunset to sunset, and the Twin Birthdays
//! observance moves with the new moon.
//!
//! # Core types
//!
//! - [`BadiDate`] — a structured date on the Badíʿ calendar (year, month,
//!   day, duration past sunset, observer location).
//! - [`GeoLocation`] — the observer whose sunsets bound the Badíʿ day.
//! - [`AstronomicalOracle`] — the consumed interface supplying sunset,
//!   equinox, and lunar-quarter instants; the crate's only I/O boundary.
//! - [`DateConverter`] — bidirectional `BadiDate` ↔ `DateTime<Utc>`
//!   conversion.
//! - [`NawRuzFinder`] — locates Badíʿ New Year, override table first.
//! - [`NewMoonFinder`] / [`BirthdayFinder`] — bounded lunar search and the
//!   Twin Birthdays rule built on it.
//! - [`HolidayEngine`] — enumerates holy days, month boundaries, and the
//!   Twin Birthdays over a window as ordered [`CalendarEvent`]s.
//!
//! # Layout of a Badíʿ year
//!
//! | Months | Content |
//! |--------|---------|
//! | 0–17 | eighteen ordinary 19-day months (Bahá … Mulk) |
//! | 18 | Ayyám-i-Há, the 4-or-5-day intercalary period |
//! | 19 | ʿAláʼ, the 19-day month of the Fast, anchored to the *next* Naw-Rúz |
//!
//! # Example
//!
//! ```no_run
//! use badi_cal::{AstronomicalOracle, BadiDate, DateConverter, TEHRAN};
//! use chrono::Duration;
//!
//! fn naw_ruz_182(oracle: &impl AstronomicalOracle) -> chrono::DateTime<chrono::Utc> {
//!     let converter = DateConverter::new(oracle);
//!     let new_year = BadiDate::new(182, 0, 1, Duration::zero(), TEHRAN).unwrap();
//!     converter.badi_to_gregorian(&new_year).unwrap()
//! }
//! ```
//!
//! The whole engine is a pure, synchronous computation: every operation is
//! deterministic given the oracle's answers, and nothing in the crate holds
//! shared mutable state.

mod convert;
mod date;
mod error;
mod events;
mod location;
mod moon;
mod naw_ruz;
mod oracle;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use convert::DateConverter;
pub use date::{
    badi_year_to_gregorian, gregorian_year_to_badi, BadiDate, AYYAM_I_HA, MONTH_NAMES,
    MONTH_OF_FAST,
};
pub use error::BadiError;
pub use events::{default_holy_days, CalendarEvent, EventKind, HolidayEngine, HolyDay};
pub use location::{GeoLocation, TEHRAN};
pub use moon::{BirthdayFinder, NewMoonFinder, MAX_LUNAR_CYCLES};
pub use naw_ruz::{default_overrides, NawRuzFinder, NawRuzOverrides};
pub use oracle::AstronomicalOracle;
