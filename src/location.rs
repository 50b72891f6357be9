// SPDX-License-Identifier: MIT

//! Geographic locations.
//!
//! A [`GeoLocation`] selects the observer for sunset queries: the Badíʿ day
//! boundary is local sunset, so every conversion between a Badíʿ date and an
//! absolute instant is relative to a latitude/longitude pair.

use crate::error::BadiError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An observer location on Earth.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

/// Tehran (35°41′40″N, 51°25′17″E) — the reference point for Naw-Rúz and
/// the Twin Birthdays, both of which are defined by sunset as observed
/// from Tehran.
pub const TEHRAN: GeoLocation = GeoLocation {
    latitude_deg: 35.6944,
    longitude_deg: 51.4215,
};

impl GeoLocation {
    /// Create a validated location.
    ///
    /// # Errors
    ///
    /// Returns [`BadiError::InvalidLocation`] if either coordinate is
    /// non-finite or outside its range.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, BadiError> {
        let in_range = latitude_deg.is_finite()
            && longitude_deg.is_finite()
            && (-90.0..=90.0).contains(&latitude_deg)
            && (-180.0..=180.0).contains(&longitude_deg);
        if in_range {
            Ok(Self {
                latitude_deg,
                longitude_deg,
            })
        } else {
            Err(BadiError::InvalidLocation {
                latitude_deg,
                longitude_deg,
            })
        }
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude_deg, self.longitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_tehran() {
        let place = GeoLocation::new(35.6944, 51.4215).unwrap();
        assert_eq!(place, TEHRAN);
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = GeoLocation::new(90.5, 0.0).unwrap_err();
        assert!(matches!(err, BadiError::InvalidLocation { .. }));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(GeoLocation::new(0.0, 180.5).is_err());
        assert!(GeoLocation::new(0.0, -180.5).is_err());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
        assert!(GeoLocation::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(TEHRAN.to_string(), "(35.6944, 51.4215)");
    }
}
