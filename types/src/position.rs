use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, DISPLAY_FD},
    direction::{Hemisphere, LatitudeDirection, LongitudeDirection},
    utils::trim_fraction,
};

/// The point given as the pair of signed decimal degrees.
///
/// Positive values mean the northern latitude and the eastern longitude.
/// Valid latitude is in the range `-90 <= lat <= 90`,
/// valid longitude is in the range `-180 <= lon <= 180`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalPosition {
    /// Signed latitude, degrees
    pub latitude: f64,
    /// Signed longitude, degrees
    pub longitude: f64,
}

impl DecimalPosition {
    /// Construct a position without any validation
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for DecimalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, lon) = (self.latitude, self.longitude);
        match (f.alternate(), f.precision()) {
            (true, Some(p)) => write!(f, "({lat:.p$},{lon:.p$})"),
            (true, None) => write!(f, "({lat},{lon})"),
            (false, Some(p)) => write!(f, "Latitude = {lat:.p$}, Longitude = {lon:.p$}"),
            (false, None) => write!(f, "Latitude = {lat}, Longitude = {lon}"),
        }
    }
}

/// A single coordinate component in the degree-minute-second notation
/// together with its hemisphere.
///
/// [Read more](https://en.wikipedia.org/wiki/Minute_and_second_of_arc)
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsValue<D> {
    /// Whole degrees, up to 90 for a latitude and up to 180 for a longitude
    pub degrees: u16,
    /// Arc minutes in the range `[0..60)`
    pub minutes: f64,
    /// Arc seconds in the range `[0..60)`
    pub seconds: f64,
    /// The hemisphere
    pub direction: D,
}

/// The latitude in the DMS notation
pub type LatitudeDms = DmsValue<LatitudeDirection>;

/// The longitude in the DMS notation
pub type LongitudeDms = DmsValue<LongitudeDirection>;

impl<D: Hemisphere> DmsValue<D> {
    /// Construct the value without any validation
    pub const fn new(degrees: u16, minutes: f64, seconds: f64, direction: D) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            direction,
        }
    }
}

impl<D: Hemisphere> Default for DmsValue<D> {
    fn default() -> Self {
        Self::new(0, 0.0, 0.0, D::from(true))
    }
}

impl<D: Hemisphere> fmt::Display for DmsValue<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DISPLAY_FD);
        let minutes = trim_fraction(self.minutes, digits);
        let seconds = trim_fraction(self.seconds, digits);

        if f.alternate() {
            write!(
                f,
                "{}{DEGREE_SIGN}{minutes}{ARC_MINUTE_SIGN}{seconds}{ARC_SECOND_SIGN}{}",
                self.degrees, self.direction
            )
        } else {
            write!(
                f,
                "{} {minutes}' {seconds}\" {}",
                self.degrees, self.direction
            )
        }
    }
}

/// The point given as the pair of DMS components
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsPosition {
    /// North-south component
    pub latitude: LatitudeDms,
    /// East-west component
    pub longitude: LongitudeDms,
}

impl DmsPosition {
    /// Construct a position without any validation
    pub const fn new(latitude: LatitudeDms, longitude: LongitudeDms) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for DmsPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DISPLAY_FD);
        if f.alternate() {
            write!(
                f,
                "Lat: {:#.digits$}, Long: {:#.digits$}",
                self.latitude, self.longitude
            )
        } else {
            write!(
                f,
                "Latitude = {:.digits$}, Longitude = {:.digits$}",
                self.latitude, self.longitude
            )
        }
    }
}
