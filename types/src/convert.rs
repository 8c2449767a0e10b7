//! Conversion between the decimal and the degree-minute-second representations
//! and the range checks guarding it.
//!
//! Every operation is a pure function of its input:
//! it either returns a fully valid position or the first range violation found.

use std::convert::TryFrom;

use log::{debug, trace};
use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        HALF_TURN_DEG, MINUTES_IN_DEGREE, QUARTER_TURN_DEG, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE,
    },
    direction::Hemisphere,
    errors::{Axis, ValidationError},
    position::{DecimalPosition, DmsPosition, DmsValue},
    utils::ToUnsigned,
};

/// How strict to be on the longitude degrees while checking a DMS position
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangeCheck {
    /// Longitude degrees are limited to 90, as in the classic `rangeCheckDMS` routine
    #[default]
    Reference,
    /// Longitude degrees are limited to 180, the same as during the conversion
    Geographic,
}

impl RangeCheck {
    fn longitude_limit(self) -> u16 {
        match self {
            Self::Reference => QUARTER_TURN_DEG,
            Self::Geographic => HALF_TURN_DEG,
        }
    }
}

impl<D: Hemisphere> DmsValue<D> {
    /// Degrees should not exceed the `limit`
    fn check_degrees(&self, limit: u16) -> Result<(), ValidationError> {
        if self.degrees > limit.min(D::MAX_DEGREES) {
            return Err(ValidationError::Degrees(D::AXIS));
        }
        Ok(())
    }

    fn check_minutes(&self) -> Result<(), ValidationError> {
        if !self.arc_part_in_range(self.minutes, MINUTES_IN_DEGREE) {
            return Err(ValidationError::ArcMinutes(D::AXIS));
        }
        Ok(())
    }

    fn check_seconds(&self) -> Result<(), ValidationError> {
        if !self.arc_part_in_range(self.seconds, SECONDS_IN_MINUTE) {
            return Err(ValidationError::ArcSeconds(D::AXIS));
        }
        Ok(())
    }

    /// Minutes and seconds are in the range `[0..max)`.
    /// Nothing is allowed beyond the maximum degrees of the axis.
    fn arc_part_in_range(&self, value: f64, max: f64) -> bool {
        if self.degrees == D::MAX_DEGREES {
            value == 0.0
        } else {
            (0.0..max).contains(&value)
        }
    }

    /// Check every part of the value.
    ///
    /// The degrees are limited by the smaller of the `limit` and
    /// the geographic maximum for the axis (90 or 180).
    /// Minutes and seconds should be in the range `[0..60)`,
    /// and zero if the degrees are at the geographic maximum.
    ///
    /// # Errors
    /// The first part found out of range.
    pub fn check(&self, limit: u16) -> Result<(), ValidationError> {
        self.check_degrees(limit)?;
        self.check_minutes()?;
        self.check_seconds()
    }

    /// Signed decimal degrees, negative for the South or the West.
    ///
    /// No validation is done, so use [`check`](#method.check) before.
    pub fn to_decimal(&self) -> f64 {
        let magnitude = f64::from(self.degrees)
            + self.minutes / MINUTES_IN_DEGREE
            + self.seconds / SECONDS_IN_DEGREE;

        if self.direction.is_positive() {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Split the signed decimal degrees into the DMS parts.
    ///
    /// The value should be already checked to be in range for the axis.
    fn from_decimal(value: f64) -> Result<Self, ValidationError> {
        let (magnitude, is_positive) = value.unsigned_abs();

        let degrees = magnitude.floor();
        let minutes = ((magnitude - degrees) * MINUTES_IN_DEGREE).floor();
        let seconds = (magnitude - degrees - minutes / MINUTES_IN_DEGREE) * SECONDS_IN_DEGREE;

        let degrees = degrees
            .to_u16()
            .ok_or(ValidationError::Degrees(D::AXIS))?;

        Ok(Self {
            degrees,
            minutes,
            // the floor of minutes can overshoot the fraction by an ulp
            seconds: seconds.max(0.0),
            direction: D::from(is_positive),
        })
    }
}

fn in_range(value: f64, max_degrees: u16) -> bool {
    let max = f64::from(max_degrees);
    (-max..=max).contains(&value)
}

fn check_decimal(decimal: DecimalPosition) -> Result<(), ValidationError> {
    if !in_range(decimal.latitude, QUARTER_TURN_DEG) {
        return Err(ValidationError::Degrees(Axis::Latitude));
    }

    if !in_range(decimal.longitude, HALF_TURN_DEG) {
        return Err(ValidationError::Degrees(Axis::Longitude));
    }

    Ok(())
}

/// Both components of the position are in the valid range:
/// `-90 <= lat <= 90` and `-180 <= lon <= 180`.
///
/// ```
/// # use dmsconv_types::{validate_decimal, DecimalPosition};
/// assert!(validate_decimal(DecimalPosition::new(90.0, -180.0)));
/// assert!(!validate_decimal(DecimalPosition::new(90.5, 0.0)));
/// ```
pub fn validate_decimal(decimal: DecimalPosition) -> bool {
    check_decimal(decimal).is_ok()
}

/// The DMS position is valid with the [default](enum.RangeCheck.html#variant.Reference) strictness,
/// i.e. the longitude degrees are limited to 90.
///
/// Use [`validate_dms_with`] to allow the longitude up to 180 degrees.
pub fn validate_dms(dms: DmsPosition) -> bool {
    validate_dms_with(dms, RangeCheck::default())
}

/// The DMS position is valid with the given strictness of the longitude check
pub fn validate_dms_with(dms: DmsPosition, range_check: RangeCheck) -> bool {
    let checked = dms
        .latitude
        .check(QUARTER_TURN_DEG)
        .and_then(|()| dms.longitude.check(range_check.longitude_limit()));

    if let Err(err) = checked {
        debug!("DMS position {dms} is invalid: {err}");
        return false;
    }
    true
}

/// Convert the DMS position into the signed decimal degrees.
///
/// ```
/// # use dmsconv_types::{dms_to_decimal, DmsPosition, DmsValue, LatitudeDirection, LongitudeDirection};
/// let dms = DmsPosition::new(
///     DmsValue::new(33, 27.0, 0.0, LatitudeDirection::South),
///     DmsValue::new(70, 40.0, 0.0, LongitudeDirection::West),
/// );
/// let decimal = dms_to_decimal(dms).unwrap();
/// assert!((decimal.latitude + 33.45).abs() < 1e-9);
/// assert!((decimal.longitude + 70.666_666_667).abs() < 1e-9);
/// ```
///
/// # Errors
/// The position is checked part by part (degrees, then minutes, then seconds),
/// the latitude before the longitude, and the first violation is returned:
/// - degrees more than 90 for the latitude or 180 for the longitude;
/// - minutes or seconds not in the range `[0..60)`;
/// - non-zero minutes or seconds for the component at its maximum degrees.
pub fn dms_to_decimal(dms: DmsPosition) -> Result<DecimalPosition, ValidationError> {
    let DmsPosition {
        latitude: lat,
        longitude: lon,
    } = dms;

    let checked = lat
        .check_degrees(QUARTER_TURN_DEG)
        .and_then(|()| lon.check_degrees(HALF_TURN_DEG))
        .and_then(|()| lat.check_minutes())
        .and_then(|()| lon.check_minutes())
        .and_then(|()| lat.check_seconds())
        .and_then(|()| lon.check_seconds());

    if let Err(err) = checked {
        debug!("Cannot convert {dms} to decimal: {err}");
        return Err(err);
    }

    let decimal = DecimalPosition::new(lat.to_decimal(), lon.to_decimal());
    trace!("{dms} -> {decimal}");
    Ok(decimal)
}

/// Convert the signed decimal degrees into the DMS position.
///
/// The zero latitude is considered northern and the zero longitude eastern.
///
/// ```
/// # use dmsconv_types::{decimal_to_dms, DecimalPosition, LatitudeDirection};
/// let dms = decimal_to_dms(DecimalPosition::new(-66.5, 0.0)).unwrap();
/// assert_eq!(dms.latitude.degrees, 66);
/// assert_eq!(dms.latitude.minutes, 30.0);
/// assert_eq!(dms.latitude.direction, LatitudeDirection::South);
/// ```
///
/// # Errors
/// The latitude is not in the range `[-90..90]` or the longitude is not in the range `[-180..180]`.
pub fn decimal_to_dms(decimal: DecimalPosition) -> Result<DmsPosition, ValidationError> {
    if let Err(err) = check_decimal(decimal) {
        debug!("Cannot convert {decimal} to DMS: {err}");
        return Err(err);
    }

    let dms = DmsPosition::new(
        DmsValue::from_decimal(decimal.latitude)?,
        DmsValue::from_decimal(decimal.longitude)?,
    );
    trace!("{decimal} -> {dms}");
    Ok(dms)
}

impl TryFrom<DmsPosition> for DecimalPosition {
    type Error = ValidationError;

    fn try_from(dms: DmsPosition) -> Result<Self, Self::Error> {
        dms_to_decimal(dms)
    }
}

impl TryFrom<DecimalPosition> for DmsPosition {
    type Error = ValidationError;

    fn try_from(decimal: DecimalPosition) -> Result<Self, Self::Error> {
        decimal_to_dms(decimal)
    }
}
