//! Reading the coordinates from the text in either
//! the decimal (`37.443219,-127.775334`) or the DMS (`62°17′41.332″N`) notation.

use std::{convert::TryFrom, str::FromStr};

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN},
    convert::validate_decimal,
    direction::Hemisphere,
    errors::{Axis, ParseCoordinateError, ValidationError},
    position::{DecimalPosition, DmsPosition, DmsValue},
};

/// Construct regular expression to parse Degree-Minute-Second representation of a coordinate.
///
/// Both ASCII (`*`, `'`, `"`) and Unicode (`°`, `′`, `″`) signs are allowed.
fn parse_dms_re() -> String {
    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?:(?P<prefix>[A-Za-z])\x20?)?                  # optional hemisphere letter before the value
        (?P<deg>\d{{1,3}})                              # mandatory degree VALUE (0..=999) - requires more validation!
        (?:{deg_sign}|\*)?                              # optional degree sign
        (?:\x20?                                        # minutes and seconds group optionally started with the space
            (?P<min>\d{{1,2}}(?:\.\d+)?)                    # minutes VALUE with optional fraction - requires more validation!
            (?:{min_sign}|')                                # arcminute sign
            (?:\x20?                                        # seconds group optionally started with the space
                (?P<sec>\d{{1,2}}(?:\.\d+)?)                    # seconds VALUE with optional fraction - requires more validation!
                (?:{sec_sign}|")                                # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        (?:\x20?(?P<suffix>[A-Za-z]))?                  # optional hemisphere letter after the value
        $                                           # match the whole line till the end
        "#,
        deg_sign = DEGREE_SIGN,
        min_sign = ARC_MINUTE_SIGN,
        sec_sign = ARC_SECOND_SIGN,
    )
}

lazy_static! {
    static ref RE_DMS: Regex = Regex::new(&parse_dms_re()).expect("DMS regex is valid");
}

fn parse_part(captures: &Captures<'_>, name: &str) -> Result<f64, ParseCoordinateError> {
    captures
        .name(name)
        .map_or(Ok(0.0), |m| m.as_str().parse::<f64>().map_err(Into::into))
}

fn parse_direction<D: Hemisphere>(captures: &Captures<'_>) -> Result<D, ParseCoordinateError> {
    let letter = |name: &str| {
        captures
            .name(name)
            .and_then(|m| m.as_str().chars().next())
    };

    match (letter("prefix"), letter("suffix")) {
        (Some(c), None) | (None, Some(c)) => Ok(D::try_from(c)?),
        _ => Err(ParseCoordinateError::NoHemisphere),
    }
}

impl<D: Hemisphere> DmsValue<D> {
    /// Parse the DMS notation checking only the direction letter but not the ranges,
    /// so the value can be validated later, e.g. with [`validate_dms_with`](fn.validate_dms_with.html).
    ///
    /// # Errors
    /// The string is empty, not in the DMS notation
    /// or has no direction letter suitable for the axis.
    pub fn parse_unchecked(s: &str) -> Result<Self, ParseCoordinateError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCoordinateError::EmptyString);
        }

        let captures = RE_DMS
            .captures(s)
            .ok_or(ParseCoordinateError::DmsNotation)?;

        let degrees = captures
            .name("deg")
            .ok_or(ParseCoordinateError::DmsNotation)?
            .as_str()
            .parse::<u16>()?;
        let minutes = parse_part(&captures, "min")?;
        let seconds = parse_part(&captures, "sec")?;
        let direction = parse_direction(&captures)?;

        Ok(Self::new(degrees, minutes, seconds, direction))
    }
}

impl<D: Hemisphere> FromStr for DmsValue<D> {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Self::parse_unchecked(s).map_err(|err| {
            debug!("Cannot parse {s:?} as {}: {err}", D::AXIS);
            err
        })?;
        value.check(D::MAX_DEGREES)?;
        Ok(value)
    }
}

fn split_pair(s: &str) -> Result<(&str, &str), ParseCoordinateError> {
    if s.trim().is_empty() {
        return Err(ParseCoordinateError::EmptyString);
    }

    let mut parts = s.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => Ok((lat, lon)),
        _ => Err(ParseCoordinateError::MissingComponent),
    }
}

impl FromStr for DmsPosition {
    type Err = ParseCoordinateError;

    /// Parse the DMS latitude and longitude separated by a comma
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = split_pair(s)?;
        Ok(Self::new(lat.parse()?, lon.parse()?))
    }
}

impl FromStr for DecimalPosition {
    type Err = ParseCoordinateError;

    /// Parse the signed decimal latitude and longitude separated by a comma
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = split_pair(s)?;
        let position = Self::new(lat.trim().parse()?, lon.trim().parse()?);

        if !validate_decimal(position) {
            let axis = if validate_decimal(Self::new(position.latitude, 0.0)) {
                Axis::Longitude
            } else {
                Axis::Latitude
            };
            return Err(ValidationError::Degrees(axis).into());
        }
        Ok(position)
    }
}

impl<D: Hemisphere> TryFrom<&str> for DmsValue<D> {
    type Error = ParseCoordinateError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        direction::{
            LatitudeDirection::{North, South},
            LongitudeDirection::{East, West},
        },
        position::{LatitudeDms, LongitudeDms},
    };

    use super::*;

    #[test]
    fn unicode_suffix() {
        let lat: LatitudeDms = "62°17′41.332″N".parse().unwrap();
        assert_eq!(lat, DmsValue::new(62, 17.0, 41.332, North));
    }

    #[test]
    fn ascii_with_spaces() {
        let lon: LongitudeDms = "124 38' 7.332\" E".parse().unwrap();
        assert_eq!(lon, DmsValue::new(124, 38.0, 7.332, East));
    }

    #[test]
    fn ascii_asterisk() {
        let lon: LongitudeDms = "127*46'31.2\"W".parse().unwrap();
        assert_eq!(lon, DmsValue::new(127, 46.0, 31.2, West));
    }

    #[test]
    fn prefix_direction() {
        let lat: LatitudeDms = "S 33°27′".parse().unwrap();
        assert_eq!(lat, DmsValue::new(33, 27.0, 0.0, South));
    }

    #[test]
    fn degrees_only() {
        let lat: LatitudeDms = "90°N".parse().unwrap();
        assert_eq!(lat, DmsValue::new(90, 0.0, 0.0, North));

        let lon: LongitudeDms = "w180".parse().unwrap();
        assert_eq!(lon, DmsValue::new(180, 0.0, 0.0, West));
    }

    #[test]
    fn fractional_minutes() {
        let lat: LatitudeDms = "10°59.999′N".parse().unwrap();
        assert_eq!(lat, DmsValue::new(10, 59.999, 0.0, North));
    }

    #[test]
    fn wrong_axis_letter() {
        let err = "62°17′41″E".parse::<LatitudeDms>().unwrap_err();
        assert!(matches!(
            err,
            ParseCoordinateError::Range(ValidationError::Direction(Axis::Latitude))
        ));
    }

    #[test]
    fn no_direction() {
        let err = "62°17′41″".parse::<LatitudeDms>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::NoHemisphere));
    }

    #[test]
    fn double_direction() {
        let err = "N62°17′41″N".parse::<LatitudeDms>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::NoHemisphere));
    }

    #[test]
    fn not_dms() {
        let err = "hello".parse::<LatitudeDms>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::DmsNotation));

        let err = "12.5°N".parse::<LatitudeDms>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::DmsNotation));
    }

    #[test]
    fn empty() {
        let err = "  ".parse::<LongitudeDms>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::EmptyString));
    }

    #[test]
    fn out_of_range() {
        let err = "91°N".parse::<LatitudeDms>().unwrap_err();
        assert!(matches!(
            err,
            ParseCoordinateError::Range(ValidationError::Degrees(Axis::Latitude))
        ));

        let err = "10°60′E".parse::<LongitudeDms>().unwrap_err();
        assert!(matches!(
            err,
            ParseCoordinateError::Range(ValidationError::ArcMinutes(Axis::Longitude))
        ));

        let err = "180°0′1″E".parse::<LongitudeDms>().unwrap_err();
        assert!(matches!(
            err,
            ParseCoordinateError::Range(ValidationError::ArcSeconds(Axis::Longitude))
        ));
    }

    #[test]
    fn position_pair() {
        let pos: DmsPosition = "62°17′41.332″N, 124°38′7.332″E".parse().unwrap();
        assert_eq!(pos.latitude, DmsValue::new(62, 17.0, 41.332, North));
        assert_eq!(pos.longitude, DmsValue::new(124, 38.0, 7.332, East));
    }

    #[test]
    fn position_missing_longitude() {
        let err = "62°17′41.332″N".parse::<DmsPosition>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::MissingComponent));

        let err = "1°N,2°E,3°E".parse::<DmsPosition>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::MissingComponent));
    }

    #[test]
    fn decimal_pair() {
        let pos: DecimalPosition = "37.44321867, -127.775334".parse().unwrap();
        assert_eq!(pos, DecimalPosition::new(37.443_218_67, -127.775_334));
    }

    #[test]
    fn decimal_pair_out_of_range() {
        let err = "37.4,-181".parse::<DecimalPosition>().unwrap_err();
        assert!(matches!(
            err,
            ParseCoordinateError::Range(ValidationError::Degrees(Axis::Longitude))
        ));

        let err = "-95,0".parse::<DecimalPosition>().unwrap_err();
        assert!(matches!(
            err,
            ParseCoordinateError::Range(ValidationError::Degrees(Axis::Latitude))
        ));
    }

    #[test]
    fn decimal_pair_not_a_number() {
        let err = "north,0".parse::<DecimalPosition>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::Float(_)));
    }

    #[test]
    fn unchecked_keeps_out_of_range() {
        let lon = LongitudeDms::parse_unchecked("181°E").unwrap();
        assert_eq!(lon, DmsValue::new(181, 0.0, 0.0, East));

        let err = LongitudeDms::parse_unchecked("181°N").unwrap_err();
        assert!(matches!(
            err,
            ParseCoordinateError::Range(ValidationError::Direction(Axis::Longitude))
        ));
    }

    #[test]
    fn display_then_parse() {
        let lat = DmsValue::new(37, 26.0, 35.587, North);
        let text = format!("{lat:#}");
        assert_eq!(text.parse::<LatitudeDms>().unwrap(), lat);

        let lon = DmsValue::new(127, 46.0, 31.202, West);
        let text = lon.to_string();
        assert_eq!(LongitudeDms::try_from(text.as_str()).unwrap(), lon);
    }
}
