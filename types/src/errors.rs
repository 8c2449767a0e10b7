use std::{
    error::Error,
    fmt,
    num::{ParseFloatError, ParseIntError},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::enum_trivial_from_impl;

/// The coordinate axis a value belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// North-south component
    Latitude,
    /// East-west component
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        };
        write!(f, "{name}")
    }
}

/// A field of a coordinate failed its range check
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The direction does not belong to the axis (e.g. `E` for a latitude)
    Direction(Axis),
    /// The degrees (or the whole decimal value) exceed the axis limit
    Degrees(Axis),
    /// Arc minutes not in range `[0..60)`
    ArcMinutes(Axis),
    /// Arc seconds not in range `[0..60)`
    ArcSeconds(Axis),
}

impl ValidationError {
    /// Which axis failed the check
    pub const fn axis(self) -> Axis {
        match self {
            Self::Direction(axis)
            | Self::Degrees(axis)
            | Self::ArcMinutes(axis)
            | Self::ArcSeconds(axis) => axis,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direction(axis @ Axis::Latitude) => {
                write!(f, "Only N or S direction is allowed for the {axis}")
            }
            Self::Direction(axis @ Axis::Longitude) => {
                write!(f, "Only E or W direction is allowed for the {axis}")
            }
            Self::Degrees(axis @ Axis::Latitude) => {
                write!(f, "The {axis} is out of range (max is 90 degrees)")
            }
            Self::Degrees(axis @ Axis::Longitude) => {
                write!(f, "The {axis} is out of range (max is 180 degrees)")
            }
            Self::ArcMinutes(axis) => write!(f, "The {axis} arc minute value not in range [0..60)"),
            Self::ArcSeconds(axis) => write!(f, "The {axis} arc second value not in range [0..60)"),
        }
    }
}

impl Error for ValidationError {}

/// The error that can appear while parsing a coordinate from a string
#[derive(Debug)]
pub enum ParseCoordinateError {
    /// Parsed successfully, but the value is not valid
    Range(ValidationError),
    /// Bad decimal number
    Float(ParseFloatError),
    // this variant is practically impossible due to regex digits limitations
    /// Bad integer number
    Int(ParseIntError),
    /// The string does not look like a Degree-Minute-Second notation
    DmsNotation,
    /// Nothing to parse
    EmptyString,
    /// The direction (hemisphere) letter is absent or given twice
    NoHemisphere,
    /// The position requires both latitude and longitude separated by a comma
    MissingComponent,
}

enum_trivial_from_impl!(ValidationError => ParseCoordinateError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Float);
enum_trivial_from_impl!(ParseIntError => ParseCoordinateError:Int);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
            Self::EmptyString => write!(f, "empty string provided"),
            Self::NoHemisphere => write!(f, "direction (hemisphere) was not detected"),
            Self::MissingComponent => {
                write!(f, "expected latitude and longitude separated by a comma")
            }
        }
    }
}

impl Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Float(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            _ => None,
        }
    }
}
