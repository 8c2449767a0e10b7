//! Hemisphere indicators, one type per coordinate axis.
//!
//! The latitude and the longitude have their own direction types,
//! so it is impossible to put `East` where `North` or `South` is expected.

use std::{convert::TryFrom, fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{HALF_TURN_DEG, QUARTER_TURN_DEG},
    errors::{Axis, ValidationError},
};

/// The direction of a coordinate component from the equator or the prime meridian
pub trait Hemisphere:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + From<bool>
    + TryFrom<char, Error = ValidationError>
{
    /// The axis this direction applies to
    const AXIS: Axis;

    /// The maximum number of degrees geographically valid for the axis
    const MAX_DEGREES: u16;

    /// North and East are positive, South and West are negative
    fn is_positive(self) -> bool;
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($(#[$doc:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal; $axis:ident up to $max:expr) => {
        use self::$name::{$falsy, $truthy};

        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl Hemisphere for $name {
            const AXIS: Axis = Axis::$axis;
            const MAX_DEGREES: u16 = $max;

            fn is_positive(self) -> bool {
                self == $truthy
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $falsy => $truthy,
                    $truthy => $falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl TryFrom<char> for $name {
            type Error = ValidationError;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c.to_ascii_uppercase() {
                    $true_ch => Ok($truthy),
                    $false_ch => Ok($falsy),
                    _ => Err(ValidationError::Direction(Axis::$axis)),
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut chars = s.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::try_from(c),
                    _ => Err(ValidationError::Direction(Axis::$axis)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}

bool_enum!(
    /// The hemisphere of a latitude
    LatitudeDirection: North and South; parse from 'N':'S'; Latitude up to QUARTER_TURN_DEG
);
bool_enum!(
    /// The hemisphere of a longitude
    LongitudeDirection: East and West; parse from 'E':'W'; Longitude up to HALF_TURN_DEG
);
