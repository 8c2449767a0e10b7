//! Conversion of geographic coordinates between the signed decimal degrees
//! and the degree-minute-second (DMS) notation with an explicit hemisphere.
//!
//! ```
//! use dmsconv_types::{decimal_to_dms, dms_to_decimal, DecimalPosition};
//!
//! let dms = decimal_to_dms(DecimalPosition::new(37.443_218_67, -127.775_334)).unwrap();
//! assert_eq!(format!("{dms:#.1}"), "Lat: 37°26′35.6″N, Long: 127°46′31.2″W");
//!
//! let back = dms_to_decimal(dms).unwrap();
//! assert!((back.longitude + 127.775_334).abs() < 1e-9);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use self::{
    convert::{
        decimal_to_dms, dms_to_decimal, validate_decimal, validate_dms, validate_dms_with,
        RangeCheck,
    },
    direction::{Hemisphere, LatitudeDirection, LongitudeDirection},
    errors::{Axis, ParseCoordinateError, ValidationError},
    position::{DecimalPosition, DmsPosition, DmsValue, LatitudeDms, LongitudeDms},
};

mod consts;
mod convert;
mod direction;
mod errors;
mod parse;
mod position;
mod utils;
