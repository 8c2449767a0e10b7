//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Split a signed value into its magnitude and sign
pub(crate) trait ToUnsigned: Copy {
    /// The absolute value and whether the value is non-negative.
    ///
    /// Zero (including the negative zero) is considered non-negative.
    fn unsigned_abs(self) -> (Self, bool);
}

impl ToUnsigned for f64 {
    fn unsigned_abs(self) -> (Self, bool) {
        if self >= 0.0 {
            (self, true)
        } else {
            (-self, false)
        }
    }
}

/// Render the number with at most `max_digits` of fraction, without trailing zeros
pub(crate) fn trim_fraction(value: f64, max_digits: usize) -> String {
    let mut repr = format!("{value:.max_digits$}");
    if repr.contains('.') {
        let trimmed_len = repr.trim_end_matches('0').trim_end_matches('.').len();
        repr.truncate(trimmed_len);
    }

    if repr == "-0" {
        repr.remove(0);
    }
    repr
}
