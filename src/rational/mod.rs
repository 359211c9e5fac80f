//! # Rational numbers
//!
//! Exact arithmetic over numerator/denominator pairs of machine integers.
use std::error::Error;
use std::fmt;

pub use fraction::Fraction;
pub use ops::Mode;

mod compare;
mod fraction;
mod macros;
mod ops;

/// Anything exposing a numerator and a denominator, usable wherever a
/// fraction is expected.
///
/// Arithmetic and comparison are generic over this trait; conversion into
/// the concrete [`Fraction`] representation is total, see
/// [`crate::equation::to_fraction`].
pub trait Rational {
    fn numerator(&self) -> i64;
    fn denominator(&self) -> i64;
}

/// Validation failure from a checked constructor, a strict rescale or a
/// float conversion.
///
/// Every error is local and recoverable; nothing in this crate aborts or
/// retries.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RationalError {
    /// A zero denominator was supplied, or a strict rescale could not
    /// produce an integral field.
    InvalidDenominator,
    /// A floating point input could not be scaled to an exact machine
    /// integer ratio (non-finite, or out of range after scaling).
    NotConvertible,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidDenominator => {
                write!(f, "denominator can't be zero or made non integral")
            },
            Self::NotConvertible => {
                write!(f, "value can't be represented as an exact integer ratio")
            },
        }
    }
}

impl Error for RationalError {}
