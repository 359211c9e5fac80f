//! # Fraction
//!
//! A mutable numerator/denominator pair over `i64`. The value is not kept
//! in lowest terms automatically; reduction is the explicit [`simplify`]
//! operation. Float-valued construction and float-valued edits are the
//! exception, they rescale to an exact integer ratio and reduce on the way
//! in.
//!
//! [`simplify`]: Fraction::simplify
use std::cmp;
use std::convert::TryFrom;
use std::fmt;

use num::FromPrimitive;
use num::traits::Inv;

use crate::rational::{Rational, RationalError};

/// An exact ratio of two machine integers.
///
/// Intended for single-owner, single-thread use; arithmetic returns fresh
/// values, the setter and rescale family mutates in place. Clone when
/// isolation is required.
#[derive(Debug, Clone)]
pub struct Fraction {
    /// Signed; carries the sign of the value together with `denominator`.
    numerator: i64,
    /// Should be nonzero. The checked constructors and strict rescales
    /// enforce this, the plain integer setters don't.
    denominator: i64,
}

impl Fraction {
    /// Store the two values as-is.
    ///
    /// No reduction is performed.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::InvalidDenominator);
        }

        Ok(Self { numerator, denominator })
    }

    /// An exact integer ratio equal to `numerator / denominator`, even
    /// though both inputs are floating point.
    ///
    /// Both inputs are scaled by the smallest power of ten that makes them
    /// integral, then the result is reduced. So `from_f64s(0.5, 1.5)` is
    /// `5/15` before reduction and `1/3` after.
    ///
    /// Inputs that are non-finite, or whose scaled form doesn't fit the
    /// machine integer range, are rejected with
    /// [`RationalError::NotConvertible`].
    pub fn from_f64s(numerator: f64, denominator: f64) -> Result<Self, RationalError> {
        if !numerator.is_finite() || !denominator.is_finite() {
            return Err(RationalError::NotConvertible);
        }
        if denominator == 0_f64 {
            return Err(RationalError::InvalidDenominator);
        }

        let scale = scale_factor(numerator, denominator)?;
        let mut result = Self {
            numerator: scaled(numerator, scale)?,
            denominator: scaled(denominator, scale)?,
        };
        result.simplify();

        Ok(result)
    }

    /// Construct and immediately reduce.
    pub(crate) fn simplified(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        let mut result = Self::new(numerator, denominator)?;
        result.simplify();

        Ok(result)
    }

    /// Copy the two fields without validation.
    ///
    /// Keeps conversion from arbitrary `Rational` implementors total.
    pub(crate) fn raw(numerator: i64, denominator: i64) -> Self {
        Self { numerator, denominator }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Plain overwrite. No validation, no reduction.
    pub fn set_numerator(&mut self, value: i64) {
        self.numerator = value;
    }

    /// Plain overwrite. No validation, no reduction.
    ///
    /// A zero value is accepted here and propagates into later operations;
    /// see the crate error documentation for this inherited risk.
    pub fn set_denominator(&mut self, value: i64) {
        self.denominator = value;
    }

    /// Overwrite the numerator with a float, rescaling the pair so the
    /// stored ratio stays an exact integer one, then reduce.
    ///
    /// On failure the value is left untouched.
    pub fn set_numerator_f64(&mut self, value: f64) -> Result<(), RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NotConvertible);
        }

        let scale = scale_factor(value, self.denominator as f64)?;
        let numerator = scaled(value, scale)?;
        let denominator = self.denominator.checked_mul(scale)
            .ok_or(RationalError::NotConvertible)?;

        self.numerator = numerator;
        self.denominator = denominator;
        self.simplify();

        Ok(())
    }

    /// Overwrite the denominator with a float, rescaling the pair so the
    /// stored ratio stays an exact integer one, then reduce.
    ///
    /// On failure the value is left untouched.
    pub fn set_denominator_f64(&mut self, value: f64) -> Result<(), RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NotConvertible);
        }

        let scale = scale_factor(self.numerator as f64, value)?;
        let denominator = scaled(value, scale)?;
        let numerator = self.numerator.checked_mul(scale)
            .ok_or(RationalError::NotConvertible)?;

        self.numerator = numerator;
        self.denominator = denominator;
        self.simplify();

        Ok(())
    }

    /// Rescale such that the denominator becomes `target` while the value
    /// is preserved as well as possible.
    ///
    /// Best effort: when the scaled numerator is not integral it is
    /// rounded and the resulting imprecision accepted. A zero current
    /// denominator leaves the value unchanged. Use
    /// [`try_rescale_to_denominator`] when rounding is not acceptable.
    ///
    /// [`try_rescale_to_denominator`]: Fraction::try_rescale_to_denominator
    pub fn rescale_to_denominator(&mut self, target: i64) {
        if self.denominator == 0 {
            return;
        }

        let times = target as f64 / self.denominator as f64;
        self.numerator = (self.numerator as f64 * times).round() as i64;
        self.denominator = target;
    }

    /// Rescale such that the denominator becomes exactly `target`, failing
    /// when that can't be done without changing the value.
    pub fn try_rescale_to_denominator(&mut self, target: i64) -> Result<(), RationalError> {
        if target == 0 || self.denominator == 0 {
            return Err(RationalError::InvalidDenominator);
        }

        let scaled = self.numerator.checked_mul(target)
            .ok_or(RationalError::InvalidDenominator)?;
        if scaled % self.denominator != 0 {
            return Err(RationalError::InvalidDenominator);
        }

        self.numerator = scaled / self.denominator;
        self.denominator = target;

        Ok(())
    }

    /// Counterpart of [`rescale_to_denominator`] fixing the numerator
    /// instead.
    ///
    /// [`rescale_to_denominator`]: Fraction::rescale_to_denominator
    pub fn rescale_to_numerator(&mut self, target: i64) {
        if self.numerator == 0 {
            return;
        }

        let times = target as f64 / self.numerator as f64;
        self.denominator = (self.denominator as f64 * times).round() as i64;
        self.numerator = target;
    }

    /// Counterpart of [`try_rescale_to_denominator`] fixing the numerator
    /// instead.
    ///
    /// [`try_rescale_to_denominator`]: Fraction::try_rescale_to_denominator
    pub fn try_rescale_to_numerator(&mut self, target: i64) -> Result<(), RationalError> {
        if target == 0 || self.numerator == 0 {
            return Err(RationalError::InvalidDenominator);
        }

        let scaled = self.denominator.checked_mul(target)
            .ok_or(RationalError::InvalidDenominator)?;
        if scaled % self.numerator != 0 {
            return Err(RationalError::InvalidDenominator);
        }

        self.denominator = scaled / self.numerator;
        self.numerator = target;

        Ok(())
    }

    /// Reduce to lowest terms in place with Euclid's algorithm.
    ///
    /// Never signals: a zero denominator leaves the value unchanged, and
    /// when the denominator divides the numerator evenly the value
    /// collapses directly to `numerator / denominator` over one (this
    /// covers a zero numerator collapsing to `0/1`). A quotient outside
    /// the machine integer range (`i64::MIN` over minus one) also leaves
    /// the value unchanged rather than overflowing.
    ///
    /// The sign placement is not canonicalized; `1/-2` stays `1/-2`.
    pub fn simplify(&mut self) {
        if self.denominator == 0 {
            return;
        }

        // The divisor is the denominator itself when it divides the
        // numerator evenly (the loop would never execute and its last
        // remainder would be undefined), otherwise the last nonzero
        // Euclidean remainder. A `None` remainder is the one overflowing
        // case, `i64::MIN` over minus one, which divides evenly.
        let divisor = match self.numerator.checked_rem(self.denominator) {
            Some(0) | None => self.denominator,
            Some(mut remainder) => {
                let (mut a, mut b) = (self.denominator, remainder);
                while let Some(next) = a.checked_rem(b) {
                    if next == 0 {
                        break;
                    }
                    remainder = next;
                    a = b;
                    b = next;
                }
                remainder
            },
        };

        if let (Some(numerator), Some(denominator)) = (
            self.numerator.checked_div(divisor),
            self.denominator.checked_div(divisor),
        ) {
            self.numerator = numerator;
            self.denominator = denominator;
        }
    }

    /// A new fraction with numerator and denominator swapped.
    ///
    /// No reduction is performed. A zero numerator would turn into a zero
    /// denominator and is rejected instead.
    pub fn reciprocal(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator, self.numerator)
    }
}

impl Rational for Fraction {
    fn numerator(&self) -> i64 {
        self.numerator
    }

    fn denominator(&self) -> i64 {
        self.denominator
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }
}

impl From<&i64> for Fraction {
    fn from(value: &i64) -> Self {
        Self::from(*value)
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        i64::try_from(n).ok().map(Self::from)
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_f64s(n, 1_f64).ok()
    }
}

impl Inv for &Fraction {
    type Output = Result<Fraction, RationalError>;

    fn inv(self) -> Self::Output {
        self.reciprocal()
    }
}

impl fmt::Display for Fraction {
    /// The current stored state as `numerator/denominator`, unreduced.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The smallest power of ten making both inputs integral.
///
/// Powers outside the machine integer range can't be used for scaling and
/// are rejected.
fn scale_factor(left: f64, right: f64) -> Result<i64, RationalError> {
    let digits = cmp::max(fraction_digits(left), fraction_digits(right));
    10_i64.checked_pow(digits).ok_or(RationalError::NotConvertible)
}

/// The number of digits strictly after the decimal point in the shortest
/// decimal representation, zero for integral values.
fn fraction_digits(value: f64) -> u32 {
    let text = format!("{}", value);
    match text.find('.') {
        Some(dot) => (text.len() - dot - 1) as u32,
        None => 0,
    }
}

/// Round `value * scale` to the nearest machine integer.
///
/// The upper bound is exclusive: `i64::MAX as f64` rounds up to `2^63`,
/// one past the largest representable value. The lower bound `-2^63` is
/// exact and stays inclusive.
fn scaled(value: f64, scale: i64) -> Result<i64, RationalError> {
    let scaled = (value * scale as f64).round();
    if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
        return Err(RationalError::NotConvertible);
    }

    Ok(scaled as i64)
}
