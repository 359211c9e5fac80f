//! # Value comparison
//!
//! Two fractions compare by value, not by stored fields: both sides are
//! cloned, brought to a common denominator (the product of the two current
//! denominators) with the strict rescale, and their numerators compared.
//! When the strict rescale can't be performed the comparison methods
//! answer `false` rather than propagating an error, and `partial_cmp` is
//! `None`.
use std::cmp::Ordering;

use crate::equation;
use crate::rational::{Fraction, Rational};

impl Fraction {
    /// Whether this value equals `other`, by the rescale-and-compare
    /// protocol.
    pub fn eq_value<R: Rational>(&self, other: &R) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Whether this value is strictly greater than `other`.
    pub fn is_greater_than<R: Rational>(&self, other: &R) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }

    /// Whether this value is strictly less than `other`.
    pub fn is_less_than<R: Rational>(&self, other: &R) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    fn compare<R: Rational>(&self, other: &R) -> Option<Ordering> {
        let mut left = self.clone();
        let mut right = equation::to_fraction(other);

        let common = left.denominator().checked_mul(right.denominator())?;
        left.try_rescale_to_denominator(common).ok()?;
        right.try_rescale_to_denominator(common).ok()?;

        Some(left.numerator().cmp(&right.numerator()))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.eq_value(other)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}
