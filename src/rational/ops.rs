//! # Arithmetic
//!
//! The binary operations accept any [`Rational`] implementor, convert it
//! to the concrete [`Fraction`] representation first and never mutate
//! either operand. Results come back freshly constructed and reduced.
//!
//! Addition, subtraction, exponentiation and the float conversion exist in
//! two rule sets, see [`Mode`]. The methods without a mode parameter use
//! [`Mode::Legacy`]; multiplication and division follow the same rules
//! under both.
use crate::equation;
use crate::rational::{Fraction, Rational, RationalError};

/// Which arithmetic rules apply.
///
/// `Legacy` reproduces the quirks of the first generation of this library,
/// kept so existing callers see identical results:
///
/// * addition and subtraction combine denominators by summing them instead
///   of multiplying,
/// * `power` squares its accumulator, so the result is
///   `x^(2^(n - 1))` for `n >= 1` and the unchanged value for `n <= 1`,
/// * the float conversion divides as integers, truncating toward zero.
///
/// `Exact` is standard fraction arithmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Legacy,
    Exact,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Legacy
    }
}

impl Fraction {
    /// Sum of this value and `rhs` under the default rules.
    pub fn add<R: Rational>(&self, rhs: &R) -> Result<Self, RationalError> {
        self.add_in(Mode::default(), rhs)
    }

    /// Sum of this value and `rhs`.
    ///
    /// Under [`Mode::Legacy`] the result denominator is the sum of the two
    /// denominators; when those cancel to zero the result can't be
    /// constructed and [`RationalError::InvalidDenominator`] is reported.
    pub fn add_in<R: Rational>(&self, mode: Mode, rhs: &R) -> Result<Self, RationalError> {
        let rhs = equation::to_fraction(rhs);
        let numerator = self.numerator() * rhs.denominator()
            + rhs.numerator() * self.denominator();
        Self::simplified(numerator, combined_denominator(mode, self, &rhs))
    }

    /// Difference of this value and `rhs` under the default rules.
    pub fn sub<R: Rational>(&self, rhs: &R) -> Result<Self, RationalError> {
        self.sub_in(Mode::default(), rhs)
    }

    /// Difference of this value and `rhs`, denominator rule as
    /// [`add_in`](Fraction::add_in).
    pub fn sub_in<R: Rational>(&self, mode: Mode, rhs: &R) -> Result<Self, RationalError> {
        let rhs = equation::to_fraction(rhs);
        let numerator = self.numerator() * rhs.denominator()
            - rhs.numerator() * self.denominator();
        Self::simplified(numerator, combined_denominator(mode, self, &rhs))
    }

    /// Product of this value and `rhs` under the default rules.
    pub fn mul<R: Rational>(&self, rhs: &R) -> Result<Self, RationalError> {
        self.mul_in(Mode::default(), rhs)
    }

    /// Product of this value and `rhs`, the standard cross product under
    /// either rule set.
    pub fn mul_in<R: Rational>(&self, _mode: Mode, rhs: &R) -> Result<Self, RationalError> {
        let rhs = equation::to_fraction(rhs);
        Self::simplified(
            self.numerator() * rhs.numerator(),
            self.denominator() * rhs.denominator(),
        )
    }

    /// Quotient of this value and `rhs` under the default rules.
    pub fn div<R: Rational>(&self, rhs: &R) -> Result<Self, RationalError> {
        self.div_in(Mode::default(), rhs)
    }

    /// Quotient of this value and `rhs`, as multiplication by the
    /// reciprocal under either rule set.
    ///
    /// A zero numerator in `rhs` is division by zero and reported as
    /// [`RationalError::InvalidDenominator`] through the reciprocal.
    pub fn div_in<R: Rational>(&self, mode: Mode, rhs: &R) -> Result<Self, RationalError> {
        let rhs = equation::to_fraction(rhs);
        self.mul_in(mode, &rhs.reciprocal()?)
    }

    /// This value raised to `exponent` under the default rules.
    pub fn power(&self, exponent: i32) -> Result<Self, RationalError> {
        self.power_in(Mode::default(), exponent)
    }

    /// This value raised to `exponent`.
    ///
    /// Under [`Mode::Exact`], a zero exponent yields one and negative
    /// exponents work through the reciprocal (failing for a zero
    /// numerator). See [`Mode`] for the legacy accumulator behavior.
    pub fn power_in(&self, mode: Mode, exponent: i32) -> Result<Self, RationalError> {
        match mode {
            Mode::Legacy => {
                let mut result = self.clone();
                for _ in 1..exponent {
                    result = result.mul(&result)?;
                }
                Ok(result)
            },
            Mode::Exact => {
                let mut base = self.clone();
                let mut remaining = i64::from(exponent);
                if remaining < 0 {
                    base = self.reciprocal()?;
                    remaining = -remaining;
                }

                let mut result = Self::from(1);
                for _ in 0..remaining {
                    result = result.mul(&base)?;
                }
                Ok(result)
            },
        }
    }

    /// This value as a float under the default rules.
    ///
    /// # Panics
    ///
    /// The legacy rules divide as integers; a zero denominator, possible
    /// through the plain setters, panics here like any integer division.
    pub fn to_f64(&self) -> f64 {
        self.to_f64_in(Mode::default())
    }

    /// This value as a float: truncating integer division under
    /// [`Mode::Legacy`], real division under [`Mode::Exact`].
    pub fn to_f64_in(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Legacy => (self.numerator() / self.denominator()) as f64,
            Mode::Exact => self.numerator() as f64 / self.denominator() as f64,
        }
    }
}

fn combined_denominator(mode: Mode, lhs: &Fraction, rhs: &Fraction) -> i64 {
    match mode {
        Mode::Legacy => lhs.denominator() + rhs.denominator(),
        Mode::Exact => lhs.denominator() * rhs.denominator(),
    }
}
