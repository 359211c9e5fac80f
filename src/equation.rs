//! # Free function façade
//!
//! Stateless mirrors of the [`Fraction`] instance operations, for call
//! sites that prefer free functions over methods. Everything here
//! delegates; there is no state and no behavior of its own. The
//! arithmetic mirrors use the default [`Mode::Legacy`](crate::Mode)
//! rules, reach for the `_in` methods on [`Fraction`] to pick rules
//! explicitly.
use crate::rational::{Fraction, Rational, RationalError};

/// Convert any rational-like value into the concrete [`Fraction`]
/// representation.
///
/// Total over the [`Rational`] capability: the two fields are copied
/// as-is, without validation or reduction.
pub fn to_fraction<R: Rational + ?Sized>(value: &R) -> Fraction {
    Fraction::raw(value.numerator(), value.denominator())
}

/// Wrap an integer as a fraction over one.
pub fn from_integer(value: i64) -> Fraction {
    Fraction::from(value)
}

/// Reduce `value` in place and hand it back.
pub fn simplify(value: &mut Fraction) -> &mut Fraction {
    value.simplify();
    value
}

/// Sum of the two values, see [`Fraction::add`].
pub fn add<A: Rational, B: Rational>(lhs: &A, rhs: &B) -> Result<Fraction, RationalError> {
    to_fraction(lhs).add(rhs)
}

/// Difference of the two values, see [`Fraction::sub`].
pub fn sub<A: Rational, B: Rational>(lhs: &A, rhs: &B) -> Result<Fraction, RationalError> {
    to_fraction(lhs).sub(rhs)
}

/// Product of the two values, see [`Fraction::mul`].
pub fn mul<A: Rational, B: Rational>(lhs: &A, rhs: &B) -> Result<Fraction, RationalError> {
    to_fraction(lhs).mul(rhs)
}

/// Quotient of the two values, see [`Fraction::div`].
pub fn div<A: Rational, B: Rational>(lhs: &A, rhs: &B) -> Result<Fraction, RationalError> {
    to_fraction(lhs).div(rhs)
}

/// `base` raised to `exponent`, see [`Fraction::power`].
pub fn power<R: Rational>(base: &R, exponent: i32) -> Result<Fraction, RationalError> {
    to_fraction(base).power(exponent)
}

/// The value with numerator and denominator swapped, see
/// [`Fraction::reciprocal`].
pub fn reciprocal<R: Rational>(value: &R) -> Result<Fraction, RationalError> {
    to_fraction(value).reciprocal()
}

/// The value as a float under the default rules, see [`Fraction::to_f64`].
pub fn to_f64<R: Rational>(value: &R) -> f64 {
    to_fraction(value).to_f64()
}

#[cfg(test)]
mod test {
    use crate::frac;
    use crate::rational::Rational;

    use super::*;

    #[test]
    fn conversion_copies_fields() {
        let original = frac!(512, 1024);
        let converted = to_fraction(&original);

        assert_eq!(converted.numerator(), 512);
        assert_eq!(converted.denominator(), 1024);
    }

    #[test]
    fn conversion_is_total_over_the_trait() {
        struct Ratio(i64, i64);
        impl Rational for Ratio {
            fn numerator(&self) -> i64 {
                self.0
            }
            fn denominator(&self) -> i64 {
                self.1
            }
        }

        let converted = to_fraction(&Ratio(3, 4));
        assert_eq!(converted, frac!(3, 4));
    }

    #[test]
    fn integers_wrap_over_one() {
        let wrapped = from_integer(3);

        assert_eq!(wrapped.numerator(), 3);
        assert_eq!(wrapped.denominator(), 1);
    }

    #[test]
    fn simplify_mutates_and_returns_the_same_value() {
        let mut value = frac!(512, 1024);
        assert_eq!(simplify(&mut value).to_string(), "1/2");
        assert_eq!(value.to_string(), "1/2");
    }

    #[test]
    fn arithmetic_delegates() {
        let half = frac!(1, 2);
        let third = frac!(1, 3);

        assert_eq!(mul(&half, &third).unwrap(), frac!(1, 6));
        assert_eq!(div(&half, &third).unwrap(), frac!(3, 2));
        assert_eq!(reciprocal(&half).unwrap().to_string(), "2/1");
        assert_eq!(power(&half, 2).unwrap(), frac!(1, 4));
    }

    #[test]
    fn float_readback_delegates_to_the_default_rules() {
        assert_eq!(to_f64(&frac!(7, 2)), 3_f64);
    }
}
