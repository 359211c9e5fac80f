//! # Construction shorthand

/// Create a [`Fraction`](crate::Fraction) from literals.
///
/// A single value is an integer wrapped over a denominator of one; two
/// values are numerator and denominator.
///
/// ```
/// use exact_fraction::frac;
///
/// assert_eq!(frac!(3).to_string(), "3/1");
/// assert_eq!(frac!(2, 4).to_string(), "2/4");
/// ```
///
/// # Panics
///
/// When the denominator is zero. Intended for literals known to be valid;
/// use [`Fraction::new`](crate::Fraction::new) for runtime values.
#[macro_export]
macro_rules! frac {
    ($numerator:expr) => {
        $crate::Fraction::from($numerator as i64)
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::Fraction::new($numerator as i64, $denominator as i64) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
}
