//! # Exact fraction arithmetic
//!
//! Values are numerator/denominator pairs over machine integers, so sums,
//! products and comparisons are exact where floating point would round.
//!
//! The crate has two entry points:
//!
//! * [`rational::Fraction`], a small mutable value type carrying the
//!   arithmetic, reduction and rescaling logic, and
//! * [`equation`], a namespace of free functions mirroring the instance
//!   operations for call sites that prefer that style.
//!
//! ```
//! use exact_fraction::{frac, Mode};
//!
//! let half = frac!(1, 2);
//! let third = frac!(1, 3);
//! let sum = half.add_in(Mode::Exact, &third).unwrap();
//! assert_eq!(sum, frac!(5, 6));
//! ```
//!
//! Arithmetic defaults to [`Mode::Legacy`](rational::Mode), which keeps the
//! quirks of the calculator this crate replaces; see [`rational::Mode`] for
//! the differences and pick [`Mode::Exact`](rational::Mode) for standard
//! mathematical behavior.
pub mod equation;
pub mod rational;

pub use rational::{Fraction, Mode, Rational, RationalError};
