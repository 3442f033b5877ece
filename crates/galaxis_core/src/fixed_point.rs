//! # Fixed-Point Arithmetic
//!
//! **Generation decisions never depend on floating point.**
//!
//! Masses, radii, eccentricities and orbit sizes are stored as signed Q32.32
//! fixed-point numbers. Every comparison that steers generation (retry loops,
//! minimum separations, orbit limits) happens on these values, so the same
//! seed produces the same tree on every CPU and compiler.
//!
//! ## Representation
//!
//! `Fixed` wraps an `i64` holding `value * 2^32`:
//!
//! - Integer range: -2,147,483,648 to 2,147,483,647
//! - Resolution: 2^-32 (about 2.3e-10)
//!
//! Multiplication and division widen to `i128` before shifting back.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Number of fractional bits.
const FRAC_BITS: u32 = 32;

/// Raw value of 1.0.
const ONE_RAW: i64 = 1 << FRAC_BITS;

/// Signed Q32.32 fixed-point number.
///
/// # Example
///
/// ```rust
/// use galaxis_core::Fixed;
///
/// let half = Fixed::from_ratio(1, 2);
/// let three = Fixed::from_int(3);
/// assert_eq!((half * three).to_f64(), 1.5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Fixed(i64);

impl Fixed {
    /// Zero value.
    pub const ZERO: Self = Self(0);

    /// One unit (1.0).
    pub const ONE: Self = Self(ONE_RAW);

    /// Creates a fixed-point number from a whole number.
    #[inline]
    #[must_use]
    pub const fn from_int(whole: i32) -> Self {
        Self((whole as i64) << FRAC_BITS)
    }

    /// Creates `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    ///
    /// ```rust,ignore
    /// let radius = Fixed::from_ratio(rand.int32_range(30, 60), 100); // 0.30 - 0.60
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_ratio(numerator: i64, denominator: i64) -> Self {
        Self((((numerator as i128) << FRAC_BITS) / denominator as i128) as i64)
    }

    /// Creates a fixed-point number from its raw internal value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw internal value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Converts a float, truncating toward zero at 2^-32 resolution.
    ///
    /// Only used for values read from configuration; the conversion is a
    /// single IEEE multiply and therefore exact across platforms.
    #[inline]
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Self((value * ONE_RAW as f64) as i64)
    }

    /// Converts to `f64`.
    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let v = self.0 as f64 / ONE_RAW as f64;
        v
    }

    /// Returns the integer part (rounded toward negative infinity).
    #[inline]
    #[must_use]
    pub const fn floor_int(self) -> i64 {
        self.0 >> FRAC_BITS
    }
}

impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl Mul for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        #[allow(clippy::cast_possible_truncation)]
        let product = ((i128::from(self.0) * i128::from(rhs.0)) >> FRAC_BITS) as i64;
        Self(product)
    }
}

impl MulAssign for Fixed {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<i64> for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0.wrapping_mul(rhs))
    }
}

impl MulAssign<i64> for Fixed {
    #[inline]
    fn mul_assign(&mut self, rhs: i64) {
        self.0 = self.0.wrapping_mul(rhs);
    }
}

impl Div for Fixed {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on division by zero.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        #[allow(clippy::cast_possible_truncation)]
        let quotient = ((i128::from(self.0) << FRAC_BITS) / i128::from(rhs.0)) as i64;
        Self(quotient)
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({:.6})", self.to_f64())
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}
