//! Numeric type abstractions for band computations.
//!
//! This module defines the [`HzFloat`] trait which abstracts over `f32` and `f64`
//! so series, scales and band layers can be computed generically.

use core::cmp::Ordering;
use num_traits::{Float, FromPrimitive, ToPrimitive};
use serde::{de::DeserializeOwned, Serialize};

/// Trait for floating-point sample types.
///
/// # Example
///
/// ```rust
/// use hz_core::HzFloat;
///
/// fn fold<T: HzFloat>(value: T, width: T) -> T {
///     value.clamp_value(T::ZERO, width)
/// }
///
/// assert_eq!(fold(12.0f64, 10.0), 10.0);
/// ```
pub trait HzFloat:
    Float
    + FromPrimitive
    + ToPrimitive
    + Copy
    + Send
    + Sync
    + Default
    + Serialize
    + DeserializeOwned
    + core::fmt::Debug
    + core::fmt::Display
    + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;

    /// Convert from `f64`.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is a usable sample (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Total comparison that handles NaN consistently.
    ///
    /// NaN values are ordered after all other values (including +infinity).
    #[must_use]
    fn total_cmp_fn(&self, other: &Self) -> Ordering;

    /// Clamp value to the range [min, max].
    ///
    /// If the value is NaN, returns NaN.
    #[must_use]
    fn clamp_value(self, min: Self, max: Self) -> Self {
        if self.is_nan() {
            return self;
        }
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

impl HzFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn total_cmp_fn(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl HzFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn total_cmp_fn(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
