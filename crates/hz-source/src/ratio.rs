//! Zero-guarded relative difference between two matrices.

use hz_core::{num::HzFloat, Result, SeriesMatrix};

/// Elementwise `(a - b) / b`, yielding zero wherever `b == 0`.
///
/// A zero denominator is treated as "no difference" regardless of the numerator.
/// NaN denominators are not zero and propagate NaN, which the band transform later
/// treats as an empty sample.
///
/// # Preconditions
///
/// Only the dimensions are compared. The two matrices are assumed to share x positions
/// and column labels; neither is verified.
///
/// # Errors
///
/// Returns `ShapeMismatch` when row or column counts differ.
///
/// # Example
///
/// ```rust
/// use hz_core::SeriesMatrix;
/// use hz_source::relative_difference;
///
/// let simulated = SeriesMatrix::from_rows(vec![vec![12.0, 5.0]]).unwrap();
/// let observed = SeriesMatrix::from_rows(vec![vec![10.0, 0.0]]).unwrap();
///
/// let diff = relative_difference(&simulated, &observed).unwrap();
/// assert_eq!(diff.get(0, 0), Some(0.2));
/// assert_eq!(diff.get(0, 1), Some(0.0));
/// ```
pub fn relative_difference<T: HzFloat>(
    a: &SeriesMatrix<T>,
    b: &SeriesMatrix<T>,
) -> Result<SeriesMatrix<T>> {
    a.zip_map(b, |num, den| {
        if den == T::ZERO {
            T::ZERO
        } else {
            (num - den) / den
        }
    })
}
