//! Ordered sample container.
//!
//! The [`Series`] type holds one signal: an ordered run of samples aligned with a
//! shared x sequence held elsewhere.

use core::ops::Index;

use serde::{Deserialize, Deserializer, Serialize};

use crate::num::HzFloat;

/// A contiguous sequence of floating-point samples.
///
/// # Example
///
/// ```rust
/// use hz_core::Series;
///
/// let series: Series<f64> = Series::from_vec(vec![0.0, 5.0, 12.0, -3.0]);
///
/// assert_eq!(series.len(), 4);
/// assert_eq!(series[2], 12.0);
/// assert_eq!(series.valid_max(), Some(12.0));
/// ```
///
/// Serialized as a plain array. JSON has no NaN, so undefined samples are written as
/// `null` and read back as NaN.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent, bound = "T: HzFloat")]
pub struct Series<T: HzFloat> {
    data: Vec<T>,
}

impl<T: HzFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HzFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::ZERO; len],
        }
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sample at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns an iterator over the samples.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the underlying samples as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Smallest finite sample, or `None` when there is none.
    #[must_use]
    pub fn valid_min(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .filter(|x| x.is_valid())
            .fold(None, |acc, x| match acc {
                Some(m) if m <= x => Some(m),
                _ => Some(x),
            })
    }

    /// Largest finite sample, or `None` when there is none.
    #[must_use]
    pub fn valid_max(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .filter(|x| x.is_valid())
            .fold(None, |acc, x| match acc {
                Some(m) if m >= x => Some(m),
                _ => Some(x),
            })
    }

    /// Count the samples that are NaN or infinite.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.data.iter().filter(|x| !x.is_valid()).count()
    }
}

impl<'de, T: HzFloat> Deserialize<'de> for Series<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let samples = Vec::<Option<T>>::deserialize(deserializer)?;
        Ok(samples.into_iter().map(|v| v.unwrap_or(T::NAN)).collect())
    }
}

impl<T: HzFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: HzFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: HzFloat> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: HzFloat> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: HzFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: HzFloat> From<&[T]> for Series<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}
