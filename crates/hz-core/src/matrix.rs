//! Column-major matrix of equally long series.
//!
//! A [`SeriesMatrix`] holds the y values of every series that shares one x sequence.
//! Rows are x positions, columns are series. Column order is significant and is never
//! changed by any operation here.

use serde::{Deserialize, Serialize};

use crate::error::{Dimension, HorizonError, Result};
use crate::num::HzFloat;
use crate::series::Series;

/// Rows-by-columns matrix stored as one [`Series`] per column.
///
/// # Example
///
/// ```rust
/// use hz_core::SeriesMatrix;
///
/// let m: SeriesMatrix<f64> = SeriesMatrix::from_rows(vec![
///     vec![1.0, -1.0],
///     vec![2.0, -2.0],
///     vec![3.0, -3.0],
/// ])
/// .unwrap();
///
/// assert_eq!(m.row_count(), 3);
/// assert_eq!(m.column_count(), 2);
/// assert_eq!(m.column(1).unwrap().as_slice(), &[-1.0, -2.0, -3.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct SeriesMatrix<T: HzFloat> {
    columns: Vec<Series<T>>,
    rows: usize,
}

impl<T: HzFloat> Default for SeriesMatrix<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: 0,
        }
    }
}

impl<T: HzFloat> SeriesMatrix<T> {
    /// A matrix spanning `rows` x positions with no columns yet.
    #[must_use]
    pub fn empty(rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            rows,
        }
    }

    /// Build a matrix from columns.
    ///
    /// # Errors
    ///
    /// Returns [`HorizonError::ShapeMismatch`] if columns have different lengths.
    pub fn from_columns(columns: Vec<Series<T>>) -> Result<Self> {
        let rows = columns.first().map_or(0, Series::len);
        if let Some(ragged) = columns.iter().find(|c| c.len() != rows) {
            return Err(HorizonError::shape(
                Dimension::Rows,
                "column length",
                rows,
                ragged.len(),
            ));
        }

        Ok(Self { columns, rows })
    }

    /// Build a matrix from row-major data, one inner vector per x position.
    ///
    /// # Errors
    ///
    /// Returns [`HorizonError::ShapeMismatch`] if rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut columns: Vec<Vec<T>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();

        for row in &rows {
            if row.len() != width {
                return Err(HorizonError::shape(
                    Dimension::Columns,
                    "row width",
                    width,
                    row.len(),
                ));
            }
            for (column, &value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        Ok(Self {
            columns: columns.into_iter().map(Series::from_vec).collect(),
            rows: rows.len(),
        })
    }

    /// Number of rows (x positions).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns (series).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the matrix has no samples at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns.is_empty()
    }

    /// Column at `index`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Series<T>> {
        self.columns.get(index)
    }

    /// All columns in order.
    #[must_use]
    pub fn columns(&self) -> &[Series<T>] {
        &self.columns
    }

    /// Sample at (`row`, `column`).
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        self.columns.get(column)?.get(row).copied()
    }

    /// Smallest finite sample across every column.
    #[must_use]
    pub fn valid_min(&self) -> Option<T> {
        self.columns
            .iter()
            .filter_map(Series::valid_min)
            .fold(None, |acc, x| match acc {
                Some(m) if m <= x => Some(m),
                _ => Some(x),
            })
    }

    /// Largest finite sample across every column.
    #[must_use]
    pub fn valid_max(&self) -> Option<T> {
        self.columns
            .iter()
            .filter_map(Series::valid_max)
            .fold(None, |acc, x| match acc {
                Some(m) if m >= x => Some(m),
                _ => Some(x),
            })
    }

    /// Combine two matrices of identical shape element by element.
    ///
    /// # Errors
    ///
    /// Returns [`HorizonError::ShapeMismatch`] when row or column counts differ.
    pub fn zip_map<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.column_count() != other.column_count() {
            return Err(HorizonError::shape(
                Dimension::Columns,
                "matrix columns",
                self.column_count(),
                other.column_count(),
            ));
        }
        if self.row_count() != other.row_count() {
            return Err(HorizonError::shape(
                Dimension::Rows,
                "matrix rows",
                self.row_count(),
                other.row_count(),
            ));
        }

        let columns = self
            .columns
            .iter()
            .zip(&other.columns)
            .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
            .collect();

        Ok(Self {
            columns,
            rows: self.rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns() {
        let m: SeriesMatrix<f64> = SeriesMatrix::from_columns(vec![
            Series::from_vec(vec![1.0, 2.0]),
            Series::from_vec(vec![3.0, 4.0]),
        ])
        .unwrap();

        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 2);
        assert_eq!(m.get(1, 0), Some(2.0));
        assert_eq!(m.get(5, 0), None);
    }

    #[test]
    fn test_from_columns_ragged() {
        let err = SeriesMatrix::<f64>::from_columns(vec![
            Series::from_vec(vec![1.0, 2.0]),
            Series::from_vec(vec![3.0]),
        ])
        .unwrap_err();

        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = SeriesMatrix::<f64>::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            HorizonError::shape(Dimension::Columns, "row width", 2, 1)
        );
    }

    #[test]
    fn test_empty() {
        let m: SeriesMatrix<f64> = SeriesMatrix::from_rows(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.valid_min(), None);
        assert_eq!(m.valid_max(), None);
    }

    #[test]
    fn test_empty_keeps_row_count() {
        let m: SeriesMatrix<f64> = SeriesMatrix::empty(4);
        assert_eq!(m.row_count(), 4);
        assert_eq!(m.column_count(), 0);
        assert!(m.is_empty());
        assert_eq!(m.valid_max(), None);
    }

    #[test]
    fn test_global_min_max() {
        let m: SeriesMatrix<f64> = SeriesMatrix::from_rows(vec![
            vec![1.0, -4.0],
            vec![f64::NAN, 8.0],
            vec![0.5, 2.0],
        ])
        .unwrap();

        assert_eq!(m.valid_min(), Some(-4.0));
        assert_eq!(m.valid_max(), Some(8.0));
    }

    #[test]
    fn test_zip_map() {
        let a: SeriesMatrix<f64> = SeriesMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b: SeriesMatrix<f64> = SeriesMatrix::from_rows(vec![vec![10.0, 20.0]]).unwrap();

        let sum = a.zip_map(&b, |x, y| x + y).unwrap();
        assert_eq!(sum.column(0).unwrap().as_slice(), &[11.0]);
        assert_eq!(sum.column(1).unwrap().as_slice(), &[22.0]);
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let a: SeriesMatrix<f64> = SeriesMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b: SeriesMatrix<f64> =
            SeriesMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        let err = a.zip_map(&b, |x, y| x + y).unwrap_err();
        assert_eq!(err, HorizonError::shape(Dimension::Rows, "matrix rows", 1, 2));
    }
}
