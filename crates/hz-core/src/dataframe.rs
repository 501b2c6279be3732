//! Labelled table with an index column and deterministic column order.
//!
//! The [`DataFrame`] type pairs an x index with named value columns, stored in an
//! `IndexMap` so columns always come back in the order they were added. That order
//! decides subplot position and palette pairing downstream.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Dimension, HorizonError, Result};
use crate::matrix::SeriesMatrix;
use crate::num::HzFloat;
use crate::series::Series;

/// Index sequence plus named columns in insertion order.
///
/// # Example
///
/// ```rust
/// use hz_core::{DataFrame, Series};
///
/// let mut df: DataFrame<f64> = DataFrame::new(Series::from_vec(vec![0.0, 1.0, 2.0]));
/// df.add_column("north".to_string(), Series::from_vec(vec![1.0, 2.0, 3.0])).unwrap();
/// df.add_column("south".to_string(), Series::from_vec(vec![0.5, 0.1, 0.0])).unwrap();
///
/// assert_eq!(df.len(), 3);
/// assert_eq!(df.column_names(), vec!["north", "south"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct DataFrame<T: HzFloat> {
    index: Series<T>,
    columns: IndexMap<String, Series<T>>,
}

impl<T: HzFloat> DataFrame<T> {
    /// Create an empty frame over the given index.
    #[must_use]
    pub fn new(index: Series<T>) -> Self {
        Self {
            index,
            columns: IndexMap::new(),
        }
    }

    /// Number of rows (index length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of value columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The index (x positions).
    #[must_use]
    pub fn index(&self) -> &Series<T> {
        &self.index
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Get a column by name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Series<T>> {
        self.columns.get(name)
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken or the length differs from the index.
    pub fn add_column(&mut self, name: String, series: Series<T>) -> Result<()> {
        if self.columns.contains_key(&name) {
            return Err(HorizonError::InvalidParameter {
                name: "column_name",
                value: name,
                expected: "unique column name",
            });
        }

        if series.len() != self.len() {
            return Err(HorizonError::shape(
                Dimension::Rows,
                "column length",
                self.len(),
                series.len(),
            ));
        }

        self.columns.insert(name, series);
        Ok(())
    }

    /// Iterate over (name, series) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series<T>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Split into x positions, value matrix and labels, keeping column order.
    ///
    /// # Errors
    ///
    /// Cannot fail for a frame built through [`DataFrame::add_column`]; the error is kept
    /// for frames restored through deserialization.
    pub fn to_matrix(&self) -> Result<(Series<T>, SeriesMatrix<T>, Vec<String>)> {
        if self.columns.is_empty() {
            let labels = Vec::new();
            return Ok((self.index.clone(), SeriesMatrix::empty(self.len()), labels));
        }

        let matrix = SeriesMatrix::from_columns(self.columns.values().cloned().collect())?;
        if matrix.row_count() != self.len() {
            return Err(HorizonError::shape(
                Dimension::Rows,
                "index length",
                matrix.row_count(),
                self.len(),
            ));
        }
        let labels = self.columns.keys().cloned().collect();
        Ok((self.index.clone(), matrix, labels))
    }
}
