//! CSV table loading.
//!
//! Tables carry one index column followed by one or more labelled value columns.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use hz_core::{num::HzFloat, DataFrame, Series, SeriesMatrix};
use tracing::{debug, info};

use crate::error::{SourceError, SourceResult};
use crate::ratio::relative_difference;

/// Directory tables are read from when no other is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// A table as read from disk.
///
/// `frame` holds the numeric index and value columns. `index_labels` keeps the raw
/// index cells, which may be dates or other text suitable for tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable<T: HzFloat> {
    /// Numeric index and value columns in file order.
    pub frame: DataFrame<T>,
    /// Raw index cells in row order.
    pub index_labels: Vec<String>,
}

/// Everything the chart orchestrator needs from a data source.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalData<T: HzFloat> {
    /// Shared x positions.
    pub x: Series<T>,
    /// One column per series.
    pub y: SeriesMatrix<T>,
    /// One label per column.
    pub labels: Vec<String>,
    /// Raw index cells, one per x position.
    pub index_labels: Vec<String>,
}

impl<T: HzFloat> LoadedTable<T> {
    /// Split the table into chart inputs, keeping column order.
    ///
    /// # Errors
    ///
    /// Propagates shape errors from the frame.
    pub fn into_signal_data(self) -> SourceResult<SignalData<T>> {
        let (x, y, labels) = self.frame.to_matrix()?;
        Ok(SignalData {
            x,
            y,
            labels,
            index_labels: self.index_labels,
        })
    }
}

/// Reads CSV tables from a base directory.
///
/// The index column becomes x when every index cell is numeric; otherwise x is the
/// row position and the raw cells are kept as labels. Empty value cells read as NaN.
///
/// # Example
///
/// ```rust
/// use hz_source::CsvSource;
///
/// let csv = "date,north,south\n1975-01,1.0,2.0\n1975-02,,4.5\n";
/// let table = CsvSource::read_from::<f64, _>(csv.as_bytes()).unwrap();
///
/// assert_eq!(table.frame.column_names(), vec!["north", "south"]);
/// assert_eq!(table.frame.index().as_slice(), &[0.0, 1.0]);
/// assert!(table.frame.get_column("north").unwrap()[1].is_nan());
/// ```
#[derive(Debug, Clone)]
pub struct CsvSource {
    base_dir: PathBuf,
}

impl Default for CsvSource {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl CsvSource {
    /// Create a source reading from [`DEFAULT_DATA_DIR`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Read tables relative to `dir` instead.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Directory file names are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Read one table by file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn read<T: HzFloat>(&self, file: impl AsRef<Path>) -> SourceResult<LoadedTable<T>> {
        let path = self.base_dir.join(file);
        let handle = File::open(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;

        let table = Self::read_from(handle)?;
        info!(
            path = %path.display(),
            rows = table.frame.len(),
            columns = table.frame.column_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse a table from any reader.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed CSV, repeated value headers, non-numeric value
    /// cells or a table without value columns.
    pub fn read_from<T: HzFloat, R: Read>(reader: R) -> SourceResult<LoadedTable<T>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.len() < 2 {
            return Err(SourceError::NoValueColumns);
        }
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        if let Some((_, name)) = names
            .iter()
            .enumerate()
            .find(|(i, name)| names[..*i].contains(name))
        {
            return Err(SourceError::DuplicateColumn { name: name.clone() });
        }

        let mut index_labels = Vec::new();
        let mut columns: Vec<Vec<T>> = vec![Vec::new(); names.len()];

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            index_labels.push(record.get(0).unwrap_or_default().to_string());

            for (col, cell) in record.iter().skip(1).enumerate() {
                columns[col].push(parse_cell(cell, row, &names[col])?);
            }
        }

        let numeric_index: Option<Vec<T>> = index_labels
            .iter()
            .map(|label| label.parse::<f64>().ok().map(T::from_f64_lossy))
            .collect();
        let index = match numeric_index {
            Some(values) => Series::from_vec(values),
            None => {
                debug!("index is not numeric, using row positions");
                (0..index_labels.len())
                    .map(<T as HzFloat>::from_usize)
                    .collect()
            }
        };

        let mut frame = DataFrame::new(index);
        for (name, values) in names.into_iter().zip(columns) {
            frame.add_column(name, Series::from_vec(values))?;
        }

        Ok(LoadedTable {
            frame,
            index_labels,
        })
    }

    /// Load two tables and return the relative difference of the first against the second.
    ///
    /// x positions, index labels and column labels are taken from the first table.
    ///
    /// # Preconditions
    ///
    /// The two files are aligned by position only. Their index values and column labels
    /// are assumed identical and are not compared.
    ///
    /// # Errors
    ///
    /// Returns an error if either file fails to load or the tables differ in shape.
    pub fn load_difference<T: HzFloat>(
        &self,
        file: impl AsRef<Path>,
        reference: impl AsRef<Path>,
    ) -> SourceResult<SignalData<T>> {
        let first = self.read::<T>(file)?.into_signal_data()?;
        let second = self.read::<T>(reference)?.into_signal_data()?;

        let y = relative_difference(&first.y, &second.y)?;
        Ok(SignalData { y, ..first })
    }
}

fn parse_cell<T: HzFloat>(cell: &str, row: usize, column: &str) -> SourceResult<T> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Ok(T::NAN);
    }
    cell.parse::<f64>()
        .map(T::from_f64_lossy)
        .map_err(|_| SourceError::Parse {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
}
