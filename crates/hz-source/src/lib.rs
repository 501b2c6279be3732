//! # hz-source
//!
//! Signal sources for horizon charts.
//!
//! - [`CsvSource`]: reads tables with one index column and labelled value columns
//! - [`relative_difference`]: zero-guarded `(a - b) / b` between two matrices
//!
//! Two tables loaded independently are combined positionally. Their x positions and
//! labels are assumed to match and are not checked.
//!
//! # Example
//!
//! ```no_run
//! use hz_source::CsvSource;
//!
//! let source = CsvSource::new().with_base_dir("./data");
//! let data = source
//!     .load_difference::<f64>("simulatedflowdata.csv", "observedflowdata.csv")
//!     .unwrap();
//! println!("{} series over {} positions", data.labels.len(), data.x.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
mod loader;
mod ratio;

pub use error::{SourceError, SourceResult};
pub use loader::{CsvSource, LoadedTable, SignalData, DEFAULT_DATA_DIR};
pub use ratio::relative_difference;
