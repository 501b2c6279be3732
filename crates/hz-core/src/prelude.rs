//! Prelude module for convenient imports.
//!
//! ```rust
//! use hz_core::prelude::*;
//!
//! let series: Series<f64> = Series::zeros(4);
//! assert_eq!(series.len(), 4);
//! ```

pub use crate::dataframe::DataFrame;
pub use crate::error::{Dimension, HorizonError, Result};
pub use crate::matrix::SeriesMatrix;
pub use crate::num::HzFloat;
pub use crate::series::Series;
