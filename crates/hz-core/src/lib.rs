//! # hz-core
//!
//! Core types for the horizon chart crates.
//!
//! This crate provides the foundational abstractions shared by the transform,
//! source and chart crates:
//!
//! - [`HzFloat`] - Trait for numeric sample types (f32/f64)
//! - [`Series`] - One ordered signal
//! - [`SeriesMatrix`] - Many signals sharing one x sequence, column order preserved
//! - [`DataFrame`] - Index plus named columns with deterministic ordering
//! - [`HorizonError`] - Validation errors
//!
//! ## Example
//!
//! ```rust
//! use hz_core::prelude::*;
//!
//! let y: SeriesMatrix<f64> = SeriesMatrix::from_rows(vec![
//!     vec![0.0, 1.0],
//!     vec![5.0, -2.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(y.valid_max(), Some(5.0));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dataframe;
pub mod error;
pub mod matrix;
pub mod num;
pub mod prelude;
pub mod series;

// Re-export core types at crate root
pub use dataframe::DataFrame;
pub use error::{Dimension, HorizonError, Result};
pub use matrix::SeriesMatrix;
pub use num::HzFloat;
pub use series::Series;
