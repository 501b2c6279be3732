//! # hz-transforms
//!
//! Band decomposition for horizon charts.
//!
//! A horizon chart folds a signal's magnitude into a few stacked, fixed-height layers
//! instead of drawing a tall line. This crate provides:
//!
//! - `BandTransformer`: global scale computation and per-signal folding
//! - `BandSet`: the `2 * bands` layers of one signal
//! - `ScaleRange` / `ExtentMode`: the shared scale and how its extent is taken
//! - `BandRange`: numeric range per layer for legends
//!
//! # Example
//!
//! ```
//! use hz_core::SeriesMatrix;
//! use hz_transforms::prelude::*;
//!
//! let y = SeriesMatrix::from_rows(vec![vec![3.0, -1.0], vec![-6.0, 2.0]]).unwrap();
//! let bt = BandTransformer::new(&y, 3);
//!
//! let set = bt.transform(y.column(0).unwrap().as_slice(), &[0.0, 1.0]);
//! assert_eq!(set.layers().len(), 6);
//! assert_eq!(set.reconstruct(1), -6.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod band;

pub mod prelude;

pub use band::{BandConfig, BandRange, BandSet, BandTransformer, ExtentMode, ScaleRange};
