//! Prelude for hz-transforms.
//!
//! This module re-exports all commonly used types.

pub use crate::band::{BandConfig, BandRange, BandSet, BandTransformer, ExtentMode, ScaleRange};
