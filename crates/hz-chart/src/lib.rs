//! # hz-chart
//!
//! Horizon chart orchestration and rendering.
//!
//! - [`Horizon`]: validates inputs and builds a [`Figure`], one subplot per series
//! - [`HorizonConfig`]: bands, palette, figure size and axis cosmetics
//! - [`ColorPalette`]: colors bound to band layers by position
//! - [`FigureRenderer`]: seam for turning a figure into output
//!
//! Enable the `svg` feature for `render::SvgRenderer`, which draws the figure with plotters.
//!
//! # Example
//!
//! ```
//! use hz_chart::prelude::*;
//! use hz_core::SeriesMatrix;
//!
//! let y = SeriesMatrix::from_rows(vec![vec![0.2, -0.4], vec![0.9, 0.1]]).unwrap();
//! let figure = Horizon::new(HorizonConfig::default())
//!     .run(&[0.0, 1.0], &y, &["Columbia", "Snake"])
//!     .unwrap();
//!
//! let json = JsonRenderer::new().render(&figure).unwrap();
//! assert!(json.contains("Columbia"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod config;
mod figure;
mod horizon;
mod palette;

pub mod prelude;
pub mod render;

pub use config::{FigSize, HorizonConfig};
pub use figure::{Figure, Layer, LegendEntry, Subplot, Tick};
pub use horizon::Horizon;
pub use palette::{Color, ColorPalette};
pub use render::{FigureRenderer, JsonRenderer, RenderError};
