//! Prelude module for convenient imports.

pub use crate::config::{FigSize, HorizonConfig};
pub use crate::figure::Figure;
pub use crate::horizon::Horizon;
pub use crate::palette::{Color, ColorPalette};
pub use crate::render::{FigureRenderer, JsonRenderer, RenderError};

#[cfg(feature = "svg")]
pub use crate::render::SvgRenderer;
