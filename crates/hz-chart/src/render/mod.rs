//! Rendering collaborators.
//!
//! A renderer turns a finished [`Figure`] into some output. Horizon never draws by
//! itself; the caller picks a renderer and decides where the output goes.

use hz_core::num::HzFloat;
use thiserror::Error;

use crate::figure::Figure;

#[cfg(feature = "svg")]
mod svg;

#[cfg(feature = "svg")]
pub use svg::SvgRenderer;

/// Errors raised while rendering a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Serializing the figure failed.
    #[error("Failed to serialize figure: {0}")]
    Json(#[from] serde_json::Error),

    /// The drawing backend reported an error.
    #[error("Drawing backend error: {0}")]
    Backend(String),
}

/// Turns a [`Figure`] into an output value.
pub trait FigureRenderer<T: HzFloat> {
    /// Rendered output.
    type Output;

    /// Render `figure`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the output cannot be produced.
    fn render(&self, figure: &Figure<T>) -> Result<Self::Output, RenderError>;
}

/// Serializes a figure to JSON.
///
/// The output holds every layer, tick and legend entry, so any plotting front end can
/// draw it without rerunning the transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl<T: HzFloat> FigureRenderer<T> for JsonRenderer {
    type Output = String;

    fn render(&self, figure: &Figure<T>) -> Result<String, RenderError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(figure)?
        } else {
            serde_json::to_string(figure)?
        };
        Ok(json)
    }
}
