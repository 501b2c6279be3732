//! Chart configuration.

use hz_core::{HorizonError, Result};
use hz_transforms::{BandConfig, ExtentMode};
use serde::{Deserialize, Serialize};

use crate::palette::ColorPalette;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigSize {
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
}

impl Default for FigSize {
    fn default() -> Self {
        Self {
            width: 15.0,
            height: 20.0,
        }
    }
}

impl FigSize {
    /// Create a figure size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions at `dpi` dots per inch, at least one pixel each way.
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let px = |inches: f64| ((inches * f64::from(dpi)).round().max(1.0)) as u32;
        (px(self.width), px(self.height))
    }
}

/// Configuration for [`Horizon`](crate::Horizon).
///
/// `colors` must hold exactly `2 * bands` entries; this is checked by
/// [`HorizonConfig::validate`] before any data is looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonConfig {
    /// Figure size, used only when rendering.
    pub figsize: FigSize,
    /// Rendering resolution.
    pub dpi: u32,
    /// Number of positive (and of negative) layers.
    pub bands: usize,
    /// One color per layer, positive layers first.
    pub colors: ColorPalette,
    /// How the shared extent is derived from the global scale.
    pub extent: ExtentMode,
    /// Distance between x ticks, in samples. `None` picks about eight ticks.
    pub x_tick_step: Option<usize>,
    /// Per-position x tick labels; positions without one show the x value.
    pub x_tick_labels: Vec<String>,
    /// Number of y ticks on the first subplot.
    pub y_tick_count: usize,
    /// Figure-wide x axis title.
    pub x_label: Option<String>,
    /// Figure-wide y axis title.
    pub y_label: Option<String>,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            figsize: FigSize::default(),
            dpi: 100,
            bands: 3,
            colors: ColorPalette::default(),
            extent: ExtentMode::default(),
            x_tick_step: None,
            x_tick_labels: Vec::new(),
            y_tick_count: 5,
            x_label: Some("Time".to_string()),
            y_label: Some("Error to observation ratio".to_string()),
        }
    }
}

impl HorizonConfig {
    /// Configuration with `bands` layers per sign and a matching graded palette.
    pub fn new(bands: usize) -> Self {
        Self {
            bands,
            colors: ColorPalette::graded(bands),
            ..Self::default()
        }
    }

    /// Set the band count, keeping the current palette.
    pub fn with_bands(mut self, bands: usize) -> Self {
        self.bands = bands;
        self
    }

    /// Set the palette.
    pub fn with_colors(mut self, colors: ColorPalette) -> Self {
        self.colors = colors;
        self
    }

    /// Set the figure size.
    pub fn with_figsize(mut self, figsize: FigSize) -> Self {
        self.figsize = figsize;
        self
    }

    /// Set the extent policy.
    pub fn with_extent(mut self, extent: ExtentMode) -> Self {
        self.extent = extent;
        self
    }

    /// Set x tick spacing and per-position labels.
    pub fn with_x_ticks(mut self, step: usize, labels: Vec<String>) -> Self {
        self.x_tick_step = Some(step);
        self.x_tick_labels = labels;
        self
    }

    /// Set the figure-wide axis titles.
    pub fn with_axis_labels(mut self, x: Option<String>, y: Option<String>) -> Self {
        self.x_label = x;
        self.y_label = y;
        self
    }

    /// Band settings for the transformer.
    pub fn band_config(&self) -> BandConfig {
        BandConfig::new(self.bands).with_extent(self.extent)
    }

    /// Check that the palette has exactly two colors per band.
    ///
    /// # Errors
    ///
    /// Returns [`HorizonError::InvalidConfiguration`] if `colors.len() != 2 * bands`
    /// or `bands == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.bands == 0 || self.colors.len() != self.bands * 2 {
            return Err(HorizonError::invalid_configuration(
                self.bands,
                self.colors.len(),
            ));
        }
        Ok(())
    }

    /// Check cosmetic settings that only matter once data is known to be well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`HorizonError::InvalidParameter`] for a zero tick step or DPI.
    pub fn validate_cosmetics(&self) -> Result<()> {
        if self.x_tick_step == Some(0) {
            return Err(HorizonError::InvalidParameter {
                name: "x_tick_step",
                value: "0".to_string(),
                expected: "positive integer",
            });
        }
        if self.dpi == 0 {
            return Err(HorizonError::InvalidParameter {
                name: "dpi",
                value: "0".to_string(),
                expected: "positive integer",
            });
        }
        Ok(())
    }
}
