//! Explicit figure handle produced by a horizon run.
//!
//! A [`Figure`] describes everything a renderer needs: one stacked subplot per series
//! in input order, the shared y range, tick placement and a single legend. Nothing is
//! drawn until a [`FigureRenderer`](crate::FigureRenderer) consumes it.

use hz_core::{num::HzFloat, Series};
use serde::{Deserialize, Serialize};

use crate::config::FigSize;
use crate::palette::Color;

/// One filled region: the area between zero and `y` over `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct Layer<T: HzFloat> {
    /// x positions.
    pub x: Series<T>,
    /// Layer heights.
    pub y: Series<T>,
    /// Fill color.
    pub color: Color,
}

impl<T: HzFloat> Layer<T> {
    /// `(x, y)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Returns `true` if the layer has no visible area.
    pub fn is_blank(&self) -> bool {
        self.y.iter().all(|&v| v == T::ZERO)
    }
}

/// Axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct Tick<T: HzFloat> {
    /// Position on the axis.
    pub position: T,
    /// Text shown at the tick.
    pub label: String,
}

/// One series drawn as stacked layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct Subplot<T: HzFloat> {
    /// Series label.
    pub title: String,
    /// Layers in palette order; later layers are drawn on top.
    pub layers: Vec<Layer<T>>,
    /// x ticks (only the last subplot carries any).
    pub x_ticks: Vec<Tick<T>>,
    /// y ticks (only the first subplot carries any).
    pub y_ticks: Vec<Tick<T>>,
}

/// Legend row mapping a color to the numeric range of its layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct LegendEntry<T: HzFloat> {
    /// Layer color.
    pub color: Color,
    /// Inclusive lower bound.
    pub lower: T,
    /// Exclusive upper bound.
    pub upper: T,
    /// Formatted range.
    pub label: String,
}

/// Renderable result of a horizon run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct Figure<T: HzFloat> {
    /// Size in inches.
    pub size: FigSize,
    /// Subplots, one per series, top to bottom.
    pub subplots: Vec<Subplot<T>>,
    /// x range shared by every subplot.
    pub x_range: (T, T),
    /// y range shared by every subplot: zero to one band width.
    pub y_range: (T, T),
    /// Band width the layers were folded with.
    pub band_width: T,
    /// Legend entries ordered by lower bound.
    pub legend: Vec<LegendEntry<T>>,
    /// Figure-wide x axis title.
    pub x_label: Option<String>,
    /// Figure-wide y axis title.
    pub y_label: Option<String>,
}

impl<T: HzFloat> Figure<T> {
    /// Number of subplots.
    pub fn len(&self) -> usize {
        self.subplots.len()
    }

    /// Returns `true` if the figure has no subplots.
    pub fn is_empty(&self) -> bool {
        self.subplots.is_empty()
    }

    /// Subplot for the series titled `label`, if any.
    pub fn subplot(&self, label: &str) -> Option<&Subplot<T>> {
        self.subplots.iter().find(|s| s.title == label)
    }
}

/// Format a numeric bound for tick and legend text.
///
/// Precision follows magnitude so that a band width of 25 reads `25` and one of
/// 0.125 reads `0.125`.
pub(crate) fn format_value<T: HzFloat>(value: T, scale: T) -> String {
    let value = value.to_f64_lossy() + 0.0;
    let scale = scale.to_f64_lossy().abs();
    let precision = if scale >= 10.0 || scale == 0.0 {
        0
    } else if scale >= 1.0 {
        1
    } else {
        3
    };
    format!("{value:.precision$}")
}
