//! Band decomposition transform.
//!
//! Folds one signal into `2 * bands` clipped layers against a scale shared by every
//! series of a matrix.

use hz_core::{num::HzFloat, HorizonError, Result, Series, SeriesMatrix};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the extent of the global scale is derived from its minimum and maximum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtentMode {
    /// Larger of `|min|` and `|max|`. Positive and negative layers share one width.
    #[default]
    AbsMax,
    /// Positive maximum only; negative magnitudes beyond it saturate.
    Max,
    /// Full span `max - min`.
    Span,
}

impl core::str::FromStr for ExtentMode {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "abs_max" | "absmax" => Ok(Self::AbsMax),
            "max" => Ok(Self::Max),
            "span" => Ok(Self::Span),
            other => Err(HorizonError::InvalidParameter {
                name: "extent",
                value: other.to_string(),
                expected: "one of abs_max, max, span",
            }),
        }
    }
}

/// Configuration for [`BandTransformer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandConfig {
    /// Number of positive (and of negative) layers.
    pub bands: usize,
    /// Extent policy for the band width.
    pub extent: ExtentMode,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            bands: 3,
            extent: ExtentMode::AbsMax,
        }
    }
}

impl BandConfig {
    /// Create a configuration with the given band count.
    pub fn new(bands: usize) -> Self {
        Self {
            bands,
            ..Self::default()
        }
    }

    /// Set the extent policy.
    pub fn with_extent(mut self, extent: ExtentMode) -> Self {
        self.extent = extent;
        self
    }

    /// Number of layers a transform produces (and colors a palette must hold).
    pub fn layer_count(&self) -> usize {
        self.bands * 2
    }

    /// Check the band count.
    ///
    /// # Errors
    ///
    /// Returns [`HorizonError::InvalidConfiguration`] when `bands == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.bands == 0 {
            return Err(HorizonError::invalid_configuration(0, 0));
        }
        Ok(())
    }
}

/// Global minimum and maximum observed across every column of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct ScaleRange<T: HzFloat> {
    /// Smallest finite sample.
    pub min: T,
    /// Largest finite sample.
    pub max: T,
}

impl<T: HzFloat> ScaleRange<T> {
    /// Scan every column once. A matrix without finite samples yields `{0, 0}`.
    pub fn from_matrix(y: &SeriesMatrix<T>) -> Self {
        Self {
            min: y.valid_min().unwrap_or(T::ZERO),
            max: y.valid_max().unwrap_or(T::ZERO),
        }
    }

    /// Magnitude that `bands` full layers cover.
    pub fn extent(&self, mode: ExtentMode) -> T {
        match mode {
            ExtentMode::AbsMax => self.min.abs().max(self.max.abs()),
            ExtentMode::Max => self.max.max(T::ZERO),
            ExtentMode::Span => self.max - self.min,
        }
    }
}

/// Numeric range one layer represents, used for legends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct BandRange<T: HzFloat> {
    /// Position of the layer in the band set (and in the palette).
    pub layer: usize,
    /// Inclusive lower bound.
    pub lower: T,
    /// Exclusive upper bound.
    pub upper: T,
}

/// The `2 * bands` layers of one signal.
///
/// Layers are ordered `[positive 0..bands, negative 0..bands]`; every layer shares
/// the x sequence the signal was transformed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: HzFloat")]
pub struct BandSet<T: HzFloat> {
    bands: usize,
    x: Series<T>,
    layers: Vec<Series<T>>,
}

impl<T: HzFloat> BandSet<T> {
    /// Number of positive layers.
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Shared x sequence.
    pub fn x(&self) -> &Series<T> {
        &self.x
    }

    /// Every layer in palette order.
    pub fn layers(&self) -> &[Series<T>] {
        &self.layers
    }

    /// Layers for values above zero.
    pub fn positive(&self) -> &[Series<T>] {
        &self.layers[..self.bands]
    }

    /// Layers for values below zero.
    pub fn negative(&self) -> &[Series<T>] {
        &self.layers[self.bands..]
    }

    /// Signed magnitude rendered at position `t`: positive layers minus negative layers.
    pub fn reconstruct(&self, t: usize) -> T {
        let sum = |layers: &[Series<T>]| {
            layers
                .iter()
                .filter_map(|layer| layer.get(t).copied())
                .fold(T::ZERO, |acc, v| acc + v)
        };
        sum(self.positive()) - sum(self.negative())
    }

    /// Split into one x sequence per layer and the layers themselves.
    pub fn into_parts(self) -> (Vec<Series<T>>, Vec<Series<T>>) {
        let xs = vec![self.x; self.layers.len()];
        (xs, self.layers)
    }
}

/// Band decomposition against one global scale.
///
/// The scale is computed once from the full matrix so that every series folds
/// against the same band width.
///
/// # Folding
///
/// For layer `k` and a positive value `v`, the positive layer holds
/// `clip(v - k·w, 0, w)`; negative values fold the same way on `-v` into the
/// negative layers. Magnitudes beyond `bands·w` saturate the top layer.
///
/// # Edge Cases
///
/// - NaN samples contribute zero to every layer
/// - Infinite samples saturate every layer of their sign; they never widen the scale
/// - An all-zero matrix gives `w = 0` and all-zero layers
///
/// # Example
///
/// ```rust
/// use hz_core::SeriesMatrix;
/// use hz_transforms::BandTransformer;
///
/// let y = SeriesMatrix::from_rows(vec![vec![0.0], vec![5.0], vec![20.0], vec![-3.0]]).unwrap();
/// let bt = BandTransformer::new(&y, 2);
/// assert_eq!(bt.band_width(), 10.0);
///
/// let set = bt.transform(&[0.0, 5.0, 12.0, -3.0], &[0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(set.positive()[1].as_slice(), &[0.0, 0.0, 2.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct BandTransformer<T: HzFloat> {
    config: BandConfig,
    scale: ScaleRange<T>,
    band_width: T,
}

impl<T: HzFloat> BandTransformer<T> {
    /// Build a transformer with `bands` layers per sign and the default extent policy.
    pub fn new(y: &SeriesMatrix<T>, bands: usize) -> Self {
        Self::with_config(y, BandConfig::new(bands))
    }

    /// Build a transformer from a full configuration.
    pub fn with_config(y: &SeriesMatrix<T>, config: BandConfig) -> Self {
        let scale = ScaleRange::from_matrix(y);
        let extent = scale.extent(config.extent);

        let band_width = if config.bands == 0 || !extent.is_valid() || extent <= T::ZERO {
            T::ZERO
        } else {
            extent / <T as HzFloat>::from_usize(config.bands)
        };

        debug!(
            bands = config.bands,
            min = %scale.min,
            max = %scale.max,
            band_width = %band_width,
            "computed global scale"
        );
        if band_width == T::ZERO && !y.is_empty() {
            warn!("matrix has zero extent, every band will be empty");
        }

        Self {
            config,
            scale,
            band_width,
        }
    }

    /// Number of positive layers.
    pub fn bands(&self) -> usize {
        self.config.bands
    }

    /// Configuration in use.
    pub fn config(&self) -> &BandConfig {
        &self.config
    }

    /// Global scale.
    pub fn scale(&self) -> ScaleRange<T> {
        self.scale
    }

    /// Observed global minimum.
    pub fn min(&self) -> T {
        self.scale.min
    }

    /// Observed global maximum.
    pub fn max(&self) -> T {
        self.scale.max
    }

    /// Magnitude covered by one layer.
    pub fn band_width(&self) -> T {
        self.band_width
    }

    /// Height of layer `k` for a non-negative magnitude.
    ///
    /// NaN and non-positive magnitudes give zero; `+inf` gives a full layer.
    #[inline]
    pub fn fold(&self, magnitude: T, k: usize) -> T {
        if magnitude.is_nan() || magnitude <= T::ZERO {
            return T::ZERO;
        }
        let offset = self.band_width * <T as HzFloat>::from_usize(k);
        (magnitude - offset).clamp_value(T::ZERO, self.band_width)
    }

    /// Decompose one signal into its `2 * bands` layers.
    ///
    /// `x` is carried unchanged; its length is expected to match the signal.
    pub fn transform(&self, signal: &[T], x: &[T]) -> BandSet<T> {
        let bands = self.config.bands;
        let mut layers: Vec<Series<T>> = Vec::with_capacity(bands * 2);

        for k in 0..bands {
            layers.push(signal.iter().map(|&v| self.fold(v, k)).collect());
        }
        for k in 0..bands {
            layers.push(signal.iter().map(|&v| self.fold(-v, k)).collect());
        }

        BandSet {
            bands,
            x: Series::from(x),
            layers,
        }
    }

    /// Numeric range of every layer, in layer order.
    ///
    /// Positive layer `k` covers `[k·w, (k+1)·w)`; negative layer `k` covers
    /// `[-(k+1)·w, -k·w)`.
    pub fn band_ranges(&self) -> Vec<BandRange<T>> {
        let w = self.band_width;
        let bands = self.config.bands;
        let step = |k: usize| w * <T as HzFloat>::from_usize(k);

        let positive = (0..bands).map(|k| BandRange {
            layer: k,
            lower: step(k),
            upper: step(k + 1),
        });
        let negative = (0..bands).map(|k| BandRange {
            layer: bands + k,
            lower: T::ZERO - step(k + 1),
            upper: T::ZERO - step(k),
        });

        positive.chain(negative).collect()
    }
}
