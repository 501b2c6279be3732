//! Horizon chart orchestration.
//!
//! [`Horizon::run`] validates its inputs, computes one global scale over the whole
//! matrix and returns a [`Figure`] with one stacked subplot per series.

use hz_core::{num::HzFloat, DataFrame, Dimension, HorizonError, Result, Series, SeriesMatrix};
use hz_transforms::BandTransformer;
use tracing::{debug, info};

use crate::config::HorizonConfig;
use crate::figure::{format_value, Figure, Layer, LegendEntry, Subplot, Tick};

/// Tick count aimed for when no x tick step is configured.
const AUTO_X_TICKS: usize = 8;

/// Validates inputs and builds horizon chart figures.
///
/// # Validation
///
/// Checks run in this order, and the first failure is returned before any band is
/// computed:
///
/// 1. the palette holds exactly `2 * bands` colors ([`HorizonError::InvalidConfiguration`])
/// 2. there is one label per column ([`HorizonError::ShapeMismatch`])
/// 3. there is one x position per row ([`HorizonError::ShapeMismatch`])
///
/// # Example
///
/// ```rust
/// use hz_chart::{Horizon, HorizonConfig};
/// use hz_core::SeriesMatrix;
///
/// let y = SeriesMatrix::from_rows(vec![
///     vec![0.0, 1.0],
///     vec![5.0, -2.0],
///     vec![12.0, 0.5],
///     vec![-3.0, 20.0],
/// ])
/// .unwrap();
///
/// let figure = Horizon::new(HorizonConfig::new(2))
///     .run(&[0.0, 1.0, 2.0, 3.0], &y, &["north", "south"])
///     .unwrap();
///
/// assert_eq!(figure.band_width, 10.0);
/// assert_eq!(figure.subplots[0].title, "north");
/// assert_eq!(figure.subplots[0].layers.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Horizon {
    config: HorizonConfig,
}

impl Horizon {
    /// Create an orchestrator with the given configuration.
    pub fn new(config: HorizonConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &HorizonConfig {
        &self.config
    }

    /// Run every check [`Horizon::run`] performs, without building anything.
    ///
    /// # Errors
    ///
    /// See the type-level documentation for the order of checks.
    pub fn validate<T: HzFloat>(
        &self,
        x: &[T],
        y: &SeriesMatrix<T>,
        label_count: usize,
    ) -> Result<()> {
        self.config.validate()?;

        if label_count != y.column_count() {
            return Err(HorizonError::shape(
                Dimension::Columns,
                "labels",
                y.column_count(),
                label_count,
            ));
        }
        if x.len() != y.row_count() {
            return Err(HorizonError::shape(
                Dimension::Rows,
                "x positions",
                y.row_count(),
                x.len(),
            ));
        }

        self.config.validate_cosmetics()
    }

    /// Build the figure for `y` over `x`, one subplot per column titled by `labels`.
    ///
    /// Subplots keep column order. Every subplot shares the y range `[0, w]` where `w`
    /// is the band width of the global scale.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; no figure is produced in that case.
    pub fn run<T: HzFloat, S: AsRef<str>>(
        &self,
        x: &[T],
        y: &SeriesMatrix<T>,
        labels: &[S],
    ) -> Result<Figure<T>> {
        self.validate(x, y, labels.len())?;

        let transformer = BandTransformer::with_config(y, self.config.band_config());
        let band_width = transformer.band_width();
        let last = y.column_count().saturating_sub(1);

        let mut subplots = Vec::with_capacity(y.column_count());
        for (i, (column, label)) in y.columns().iter().zip(labels).enumerate() {
            let set = transformer.transform(column.as_slice(), x);
            let (xs, ys) = set.into_parts();

            let layers: Vec<Layer<T>> = xs
                .into_iter()
                .zip(ys)
                .zip(self.config.colors.iter())
                .map(|((x, y), &color)| Layer { x, y, color })
                .collect();

            debug!(
                series = label.as_ref(),
                layers = layers.len(),
                undefined = column.invalid_count(),
                "built subplot"
            );

            subplots.push(Subplot {
                title: label.as_ref().to_string(),
                layers,
                x_ticks: if i == last { self.x_ticks(x) } else { Vec::new() },
                y_ticks: if i == 0 { self.y_ticks(band_width) } else { Vec::new() },
            });
        }

        let legend = self.legend(&transformer);

        info!(
            series = subplots.len(),
            samples = x.len(),
            bands = self.config.bands,
            band_width = %band_width,
            "horizon figure built"
        );

        Ok(Figure {
            size: self.config.figsize,
            subplots,
            x_range: x_range(x),
            y_range: (T::ZERO, band_width),
            band_width,
            legend,
            x_label: self.config.x_label.clone(),
            y_label: self.config.y_label.clone(),
        })
    }

    /// Build the figure for every column of a frame, using its index as x.
    ///
    /// # Errors
    ///
    /// Same as [`Horizon::run`].
    pub fn run_frame<T: HzFloat>(&self, frame: &DataFrame<T>) -> Result<Figure<T>> {
        let (x, y, labels) = frame.to_matrix()?;
        self.run(x.as_slice(), &y, &labels)
    }

    fn y_ticks<T: HzFloat>(&self, band_width: T) -> Vec<Tick<T>> {
        let count = self.config.y_tick_count;
        if count == 0 || band_width <= T::ZERO {
            return Vec::new();
        }
        let step = band_width / <T as HzFloat>::from_usize(count);

        (0..count)
            .map(|i| {
                let position = step * <T as HzFloat>::from_usize(i);
                Tick {
                    position,
                    label: format_value(position, step),
                }
            })
            .collect()
    }

    fn x_ticks<T: HzFloat>(&self, x: &[T]) -> Vec<Tick<T>> {
        let step = self
            .config
            .x_tick_step
            .unwrap_or_else(|| x.len().div_ceil(AUTO_X_TICKS))
            .max(1);
        let spacing = match (x.first(), x.get(1)) {
            (Some(&a), Some(&b)) if (b - a).is_valid() => (b - a).abs(),
            _ => T::ONE,
        };

        // gaps in x get no tick
        x.iter()
            .enumerate()
            .step_by(step)
            .filter(|(_, position)| position.is_valid())
            .map(|(idx, &position)| Tick {
                position,
                label: self
                    .config
                    .x_tick_labels
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| format_value(position, spacing)),
            })
            .collect()
    }

    fn legend<T: HzFloat>(&self, transformer: &BandTransformer<T>) -> Vec<LegendEntry<T>> {
        let w = transformer.band_width();
        let mut entries: Vec<LegendEntry<T>> = transformer
            .band_ranges()
            .into_iter()
            .zip(self.config.colors.iter())
            .map(|(range, &color)| LegendEntry {
                color,
                lower: range.lower,
                upper: range.upper,
                label: format!(
                    "{} - {}",
                    format_value(range.lower, w),
                    format_value(range.upper, w)
                ),
            })
            .collect();

        entries.sort_by(|a, b| a.lower.total_cmp_fn(&b.lower));
        entries
    }
}

/// Smallest and largest finite x, or `(0, 0)` when there is none.
fn x_range<T: HzFloat>(x: &[T]) -> (T, T) {
    let series = Series::from(x);
    match (series.valid_min(), series.valid_max()) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => (T::ZERO, T::ZERO),
    }
}
