//! Integration tests for hz-chart.

use hz_chart::prelude::*;
use hz_chart::{LegendEntry, Subplot};
use hz_core::{Dimension, HorizonError, SeriesMatrix};
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn matrix(rows: usize, cols: usize) -> SeriesMatrix<f64> {
    let data = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| ((r * 7 + c * 3) % 11) as f64 - 5.0)
                .collect()
        })
        .collect();
    SeriesMatrix::from_rows(data).unwrap()
}

fn positions(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("series-{i}")).collect()
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_three_bands_four_colors() {
    let config = HorizonConfig::default().with_colors(ColorPalette::graded(2));
    let err = Horizon::new(config)
        .run(&positions(4), &matrix(4, 2), &labels(2))
        .unwrap_err();

    assert_eq!(
        err,
        HorizonError::InvalidConfiguration {
            bands: 3,
            colors: 4,
            expected: 6,
        }
    );
}

#[test]
fn test_label_count_mismatch() {
    let err = Horizon::new(HorizonConfig::default())
        .run(&positions(4), &matrix(4, 3), &labels(2))
        .unwrap_err();

    assert!(matches!(
        err,
        HorizonError::ShapeMismatch {
            dimension: Dimension::Columns,
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_x_length_mismatch() {
    let err = Horizon::new(HorizonConfig::default())
        .run(&positions(5), &matrix(4, 3), &labels(3))
        .unwrap_err();

    assert!(matches!(
        err,
        HorizonError::ShapeMismatch {
            dimension: Dimension::Rows,
            expected: 4,
            actual: 5,
            ..
        }
    ));
}

#[test]
fn test_custom_palette_accepted() {
    let colors = ColorPalette::parse(&["#0000FF", "#FF0000"]).unwrap();
    let config = HorizonConfig::default().with_bands(1).with_colors(colors);

    let figure = Horizon::new(config)
        .run(&positions(3), &matrix(3, 1), &labels(1))
        .unwrap();
    assert_eq!(figure.subplots[0].layers.len(), 2);
    assert_eq!(figure.legend.len(), 2);
}

// ============================================================================
// Figure Layout
// ============================================================================

#[test]
fn test_subplot_order_follows_columns() {
    let names = vec!["Yakima", "Columbia", "Snake"];
    let figure = Horizon::new(HorizonConfig::default())
        .run(&positions(6), &matrix(6, 3), &names)
        .unwrap();

    let titles: Vec<&str> = figure.subplots.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, names);
    assert!(figure.subplot("Snake").is_some());
    assert!(figure.subplot("Missouri").is_none());
}

#[test]
fn test_axis_titles_and_size() {
    let config = HorizonConfig::default()
        .with_figsize(FigSize::new(8.0, 6.0))
        .with_axis_labels(Some("Month".to_string()), None);
    let figure = Horizon::new(config)
        .run(&positions(3), &matrix(3, 1), &labels(1))
        .unwrap();

    assert_eq!(figure.size, FigSize::new(8.0, 6.0));
    assert_eq!(figure.x_label.as_deref(), Some("Month"));
    assert_eq!(figure.y_label, None);
}

#[test]
fn test_default_axis_titles() {
    let figure = Horizon::new(HorizonConfig::default())
        .run(&positions(3), &matrix(3, 1), &labels(1))
        .unwrap();

    assert_eq!(figure.x_label.as_deref(), Some("Time"));
    assert_eq!(figure.y_label.as_deref(), Some("Error to observation ratio"));
}

#[test]
fn test_empty_matrix() {
    let y: SeriesMatrix<f64> = SeriesMatrix::from_columns(Vec::new()).unwrap();
    let no_labels: [&str; 0] = [];
    let figure = Horizon::new(HorizonConfig::default())
        .run(&[], &y, &no_labels)
        .unwrap();

    assert!(figure.is_empty());
    assert_eq!(figure.band_width, 0.0);
}

#[test]
fn test_json_export() {
    let figure = Horizon::new(HorizonConfig::default())
        .run(&positions(4), &matrix(4, 2), &labels(2))
        .unwrap();

    let json = JsonRenderer::pretty().render(&figure).unwrap();
    let restored: Figure<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, figure);
    assert!(json.contains("\"#8BBCD4\""));
}

#[test]
fn test_json_export_with_gaps_in_x() {
    let x = [0.0, f64::NAN, 2.0, 3.0];
    let config = HorizonConfig::default().with_x_ticks(1, Vec::new());
    let figure = Horizon::new(config)
        .run(&x, &matrix(4, 2), &labels(2))
        .unwrap();

    let json = JsonRenderer::new().render(&figure).unwrap();
    let restored: Figure<f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.subplots[1].x_ticks, figure.subplots[1].x_ticks);
    assert_eq!(restored.subplots[1].x_ticks.len(), 3);
    assert_eq!(restored.legend, figure.legend);
    assert!(restored.subplots[0].layers[0].x[1].is_nan());
    assert_eq!(restored.subplots[0].layers[0].y, figure.subplots[0].layers[0].y);
}

#[test]
fn test_f32_samples() {
    let y: SeriesMatrix<f32> =
        SeriesMatrix::from_rows(vec![vec![1.5], vec![-3.0], vec![0.0]]).unwrap();
    let figure = Horizon::new(HorizonConfig::new(3))
        .run(&[0.0f32, 1.0, 2.0], &y, &["f32"])
        .unwrap();

    assert_eq!(figure.band_width, 1.0);
    assert_eq!(figure.subplots[0].layers[3].y.as_slice(), &[0.0, 1.0, 0.0]);
}

// ============================================================================
// Properties
// ============================================================================

fn legend_sorted(legend: &[LegendEntry<f64>]) -> bool {
    legend.windows(2).all(|w| w[0].lower <= w[1].lower)
}

fn only_outer_ticks(subplots: &[Subplot<f64>]) -> bool {
    let last = subplots.len() - 1;
    subplots.iter().enumerate().all(|(i, s)| {
        (i == 0 || s.y_ticks.is_empty()) && (i == last || s.x_ticks.is_empty())
    })
}

proptest! {
    #[test]
    fn prop_color_mismatch_rejected(bands in 1usize..6, colors in 0usize..12) {
        prop_assume!(colors != 2 * bands);
        let palette = ColorPalette::new(vec![Color::rgb(0, 0, 0); colors]);
        let config = HorizonConfig::default().with_bands(bands).with_colors(palette);

        // x and labels are deliberately inconsistent; configuration is checked first
        let err = Horizon::new(config)
            .run(&positions(1), &matrix(3, 2), &labels(5))
            .unwrap_err();
        prop_assert!(err.is_invalid_configuration());
    }

    #[test]
    fn prop_matching_palette_accepted(bands in 1usize..6, rows in 1usize..20, cols in 1usize..5) {
        let figure = Horizon::new(HorizonConfig::new(bands))
            .run(&positions(rows), &matrix(rows, cols), &labels(cols))
            .unwrap();

        prop_assert_eq!(figure.len(), cols);
        prop_assert_eq!(figure.legend.len(), 2 * bands);
        for subplot in &figure.subplots {
            prop_assert_eq!(subplot.layers.len(), 2 * bands);
        }
        prop_assert!(legend_sorted(&figure.legend));
        prop_assert!(only_outer_ticks(&figure.subplots));
    }

    #[test]
    fn prop_shape_mismatch_rejected(rows in 1usize..20, cols in 1usize..5, dx in 1usize..4) {
        let horizon = Horizon::new(HorizonConfig::default());
        let y = matrix(rows, cols);

        let err = horizon.run(&positions(rows + dx), &y, &labels(cols)).unwrap_err();
        prop_assert!(err.is_shape_mismatch());

        let err = horizon.run(&positions(rows), &y, &labels(cols + dx)).unwrap_err();
        prop_assert!(err.is_shape_mismatch());
    }

    #[test]
    fn prop_layers_within_shared_range(
        values in prop::collection::vec(-1e3f64..1e3, 1..40),
        bands in 1usize..5,
    ) {
        let n = values.len();
        let y = SeriesMatrix::from_rows(values.iter().map(|&v| vec![v, -v]).collect()).unwrap();
        let figure = Horizon::new(HorizonConfig::new(bands))
            .run(&positions(n), &y, &labels(2))
            .unwrap();

        let (lo, hi) = figure.y_range;
        for subplot in &figure.subplots {
            for layer in &subplot.layers {
                prop_assert!(layer.y.iter().all(|&v| v >= lo && v <= hi));
            }
        }
    }
}
