//! Common test utilities for horizon-chart.
//!
//! Float comparison, synthetic signals and CSV tables.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Tiered float comparison.
///
/// - NaN only matches NaN
/// - expected values near zero (|expected| < 1e-10) compare absolutely
/// - everything else compares relatively
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: expected NaN but got {actual}");
        return;
    }
    assert!(!actual.is_nan(), "{context}: got NaN but expected {expected}");

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{context}: expected {expected} but got {actual} (diff: {diff})"
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{context}: expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
    );
}

/// Assert two sample sequences are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{name}: length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{name}[{i}]"));
    }
}

// ============================================================================
// Synthetic Signals
// ============================================================================

/// Sine wave around `center`.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Positive random walk with a deterministic seed.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut values = Vec::with_capacity(len);
    let mut current = start;
    for _ in 0..len {
        values.push(current);
        current = (current + next() * volatility).max(0.01);
    }
    values
}

// ============================================================================
// CSV Tables
// ============================================================================

/// Render a table as CSV: an index column named `index_name` then one column per entry.
pub fn table_csv(index_name: &str, index: &[String], columns: &[(&str, Vec<f64>)]) -> String {
    let mut out = String::from(index_name);
    for (name, _) in columns {
        out.push(',');
        out.push_str(name);
    }
    out.push('\n');

    for (row, label) in index.iter().enumerate() {
        out.push_str(label);
        for (_, values) in columns {
            out.push(',');
            if let Some(v) = values.get(row).filter(|v| !v.is_nan()) {
                out.push_str(&v.to_string());
            }
        }
        out.push('\n');
    }
    out
}

/// Monthly labels starting at January of `year`.
pub fn monthly_index(year: u32, len: usize) -> Vec<String> {
    (0..len)
        .map(|i| format!("{}-{:02}", year as usize + i / 12, i % 12 + 1))
        .collect()
}

/// Write `contents` to `file` inside `dir`.
pub fn write_table(dir: &Path, file: &str, contents: &str) {
    fs::write(dir.join(file), contents).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_nan() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_random_walk_deterministic() {
        let a = generate_random_walk(100.0, 1.0, 10, 12345);
        assert_eq!(a, generate_random_walk(100.0, 1.0, 10, 12345));
        assert_eq!(a[0], 100.0);
    }

    #[test]
    fn test_table_csv() {
        let csv = table_csv(
            "month",
            &["a".to_string(), "b".to_string()],
            &[("x", vec![1.0, f64::NAN])],
        );
        assert_eq!(csv, "month,x\na,1\nb,\n");
    }

    #[test]
    fn test_monthly_index() {
        let index = monthly_index(1975, 14);
        assert_eq!(index[0], "1975-01");
        assert_eq!(index[13], "1976-02");
    }
}
