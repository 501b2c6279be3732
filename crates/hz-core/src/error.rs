//! Error types for horizon chart operations.
//!
//! Validation failures are reported synchronously, before any band or render work
//! starts, through the [`HorizonError`] enum.

use thiserror::Error;

/// Result type alias for operations that may fail validation.
pub type Result<T> = core::result::Result<T, HorizonError>;

/// Which dimension a [`HorizonError::ShapeMismatch`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// Number of series (matrix columns) compared with something else.
    Columns,
    /// Number of samples (matrix rows) compared with something else.
    Rows,
}

impl core::fmt::Display for Dimension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Columns => f.write_str("columns"),
            Self::Rows => f.write_str("rows"),
        }
    }
}

/// Errors raised while validating chart inputs and configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HorizonError {
    /// The palette does not hold exactly two colors per band, or the band count is zero.
    #[error("Invalid configuration: {colors} colors for {bands} bands (expected {expected})")]
    InvalidConfiguration {
        /// Requested band count.
        bands: usize,
        /// Number of colors supplied.
        colors: usize,
        /// Number of colors that would have been valid.
        expected: usize,
    },

    /// Series, labels or x positions disagree in length.
    #[error("Shape mismatch in {dimension}: {context} expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Dimension being compared.
        dimension: Dimension,
        /// What was being compared.
        context: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },
}

impl HorizonError {
    /// Build the configuration error for a band count and palette length.
    #[must_use]
    pub fn invalid_configuration(bands: usize, colors: usize) -> Self {
        Self::InvalidConfiguration {
            bands,
            colors,
            expected: bands.max(1) * 2,
        }
    }

    /// Build a shape mismatch error.
    #[must_use]
    pub fn shape(
        dimension: Dimension,
        context: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::ShapeMismatch {
            dimension,
            context,
            expected,
            actual,
        }
    }

    /// Returns `true` for [`HorizonError::InvalidConfiguration`].
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Returns `true` for [`HorizonError::ShapeMismatch`].
    #[must_use]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = HorizonError::invalid_configuration(3, 4);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: 4 colors for 3 bands (expected 6)"
        );
        assert!(err.is_invalid_configuration());
        assert!(!err.is_shape_mismatch());
    }

    #[test]
    fn test_zero_bands_expects_at_least_two_colors() {
        let err = HorizonError::invalid_configuration(0, 0);
        assert_eq!(
            err,
            HorizonError::InvalidConfiguration {
                bands: 0,
                colors: 0,
                expected: 2,
            }
        );
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = HorizonError::shape(Dimension::Columns, "labels", 3, 2);
        assert_eq!(
            err.to_string(),
            "Shape mismatch in columns: labels expected 3, got 2"
        );
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = HorizonError::InvalidParameter {
            name: "x_tick_step",
            value: "0".to_string(),
            expected: "positive integer",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'x_tick_step': 0 (expected positive integer)"
        );
    }
}
