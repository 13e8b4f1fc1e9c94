//! Parameters controlling a pole of inaccessibility search.

use serde::{Deserialize, Serialize};

use crate::error::{PolylabelError, Result};

/// Iterations granted per halving of the seed cell when no explicit cap is set.
const ITERATIONS_PER_LEVEL: usize = 4096;

/// Upper limit on the derived iteration cap.
const MAX_DEFAULT_ITERATIONS: usize = 1 << 22;

/// Options for [`Polylabel`][crate::algorithm::polylabel::Polylabel].
///
/// `precision` is expressed in the same planar units as the input coordinates. The returned
/// distance is guaranteed to be within `precision` of the best distance achievable, unless the
/// search stops on its iteration cap first.
///
/// ```
/// use geoarrow_polylabel::PolylabelOptions;
///
/// let options = PolylabelOptions::from_json(r#"{"precision": 0.5}"#).unwrap();
/// assert_eq!(options.precision, 0.5);
/// assert_eq!(options.max_iterations, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylabelOptions {
    /// Convergence tolerance, in coordinate units.
    pub precision: f64,

    /// Maximum number of cells to pop from the frontier. `None` derives a cap from the
    /// polygon's extent and the precision.
    pub max_iterations: Option<usize>,
}

impl PolylabelOptions {
    /// Options with the given precision and a derived iteration cap.
    pub fn new(precision: f64) -> Self {
        Self {
            precision,
            max_iterations: None,
        }
    }

    /// Cap the number of cells the search may pop.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            ..self
        }
    }

    /// Parse options from a JSON object. Missing keys take their default values.
    pub fn from_json(s: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the precision is finite and positive and that any cap is nonzero.
    pub fn validate(&self) -> Result<()> {
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(PolylabelError::InvalidPrecision(self.precision));
        }
        if self.max_iterations == Some(0) {
            return Err(PolylabelError::InvalidOptions(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The iteration cap for a search whose seed cells have half-size `initial_half_size`.
    pub(crate) fn iteration_budget(&self, initial_half_size: f64) -> usize {
        if let Some(max_iterations) = self.max_iterations {
            return max_iterations;
        }

        let levels = (initial_half_size / self.precision).log2().ceil();
        let depth = if levels.is_finite() && levels >= 1.0 {
            levels as usize
        } else {
            1
        };
        ITERATIONS_PER_LEVEL
            .saturating_mul(depth + 1)
            .min(MAX_DEFAULT_ITERATIONS)
    }
}

impl Default for PolylabelOptions {
    fn default() -> Self {
        Self::new(1.0)
    }
}
