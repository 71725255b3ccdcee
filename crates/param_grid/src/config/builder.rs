//! Grid Builder
//!
//! Fluent construction of a [`Grid`]. Parameters keep the order in which they
//! are added; adding a name twice replaces its candidates in place.

use crate::spec::{Grid, GridNode};
use crate::value::ParamValue;

/// Builder for a single grid
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    grid: Grid,
}

impl GridBuilder {
    /// Create an empty grid builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Add a parameter with an explicit candidate list
    #[must_use]
    pub fn param<V: Into<ParamValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.grid.insert(name, GridNode::Values(values));
        self
    }

    /// Add integer candidates `start..end`
    #[must_use]
    pub fn range(self, name: impl Into<String>, range: std::ops::Range<i64>) -> Self {
        self.param(name, range)
    }

    /// Add `n_points` evenly spaced floats from `low` to `high` inclusive.
    ///
    /// A single point is the midpoint of the interval.
    #[must_use]
    pub fn linear_space(self, name: impl Into<String>, low: f64, high: f64, n_points: usize) -> Self {
        let values: Vec<f64> = (0..n_points)
            .map(|idx| {
                if n_points <= 1 {
                    (low + high) / 2.0
                } else {
                    low + (high - low) * (idx as f64) / (n_points - 1) as f64
                }
            })
            .collect();
        self.param(name, values)
    }

    /// Add `n_points` floats from `low` to `high` evenly spaced in log scale.
    ///
    /// Bounds are clamped to the smallest positive float.
    #[must_use]
    pub fn log_space(self, name: impl Into<String>, low: f64, high: f64, n_points: usize) -> Self {
        let log_low = low.max(f64::MIN_POSITIVE).ln();
        let log_high = high.max(f64::MIN_POSITIVE).ln();
        let values: Vec<f64> = (0..n_points)
            .map(|idx| {
                let t = if n_points <= 1 {
                    0.5
                } else {
                    idx as f64 / (n_points - 1) as f64
                };
                (log_low + t * (log_high - log_low)).exp()
            })
            .collect();
        self.param(name, values)
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    /// Add a nested group of parameters under `name`
    #[must_use]
    pub fn nested(
        mut self,
        name: impl Into<String>,
        build: impl FnOnce(GridBuilder) -> GridBuilder,
    ) -> Self {
        let child = build(GridBuilder::new()).build();
        self.grid.insert(name, GridNode::Nested(child));
        self
    }

    /// Add an already built grid under `name`
    #[must_use]
    pub fn grid(mut self, name: impl Into<String>, grid: Grid) -> Self {
        self.grid.insert(name, GridNode::Nested(grid));
        self
    }

    /// Finish the grid. Emptiness is reported when the grid is normalized.
    #[must_use]
    pub fn build(self) -> Grid {
        self.grid
    }
}
