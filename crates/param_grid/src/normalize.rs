//! Flattened form of a grid
//!
//! Normalization walks a [`Grid`] depth-first in insertion order and records
//! one `(path, values)` pair per leaf. The order of those pairs fixes the
//! enumeration order: the first parameter is the slowest-varying digit and
//! the last is the fastest.

use crate::combination::Combination;
use crate::error::InvalidGridError;
use crate::path::ParameterPath;
use crate::spec::{Grid, GridNode};
use crate::value::ParamValue;

/// A grid reduced to parallel path and candidate lists
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGrid {
    paths: Vec<ParameterPath>,
    value_lists: Vec<Vec<ParamValue>>,
    /// Product of the value-list lengths
    size: usize,
}

impl NormalizedGrid {
    /// Flatten and validate a grid
    pub fn from_grid(grid: &Grid) -> Result<Self, InvalidGridError> {
        let mut normalized = NormalizedGrid {
            paths: Vec::new(),
            value_lists: Vec::new(),
            size: 1,
        };
        normalized.extract(&ParameterPath::root(), grid)?;

        normalized.size = normalized
            .value_lists
            .iter()
            .try_fold(1usize, |acc, values| acc.checked_mul(values.len()))
            .ok_or(InvalidGridError::TooManyCombinations)?;

        Ok(normalized)
    }

    fn extract(&mut self, prefix: &ParameterPath, grid: &Grid) -> Result<(), InvalidGridError> {
        if grid.is_empty() {
            return Err(InvalidGridError::EmptyGrid {
                path: prefix.clone(),
            });
        }

        for (key, node) in grid.iter() {
            let path = prefix.child(key);
            match node {
                GridNode::Nested(child) => self.extract(&path, child)?,
                GridNode::Values(values) if values.is_empty() => {
                    return Err(InvalidGridError::EmptyValueList { path });
                }
                GridNode::Values(values) => {
                    tracing::trace!(%path, candidates = values.len(), "extracted parameter");
                    self.paths.push(path);
                    self.value_lists.push(values.clone());
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn paths(&self) -> &[ParameterPath] {
        &self.paths
    }

    #[must_use]
    pub fn value_lists(&self) -> &[Vec<ParamValue>] {
        &self.value_lists
    }

    /// Number of combinations in this grid
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Always false: a normalized grid has at least one combination
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[must_use]
    pub fn num_params(&self) -> usize {
        self.paths.len()
    }

    /// Mixed-radix digits of `index`, one per parameter, last varying fastest.
    ///
    /// `index` must be below [`len`](Self::len).
    pub(crate) fn digits(&self, index: usize) -> Vec<usize> {
        debug_assert!(index < self.size);

        let mut digits = vec![0; self.value_lists.len()];
        let mut rest = index;
        for (i, values) in self.value_lists.iter().enumerate().rev() {
            digits[i] = rest % values.len();
            rest /= values.len();
        }
        digits
    }

    /// Advance `digits` to the next combination like an odometer.
    ///
    /// Returns false when the digits wrap past the last combination.
    pub(crate) fn increment(&self, digits: &mut [usize]) -> bool {
        for (digit, values) in digits.iter_mut().zip(&self.value_lists).rev() {
            *digit += 1;
            if *digit < values.len() {
                return true;
            }
            *digit = 0;
        }
        false
    }

    /// Build the combination selected by `digits`
    pub(crate) fn combination(&self, digits: &[usize]) -> Combination {
        let mut combination = Combination::new();
        for ((path, values), &digit) in self.paths.iter().zip(&self.value_lists).zip(digits) {
            combination.insert_path(path, values[digit].clone());
        }
        combination
    }
}
