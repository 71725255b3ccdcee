//! Parameter grid enumeration
//!
//! A [`ParameterGrid`] holds the normalized form of every grid in a spec and
//! enumerates their combinations without materializing them. Within one
//! grid the combinations follow cartesian-product order with the last
//! parameter varying fastest; grids follow one another in spec order.
//!
//! Random access decomposes a flat index into one digit per parameter
//! (mixed radix), so any combination can be produced without walking the
//! ones before it.

use std::iter::FusedIterator;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::combination::Combination;
use crate::error::{GridSpecError, IndexError};
use crate::normalize::NormalizedGrid;
use crate::spec::GridSpec;
use crate::value::ParamValue;

/// Grid of parameters with a discrete number of values for each
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    grids: Vec<NormalizedGrid>,
    /// Sum of every grid's size
    len: usize,
}

impl ParameterGrid {
    /// Validate and normalize a spec
    pub fn new(spec: impl Into<GridSpec>) -> Result<Self, GridSpecError> {
        let spec = spec.into();

        let grids = spec
            .grids()
            .iter()
            .enumerate()
            .map(|(position, grid)| {
                NormalizedGrid::from_grid(grid).map_err(|source| GridSpecError::InvalidGrid {
                    grid: position,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = grids
            .iter()
            .try_fold(0usize, |acc, grid| acc.checked_add(grid.len()))
            .ok_or(GridSpecError::TooManyCombinations)?;

        tracing::debug!(
            grids = grids.len(),
            params = grids.iter().map(NormalizedGrid::num_params).sum::<usize>(),
            combinations = len,
            "built parameter grid"
        );

        Ok(Self { grids, len })
    }

    /// Build from dynamically shaped input such as a parsed JSON document
    pub fn from_value(value: impl Into<ParamValue>) -> Result<Self, GridSpecError> {
        Self::new(GridSpec::try_from(value.into())?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, GridSpecError> {
        Self::new(GridSpec::from_json_str(text)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self, GridSpecError> {
        Self::new(GridSpec::from_yaml_str(text)?)
    }

    /// Number of points on the grid
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The normalized grids in enumeration order
    #[must_use]
    pub fn grids(&self) -> &[NormalizedGrid] {
        &self.grids
    }

    /// Iterate over the points in the grid
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// The combination at position `index` of [`iter`](Self::iter).
    ///
    /// Negative indices count from the end, so `-1` is the last combination.
    pub fn at(&self, index: i64) -> Result<Combination, IndexError> {
        let out_of_range = IndexError::IndexOutOfRange {
            index,
            len: self.len,
        };

        let position = if index < 0 {
            usize::try_from(index.unsigned_abs())
                .ok()
                .and_then(|back| self.len.checked_sub(back))
        } else {
            usize::try_from(index).ok()
        };

        let (grid, digits) = position
            .and_then(|position| self.locate(position))
            .ok_or(out_of_range)?;
        Ok(grid.combination(&digits))
    }

    /// Like [`at`](Self::at), for an index of dynamic type
    pub fn at_value(&self, index: &ParamValue) -> Result<Combination, IndexError> {
        match index {
            ParamValue::Int(i) => self.at(*i),
            other => Err(IndexError::InvalidIndexType {
                found: other.type_name(),
            }),
        }
    }

    /// Combinations in iteration order, built in parallel
    #[cfg(feature = "parallel")]
    pub fn par_iter(&self) -> impl IndexedParallelIterator<Item = Combination> + '_ {
        (0..self.len).into_par_iter().map(move |position| {
            let (grid, digits) = self
                .locate(position)
                .unwrap_or_else(|| unreachable!("position {position} is below the grid length"));
            grid.combination(&digits)
        })
    }

    /// Find the grid owning flat `position` and the digits within it
    fn locate(&self, position: usize) -> Option<(&NormalizedGrid, Vec<usize>)> {
        let mut rest = position;
        for grid in &self.grids {
            if rest < grid.len() {
                return Some((grid, grid.digits(rest)));
            }
            rest -= grid.len();
        }
        None
    }
}

impl<'a> IntoIterator for &'a ParameterGrid {
    type Item = Combination;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the combinations of a [`ParameterGrid`].
///
/// Holds one digit per parameter of the current grid and nothing else.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    grid: &'a ParameterGrid,
    /// Index into `grid.grids` of the grid being enumerated
    current: usize,
    digits: Vec<usize>,
    /// Flat index of the next combination
    position: usize,
}

impl<'a> Iter<'a> {
    fn new(grid: &'a ParameterGrid) -> Self {
        let digits = grid
            .grids
            .first()
            .map(|first| vec![0; first.num_params()])
            .unwrap_or_default();
        Self {
            grid,
            current: 0,
            digits,
            position: 0,
        }
    }

    /// Jump to flat `position` without building the skipped combinations
    fn seek(&mut self, position: usize) {
        self.position = position;
        let mut rest = position;
        for (index, grid) in self.grid.grids.iter().enumerate() {
            if rest < grid.len() {
                self.current = index;
                self.digits = grid.digits(rest);
                return;
            }
            rest -= grid.len();
        }
        self.position = self.grid.len;
    }
}

impl Iterator for Iter<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.grid.len {
            return None;
        }

        let grid = &self.grid.grids[self.current];
        let combination = grid.combination(&self.digits);
        self.position += 1;

        if !grid.increment(&mut self.digits) {
            self.current += 1;
            if let Some(next) = self.grid.grids.get(self.current) {
                self.digits = vec![0; next.num_params()];
            }
        }

        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len - self.position;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self.position.checked_add(n) {
            Some(target) if target < self.grid.len => {
                self.seek(target);
                self.next()
            }
            _ => {
                self.position = self.grid.len;
                None
            }
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
