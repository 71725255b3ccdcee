//! Exhaustive hyperparameter grids
//!
//! This crate enumerates every combination of a nested set of parameter axes
//! without materializing them, and gives direct random access into that
//! sequence. It supports:
//! - Nested grids: parameters grouped under sub-mappings, combinations shaped
//!   like the input
//! - Unions of grids, to search set A or set B without mixing them
//! - Lazy, restartable iteration in deterministic order (last parameter
//!   varies fastest)
//! - Closed-form length and O(params) indexing, including negative indices
//! - Grids written with a builder DSL or loaded from JSON / YAML
//!
//! # Example
//!
//! ```ignore
//! use param_grid::ParameterGrid;
//!
//! let grid = ParameterGrid::from_json_str(
//!     r#"[{"kernel": ["linear"]}, {"kernel": ["rbf"], "gamma": [1, 10]}]"#,
//! )?;
//!
//! assert_eq!(grid.len(), 3);
//! for params in &grid {
//!     println!("{}", params.to_json());
//! }
//! let second = grid.at(1)?; // {"kernel": "rbf", "gamma": 1}
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod combination;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod path;
pub mod value;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod spec;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use combination::Combination;
pub use config::GridBuilder;
pub use error::{Error, GridSpecError, IndexError, InvalidGridError, Result};
pub use grid::{Iter, ParameterGrid};
pub use normalize::NormalizedGrid;
pub use path::ParameterPath;
pub use spec::{Grid, GridNode, GridSpec};
pub use value::ParamValue;
