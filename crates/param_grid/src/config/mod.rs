//! Grid configuration
//!
//! Grids can be written out in code with the fluent [`GridBuilder`], or
//! loaded from JSON / YAML text with
//! [`GridSpec::from_json_str`](crate::GridSpec::from_json_str) and
//! `GridSpec::from_yaml_str`. Both routes produce a
//! [`GridSpec`](crate::GridSpec) that [`ParameterGrid::new`](crate::ParameterGrid::new)
//! validates.
//!
//! # Builder DSL
//!
//! ```ignore
//! use param_grid::{GridBuilder, GridSpec, ParameterGrid};
//!
//! let linear = GridBuilder::new().param("kernel", ["linear"]).param("C", [1, 10, 100]);
//! let rbf = GridBuilder::new()
//!     .param("kernel", ["rbf"])
//!     .log_space("gamma", 1e-3, 1.0, 4)
//!     .nested("optimizer", |opt| opt.param("name", ["sgd", "adam"]));
//!
//! let grid = ParameterGrid::new(GridSpec::from(vec![linear.build(), rbf.build()]))?;
//! ```

mod builder;

pub use builder::GridBuilder;
