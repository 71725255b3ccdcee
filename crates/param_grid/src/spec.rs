//! Grid specification types
//!
//! A [`Grid`] is a tree: interior nodes are nested grids and leaves are
//! candidate lists. A [`GridSpec`] is one grid or an ordered list of grids
//! whose spaces are concatenated.
//!
//! Typed construction goes through [`GridBuilder`](crate::config::GridBuilder).
//! Dynamically shaped input (JSON, YAML, a [`ParamValue`] tree) is checked
//! for shape here; emptiness is checked when the grid is normalized.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{GridSpecError, InvalidGridError};
use crate::path::ParameterPath;
use crate::value::ParamValue;

/// One entry of a grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GridNode {
    Nested(Grid),
    Values(Vec<ParamValue>),
}

/// A nested, insertion-ordered mapping of parameter names to candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    entries: IndexMap<String, GridNode>,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, node: GridNode) -> Option<GridNode> {
        self.entries.insert(key.into(), node)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&GridNode> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &GridNode)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert a raw map, rejecting entries that are neither maps nor lists
    fn from_raw(
        path: &ParameterPath,
        entries: IndexMap<String, ParamValue>,
    ) -> Result<Self, InvalidGridError> {
        let mut grid = Grid::new();
        for (key, value) in entries {
            let node = match value {
                ParamValue::Map(nested) => {
                    GridNode::Nested(Grid::from_raw(&path.child(&key), nested)?)
                }
                ParamValue::List(values) => GridNode::Values(values),
                other => {
                    return Err(InvalidGridError::UnsupportedValue {
                        path: path.child(&key),
                        found: other.type_name(),
                    });
                }
            };
            grid.entries.insert(key, node);
        }
        Ok(grid)
    }
}

impl TryFrom<ParamValue> for Grid {
    type Error = InvalidGridError;

    fn try_from(value: ParamValue) -> Result<Self, Self::Error> {
        match value {
            ParamValue::Map(entries) => Grid::from_raw(&ParameterPath::root(), entries),
            other => Err(InvalidGridError::UnsupportedValue {
                path: ParameterPath::root(),
                found: other.type_name(),
            }),
        }
    }
}

/// A single grid or an ordered union of grids
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GridSpec {
    Single(Grid),
    Union(Vec<Grid>),
}

impl GridSpec {
    /// The grids in enumeration order
    #[must_use]
    pub fn grids(&self) -> &[Grid] {
        match self {
            GridSpec::Single(grid) => std::slice::from_ref(grid),
            GridSpec::Union(grids) => grids,
        }
    }

    /// Parse a spec from JSON text, keeping key order
    pub fn from_json_str(text: &str) -> Result<Self, GridSpecError> {
        let raw: ParamValue = serde_json::from_str(text)?;
        Self::try_from(raw)
    }

    /// Parse a spec from YAML text, keeping key order
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self, GridSpecError> {
        let raw: ParamValue = serde_saphyr::from_str(text)?;
        Self::try_from(raw)
    }
}

impl From<Grid> for GridSpec {
    fn from(grid: Grid) -> Self {
        GridSpec::Single(grid)
    }
}

impl From<Vec<Grid>> for GridSpec {
    fn from(grids: Vec<Grid>) -> Self {
        GridSpec::Union(grids)
    }
}

impl TryFrom<ParamValue> for GridSpec {
    type Error = GridSpecError;

    fn try_from(value: ParamValue) -> Result<Self, Self::Error> {
        match value {
            map @ ParamValue::Map(_) => Grid::try_from(map)
                .map(GridSpec::Single)
                .map_err(|source| GridSpecError::InvalidGrid { grid: 0, source }),
            ParamValue::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(position, item)| match item {
                    map @ ParamValue::Map(_) => Grid::try_from(map).map_err(|source| {
                        GridSpecError::InvalidGrid {
                            grid: position,
                            source,
                        }
                    }),
                    other => Err(GridSpecError::InvalidGridSpec {
                        found: other.type_name(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(GridSpec::Union),
            other => Err(GridSpecError::InvalidGridSpec {
                found: other.type_name(),
            }),
        }
    }
}

impl TryFrom<serde_json::Value> for GridSpec {
    type Error = GridSpecError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        GridSpec::try_from(ParamValue::from(value))
    }
}
