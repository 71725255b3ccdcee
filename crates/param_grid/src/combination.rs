//! One point of a parameter grid, shaped like the grid it came from

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::path::ParameterPath;
use crate::value::ParamValue;

/// A fully resolved assignment of one value to every parameter.
///
/// Nested grid levels become [`ParamValue::Map`] entries, so a grid
/// `{"opt": {"lr": [...]}}` yields combinations `{"opt": {"lr": v}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination(IndexMap<String, ParamValue>);

impl Combination {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` at `path`, creating intermediate maps along the way.
    ///
    /// Paths produced by normalizing a grid are prefix-free, so an interior
    /// key never already holds a leaf.
    pub(crate) fn insert_path(&mut self, path: &ParameterPath, value: ParamValue) {
        let Some((leaf, prefix)) = path.split_leaf() else {
            return;
        };

        let mut level = &mut self.0;
        for key in prefix {
            let entry = level
                .entry(key.clone())
                .or_insert_with(|| ParamValue::Map(IndexMap::new()));
            level = match entry {
                ParamValue::Map(map) => map,
                _ => unreachable!("parameter path `{path}` passes through a leaf"),
            };
        }
        level.insert(leaf.clone(), value);
    }

    /// Look up the value at `path`
    #[must_use]
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&ParamValue> {
        let (leaf, prefix) = path.split_last()?;
        let mut level = &self.0;
        for key in prefix {
            level = level.get(key.as_ref())?.as_map()?;
        }
        level.get(leaf.as_ref())
    }

    /// Top-level entries
    #[must_use]
    pub fn entries(&self) -> &IndexMap<String, ParamValue> {
        &self.0
    }

    /// Every leaf with its path, depth-first in key order
    #[must_use]
    pub fn leaves(&self) -> Vec<(ParameterPath, &ParamValue)> {
        fn walk<'a>(
            prefix: &ParameterPath,
            level: &'a IndexMap<String, ParamValue>,
            out: &mut Vec<(ParameterPath, &'a ParamValue)>,
        ) {
            for (key, value) in level {
                let path = prefix.child(key);
                match value {
                    ParamValue::Map(nested) => walk(&path, nested, out),
                    leaf => out.push((path, leaf)),
                }
            }
        }

        let mut out = Vec::new();
        walk(&ParameterPath::root(), &self.0, &mut out);
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, ParamValue> {
        self.0
    }

    /// The combination as a JSON object
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        ParamValue::Map(self.0.clone()).into()
    }
}

impl From<Combination> for ParamValue {
    fn from(combination: Combination) -> Self {
        ParamValue::Map(combination.0)
    }
}
