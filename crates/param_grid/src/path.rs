//! Paths locating a parameter inside a nested grid

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered keys from the grid root down to one parameter.
///
/// `["optimizer", "lr"]` addresses `combination["optimizer"]["lr"]`. The
/// empty path is the grid root and never names a parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterPath(Vec<String>);

impl ParameterPath {
    /// The empty path at the root of a grid
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path with `key` appended
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut keys = self.0.clone();
        keys.push(key.to_string());
        Self(keys)
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into the interior keys and the leaf key
    #[must_use]
    pub fn split_leaf(&self) -> Option<(&String, &[String])> {
        self.0.split_last()
    }
}

impl fmt::Display for ParameterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl<S: Into<String>> From<Vec<S>> for ParameterPath {
    fn from(keys: Vec<S>) -> Self {
        Self(keys.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for ParameterPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_extends_without_mutating() {
        let parent = ParameterPath::from(vec!["model"]);
        let child = parent.child("depth");
        assert_eq!(parent.len(), 1);
        assert_eq!(child.keys(), ["model", "depth"]);
        assert_eq!(child.to_string(), "model.depth");
    }

    #[test]
    fn test_split_leaf() {
        let path: ParameterPath = ["a", "b", "c"].into_iter().collect();
        let (leaf, prefix) = path.split_leaf().unwrap();
        assert_eq!(leaf, "c");
        assert_eq!(prefix, ["a", "b"]);
        assert!(ParameterPath::root().split_leaf().is_none());
    }
}
