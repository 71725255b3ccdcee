use std::fmt;

use crate::path::ParameterPath;

/// Structural problems found inside a single grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGridError {
    /// A mapping with no entries, at the top level (empty path) or nested
    EmptyGrid { path: ParameterPath },
    /// A parameter whose candidate list has no values
    EmptyValueList { path: ParameterPath },
    /// A grid entry that is neither a nested mapping nor a list
    UnsupportedValue {
        path: ParameterPath,
        found: &'static str,
    },
    /// The product of the value-list lengths does not fit in a `usize`
    TooManyCombinations,
}

impl fmt::Display for InvalidGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGridError::EmptyGrid { path } if path.is_empty() => {
                write!(f, "grid must be non-empty")
            }
            InvalidGridError::EmptyGrid { path } => {
                write!(f, "grid must be non-empty at `{path}`")
            }
            InvalidGridError::EmptyValueList { path } => {
                write!(f, "value list for parameter `{path}` must be non-empty")
            }
            InvalidGridError::UnsupportedValue { path, found } => write!(
                f,
                "parameter value at `{path}` must be a nested mapping or a non-empty list, got type {found}"
            ),
            InvalidGridError::TooManyCombinations => {
                write!(f, "grid has too many combinations to index")
            }
        }
    }
}

impl std::error::Error for InvalidGridError {}

/// Errors raised while building a [`ParameterGrid`](crate::ParameterGrid)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSpecError {
    /// The top-level input is neither a mapping nor a list of mappings
    InvalidGridSpec { found: &'static str },
    /// The grid at position `grid` of the spec is malformed
    InvalidGrid {
        grid: usize,
        source: InvalidGridError,
    },
    /// The summed size of all grids does not fit in a `usize`
    TooManyCombinations,
    /// The spec text could not be parsed
    Parse(String),
}

impl fmt::Display for GridSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSpecError::InvalidGridSpec { found } => write!(
                f,
                "parameter grid should be a mapping or a list of mappings, got type {found}"
            ),
            GridSpecError::InvalidGrid { grid, source } => {
                write!(f, "invalid grid #{grid}: {source}")
            }
            GridSpecError::TooManyCombinations => {
                write!(f, "parameter grid has too many combinations to index")
            }
            GridSpecError::Parse(msg) => write!(f, "could not parse parameter grid: {msg}"),
        }
    }
}

impl std::error::Error for GridSpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridSpecError::InvalidGrid { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GridSpecError {
    fn from(err: serde_json::Error) -> Self {
        GridSpecError::Parse(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_saphyr::Error> for GridSpecError {
    fn from(err: serde_saphyr::Error) -> Self {
        GridSpecError::Parse(err.to_string())
    }
}

/// Errors raised by indexed access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The index is not an integer
    InvalidIndexType { found: &'static str },
    /// The index, after negative adjustment, is outside `[0, len)`
    IndexOutOfRange { index: i64, len: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidIndexType { found } => {
                write!(f, "index should be an integer, got type {found}")
            }
            IndexError::IndexOutOfRange { index, len } => write!(
                f,
                "parameter grid index {index} out of range for grid of length {len}"
            ),
        }
    }
}

impl std::error::Error for IndexError {}

/// Any error produced by this crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Spec(GridSpecError),
    Index(IndexError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spec(e) => write!(f, "{e}"),
            Error::Index(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spec(e) => Some(e),
            Error::Index(e) => Some(e),
        }
    }
}

impl From<GridSpecError> for Error {
    fn from(err: GridSpecError) -> Self {
        Error::Spec(err)
    }
}

impl From<IndexError> for Error {
    fn from(err: IndexError) -> Self {
        Error::Index(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
