//! Error types for template generation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generation operations.
pub type LtxResult<T> = Result<T, LtxError>;

/// The two aggregate files a fragment can be recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateList {
    Floats,
    Refs,
}

impl fmt::Display for AggregateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateList::Floats => write!(f, "floats"),
            AggregateList::Refs => write!(f, "refs"),
        }
    }
}

/// Errors that can occur while generating documents and fragments.
#[derive(Error, Debug)]
pub enum LtxError {
    #[error("Cannot resolve current user: {0}")]
    IdentityResolution(String),

    #[error("Cannot read \"{identifier}\" template from {path:?}")]
    TemplateNotFound {
        identifier: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path:?}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot append to {list} list {path:?}")]
    AggregateAppend {
        list: AggregateList,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

impl LtxError {
    pub(crate) fn destination(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LtxError::DestinationWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_error_names_list_and_path() {
        let err = LtxError::AggregateAppend {
            list: AggregateList::Refs,
            path: PathBuf::from("./listofrefs.tex"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.contains("refs"));
        assert!(msg.contains("listofrefs.tex"));
    }
}
