use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a corpus or its configuration.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Reading a file or directory failed (includes non UTF-8 contents).
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `EngineConfig`.
    #[error("invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SearchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SearchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
