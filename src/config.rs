use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SearchError};

pub const DEFAULT_FILE_MATCHES: usize = 1;
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;
pub const DEFAULT_EXTENSION: &str = "txt";

/// Tunables for one run of the question answering pipeline.
///
/// Every field is optional in the JSON form, missing ones fall back to the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// How many top ranked files feed the sentence stage.
    pub file_matches: usize,
    /// How many sentences are printed.
    pub sentence_matches: usize,
    /// File extension (without the dot) of corpus documents.
    pub extension: String,
    /// Stopword list replacing the built-in English one.
    pub stopwords: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            file_matches: DEFAULT_FILE_MATCHES,
            sentence_matches: DEFAULT_SENTENCE_MATCHES,
            extension: DEFAULT_EXTENSION.to_string(),
            stopwords: None,
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SearchError::io(path, e))?;
        Self::from_json(&content).map_err(|source| SearchError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 1);
        assert_eq!(config.extension, "txt");
        assert!(config.stopwords.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "sentence_matches": 3 }"#).unwrap();
        assert_eq!(config.sentence_matches, 3);
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.extension, "txt");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(EngineConfig::from_json(r#"{ "top_k": 3 }"#).is_err());
    }

    #[test]
    fn test_from_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        match EngineConfig::from_file(&path) {
            Err(SearchError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
