use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, SearchError};

/// A named text document from the corpus directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Read every file in `directory` whose extension is `extension`.
///
/// Other entries, sub-directories included, are skipped. Documents come
/// back sorted by file name.
pub fn load_files(directory: &Path, extension: &str) -> Result<Vec<Document>> {
    let entries = fs::read_dir(directory).map_err(|e| SearchError::io(directory, e))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SearchError::io(directory, e))?.path();

        let matches = path.extension().and_then(|ext| ext.to_str()) == Some(extension);
        if !matches || !path.is_file() {
            debug!(path = %path.display(), "skipping non-document entry");
            continue;
        }

        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let text = fs::read_to_string(&path).map_err(|e| SearchError::io(&path, e))?;
        documents.push(Document { name, text });
    }

    documents.sort_by(|a, b| a.name.cmp(&b.name));
    info!(directory = %directory.display(), documents = documents.len(), "corpus loaded");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_only_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        fs::write(dir.path().join("notes.md"), "skip me").unwrap();
        fs::write(dir.path().join("txt"), "no extension").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let docs = load_files(dir.path(), "txt").unwrap();
        assert_eq!(
            docs,
            vec![Document::new("a.txt", "first"), Document::new("b.txt", "second")]
        );
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_files(dir.path(), "txt").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        match load_files(&missing, "txt") {
            Err(SearchError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            load_files(dir.path(), "txt"),
            Err(SearchError::Io { .. })
        ));
    }
}
