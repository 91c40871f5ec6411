//! End-to-end tests: corpus directory on disk, query, ranked sentences.

use std::fs;
use std::path::Path;

use sentence_search::{
    Corpus, Engine, EngineConfig, IdfTable, Query, SearchError, Tokenizer, top_files,
    top_sentences,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn write_corpus(dir: &Path) {
    fs::write(
        dir.join("python.txt"),
        "Python is a high-level programming language.\n\
         Python was created by Guido van Rossum and first released in 1991.",
    )
    .unwrap();
    fs::write(
        dir.join("rust.txt"),
        "Rust is a multi-paradigm programming language. \
         Rust was designed by Graydon Hoare at Mozilla Research.\n\
         Rust enforces memory safety without a garbage collector.",
    )
    .unwrap();
    fs::write(
        dir.join("haskell.txt"),
        "Haskell is a purely functional programming language. It has lazy evaluation.",
    )
    .unwrap();
    fs::write(dir.join("README.md"), "Rust Rust Rust Rust Rust").unwrap();
}

// ============================================================================
// Corpus scenarios
// ============================================================================

#[test]
fn test_tokenized_corpus_ranks_only_matching_file() {
    let tokenizer = Tokenizer::default();
    let files = Corpus::from_documents(
        &[
            sentence_search::Document::new("A", "the cat sat"),
            sentence_search::Document::new("B", "the dog ran"),
            sentence_search::Document::new("C", "cats and dogs are animals"),
        ],
        &tokenizer,
    );
    assert_eq!(files.get("C").unwrap().tokens(), &["cats", "dogs", "animals"]);

    let idfs = IdfTable::build(&files);
    let query = Query::parse("cat", &tokenizer);
    assert_eq!(top_files(&query, &files, &idfs, 1), vec!["A"]);
}

#[test]
fn test_sentence_tie_returns_first_inserted() {
    let tokenizer = Tokenizer::default();
    let sentences = Corpus::from_sentences(["Cats are great.", "Dogs are great too."], &tokenizer);
    let idfs = IdfTable::build(&sentences);
    let query = Query::parse("great", &tokenizer);
    assert_eq!(top_sentences(&query, &sentences, &idfs, 1), vec!["Cats are great."]);
}

// ============================================================================
// Engine on disk
// ============================================================================

#[test]
fn test_engine_answers_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let engine = Engine::load(dir.path(), EngineConfig::default()).unwrap();
    assert_eq!(engine.files().len(), 3);
    assert!(engine.files().get("README.md").is_none());

    let answers = engine.answer(&engine.query("Who designed Rust?"));
    assert_eq!(answers, vec!["Rust was designed by Graydon Hoare at Mozilla Research."]);
}

#[test]
fn test_engine_multiple_files_and_sentences() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let config = EngineConfig {
        file_matches: 2,
        sentence_matches: 2,
        ..EngineConfig::default()
    };
    let engine = Engine::load(dir.path(), config).unwrap();
    let answers = engine.answer(&engine.query("When was Python released?"));
    assert_eq!(answers.len(), 2);
    assert_eq!(
        answers[0],
        "Python was created by Guido van Rossum and first released in 1991."
    );
}

#[test]
fn test_engine_custom_stop_words() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());
    let stop_path = dir.path().join("stop.list");
    fs::write(&stop_path, "rust\n").unwrap();

    let config = EngineConfig {
        stopwords: Some(stop_path),
        ..EngineConfig::default()
    };
    let engine = Engine::load(dir.path(), config).unwrap();
    assert!(engine.query("Rust").is_empty());
    assert!(engine.file_idfs().get("rust").is_none());
    // "is" and "a" are content words once the built-in list is replaced
    assert!(engine.file_idfs().contains("is"));
}

#[test]
fn test_engine_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.text"), "Ferris is the Rust mascot.").unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "extension": "text", "sentence_matches": 2 }"#).unwrap();

    let config = EngineConfig::from_file(&config_path).unwrap();
    let engine = Engine::load(dir.path(), config).unwrap();
    assert_eq!(engine.config().sentence_matches, 2);
    assert_eq!(
        engine.answer(&engine.query("mascot")),
        vec!["Ferris is the Rust mascot."]
    );
}

#[test]
fn test_engine_empty_query_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let engine = Engine::load(dir.path(), EngineConfig::default()).unwrap();
    let query = engine.query("the of and?");
    assert!(query.is_empty());
    // files tie at zero and keep name order: haskell.txt comes first
    assert_eq!(
        engine.answer(&query),
        vec!["Haskell is a purely functional programming language."]
    );
}

#[test]
fn test_engine_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = Engine::load(&dir.path().join("absent"), EngineConfig::default()).unwrap_err();
    assert!(matches!(err, SearchError::Io { .. }));
}
