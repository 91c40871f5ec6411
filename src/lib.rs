//! Answer a question from a directory of text documents.
//!
//! Files are ranked by TF-IDF against the query, the best files are cut
//! into sentences, and sentences are ranked by the summed IDF of the query
//! words they contain, with query term density breaking ties.
//!
//! ```
//! use sentence_search::{Corpus, IdfTable, Query, top_files};
//!
//! let files: Corpus = [
//!     ("A", vec!["cat".to_string(), "sat".to_string()]),
//!     ("B", vec!["dog".to_string(), "ran".to_string()]),
//! ]
//! .into_iter()
//! .collect();
//! let idfs = IdfTable::build(&files);
//! let query = Query::from_words(["cat"]);
//! assert_eq!(top_files(&query, &files, &idfs, 1), vec!["A"]);
//! ```

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod preprocessing;

pub use config::EngineConfig;
pub use document::{Document, load_files, split_sentences};
pub use engine::Engine;
pub use engine::search::{
    FileMatch, Query, SentenceMatch, rank_files, rank_sentences, top_files, top_sentences,
};
pub use error::SearchError;
pub use matrix::{Corpus, Entry, IdfTable};
pub use preprocessing::tokenizer::{Tokenizer, TokenizerConfig, load_stop_words};
