pub mod search;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::document::{Document, load_files, split_sentences};
use crate::error::Result;
use crate::matrix::{Corpus, IdfTable};
use crate::preprocessing::tokenizer::{Tokenizer, TokenizerConfig, load_stop_words};
use search::{Query, top_files, top_sentences};

/// File-level index plus everything needed to answer queries against it.
///
/// Built once per run; answering never mutates it.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    tokenizer: Tokenizer,
    documents: Vec<Document>,
    files: Corpus,
    file_idfs: IdfTable,
}

impl Engine {
    pub fn new(documents: Vec<Document>, tokenizer: Tokenizer, config: EngineConfig) -> Self {
        let files = Corpus::from_documents(&documents, &tokenizer);
        let file_idfs = IdfTable::build(&files);
        info!(
            documents = files.len(),
            vocabulary = file_idfs.len(),
            "file index built"
        );

        Self {
            config,
            tokenizer,
            documents,
            files,
            file_idfs,
        }
    }

    /// Load the corpus in `directory` and index it.
    pub fn load(directory: &Path, config: EngineConfig) -> Result<Self> {
        let mut tokenizer_config = TokenizerConfig::english();
        if let Some(path) = &config.stopwords {
            let stop_words = load_stop_words(path)?;
            info!(path = %path.display(), count = stop_words.len(), "custom stopwords loaded");
            tokenizer_config = tokenizer_config.with_stop_words(stop_words);
        }

        let documents = load_files(directory, &config.extension)?;
        if documents.is_empty() {
            warn!(
                directory = %directory.display(),
                extension = %config.extension,
                "no documents found, answers will be empty"
            );
        }

        Ok(Self::new(documents, Tokenizer::new(tokenizer_config), config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn files(&self) -> &Corpus {
        &self.files
    }

    pub fn file_idfs(&self) -> &IdfTable {
        &self.file_idfs
    }

    pub fn query(&self, text: &str) -> Query {
        Query::parse(text, &self.tokenizer)
    }

    /// Sentence corpus drawn from the named files, in the given order.
    pub fn sentences<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Corpus {
        let texts = names.into_iter().filter_map(|name| {
            self.documents
                .iter()
                .find(|doc| doc.name == name)
                .map(|doc| doc.text.as_str())
        });
        Corpus::from_sentences(texts.flat_map(split_sentences), &self.tokenizer)
    }

    /// Best matching sentences for `query`, most relevant first.
    pub fn answer(&self, query: &Query) -> Vec<String> {
        let filenames = top_files(query, &self.files, &self.file_idfs, self.config.file_matches);
        info!(files = ?filenames, "top files");

        let sentences = self.sentences(filenames.iter().copied());
        let idfs = IdfTable::build(&sentences);
        debug!(
            sentences = sentences.len(),
            vocabulary = idfs.len(),
            "sentence index built"
        );

        top_sentences(query, &sentences, &idfs, self.config.sentence_matches)
            .into_iter()
            .map(String::from)
            .collect()
    }
}
