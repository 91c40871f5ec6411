use std::collections::{HashMap, HashSet};
use std::ops::Index;

use crate::document::Document;
use crate::preprocessing::tokenizer::Tokenizer;

/// One corpus entry: an identifier, its tokens and their counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    id: String,
    tokens: Vec<String>,
    term_counts: HashMap<String, usize>,
}

impl Entry {
    fn new(id: String, tokens: Vec<String>) -> Self {
        let mut term_counts = HashMap::new();
        for token in &tokens {
            *term_counts.entry(token.clone()).or_insert(0) += 1;
        }
        Self {
            id,
            tokens,
            term_counts,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Occurrences of `word` among the tokens.
    pub fn term_count(&self, word: &str) -> usize {
        self.term_counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.term_counts.contains_key(word)
    }

    /// Distinct words of this entry.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(String::as_str)
    }
}

/// Identifier to token sequence mapping that remembers insertion order.
///
/// The same type serves whole files (keyed by file name) and sentences
/// (keyed by the sentence text). Re-inserting an existing id replaces its
/// tokens and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize every document, keyed by its name.
    pub fn from_documents(documents: &[Document], tokenizer: &Tokenizer) -> Self {
        documents
            .iter()
            .map(|doc| (doc.name.clone(), tokenizer.tokenize(&doc.text)))
            .collect()
    }

    /// Tokenize sentences, keyed by their text. Sentences without a single
    /// content word are left out so no entry has zero tokens.
    pub fn from_sentences<I, S>(sentences: I, tokenizer: &Tokenizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut corpus = Self::new();
        for sentence in sentences {
            let sentence = sentence.into();
            let tokens = tokenizer.tokenize(&sentence);
            if !tokens.is_empty() {
                corpus.insert(sentence, tokens);
            }
        }
        corpus
    }

    pub fn insert(&mut self, id: impl Into<String>, tokens: Vec<String>) {
        let id = id.into();
        match self.positions.get(&id) {
            Some(&pos) => self.entries[pos] = Entry::new(id, tokens),
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push(Entry::new(id, tokens));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        let mut corpus = Self::new();
        for (id, tokens) in iter {
            corpus.insert(id, tokens);
        }
        corpus
    }
}

/// Inverse document frequency of every word seen in a corpus.
///
/// `idf(w) = ln(N / df(w))` where `N` is the number of entries and `df(w)`
/// the number of entries containing `w` at least once. Words absent from
/// the corpus have no value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    values: HashMap<String, f64>,
    total_documents: usize,
}

impl IdfTable {
    pub fn build(corpus: &Corpus) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for entry in corpus.entries() {
            // term_counts keys are already distinct per entry
            for term in entry.terms() {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let total = corpus.len() as f64;
        let values = document_frequency
            .into_iter()
            .map(|(term, df)| (term.to_string(), (total / df as f64).ln()))
            .collect();

        Self {
            values,
            total_documents: corpus.len(),
        }
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.values.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    pub fn words(&self) -> HashSet<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

/// # Panics
///
/// Panics if `word` never occurred in the corpus the table was built from.
impl Index<&str> for IdfTable {
    type Output = f64;

    fn index(&self, word: &str) -> &f64 {
        match self.values.get(word) {
            Some(value) => value,
            None => panic!("no idf value for {:?}", word),
        }
    }
}
