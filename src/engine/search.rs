use std::collections::BTreeSet;

use crate::matrix::{Corpus, Entry, IdfTable};
use crate::preprocessing::tokenizer::Tokenizer;

/// A deduplicated set of normalized query words.
///
/// Words are kept sorted so score sums are accumulated in the same order on
/// every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    words: BTreeSet<String>,
}

impl Query {
    pub fn parse(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::from_words(tokenizer.tokenize(text))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A file with its summed TF-IDF score.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMatch<'a> {
    pub name: &'a str,
    pub score: f64,
}

/// A sentence with its matched-word IDF sum and query term density.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceMatch<'a> {
    pub text: &'a str,
    pub idf_score: f64,
    pub density: f64,
}

/// Score every file and order them, most relevant first.
///
/// `score = Σ tf(w) * idf(w)` over the query words, with raw counts for
/// `tf`. Query words missing from `idfs` add nothing. Equal scores keep
/// corpus order.
pub fn rank_files<'a>(query: &Query, files: &'a Corpus, idfs: &IdfTable) -> Vec<FileMatch<'a>> {
    let mut ranked: Vec<(usize, FileMatch<'a>)> = files
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let file = FileMatch {
                name: entry.id(),
                score: tf_idf(query, entry, idfs),
            };
            (index, file)
        })
        .collect();

    ranked.sort_by(|(ia, a), (ib, b)| b.score.total_cmp(&a.score).then(ia.cmp(ib)));
    ranked.into_iter().map(|(_, file)| file).collect()
}

/// Names of the `n` files that best match `query`.
pub fn top_files<'a>(query: &Query, files: &'a Corpus, idfs: &IdfTable, n: usize) -> Vec<&'a str> {
    rank_files(query, files, idfs)
        .into_iter()
        .take(n)
        .map(|file| file.name)
        .collect()
}

fn tf_idf(query: &Query, entry: &Entry, idfs: &IdfTable) -> f64 {
    query
        .words()
        .map(|word| entry.term_count(word) as f64 * idfs.get(word).unwrap_or(0.0))
        .sum()
}

/// Score every sentence and order them, most relevant first.
///
/// The primary key sums the IDF of each distinct query word present in the
/// sentence. Ties go to the higher query term density (matching tokens over
/// all tokens of the sentence), then to corpus order.
///
/// # Panics
///
/// `idfs` must be built from `sentences`; a query word found in a sentence
/// but missing from `idfs` panics.
pub fn rank_sentences<'a>(
    query: &Query,
    sentences: &'a Corpus,
    idfs: &IdfTable,
) -> Vec<SentenceMatch<'a>> {
    let mut ranked: Vec<(usize, SentenceMatch<'a>)> = sentences
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| (index, score_sentence(query, entry, idfs)))
        .collect();

    ranked.sort_by(|(ia, a), (ib, b)| {
        b.idf_score
            .total_cmp(&a.idf_score)
            .then(b.density.total_cmp(&a.density))
            .then(ia.cmp(ib))
    });
    ranked.into_iter().map(|(_, sentence)| sentence).collect()
}

/// The `n` sentences that best match `query`.
pub fn top_sentences<'a>(
    query: &Query,
    sentences: &'a Corpus,
    idfs: &IdfTable,
    n: usize,
) -> Vec<&'a str> {
    rank_sentences(query, sentences, idfs)
        .into_iter()
        .take(n)
        .map(|sentence| sentence.text)
        .collect()
}

fn score_sentence<'a>(query: &Query, entry: &'a Entry, idfs: &IdfTable) -> SentenceMatch<'a> {
    let mut idf_score = 0.0;
    let mut matches = 0;
    for word in query.words() {
        let count = entry.term_count(word);
        if count > 0 {
            idf_score += idfs[word];
            matches += count;
        }
    }

    let total = entry.tokens().len();
    debug_assert!(total > 0, "sentence {:?} has no tokens", entry.id());
    let density = if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64
    };

    SentenceMatch {
        text: entry.id(),
        idf_score,
        density,
    }
}
