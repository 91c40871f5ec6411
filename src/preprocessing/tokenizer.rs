use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, SearchError};

/// English stopwords, the same 179 entries NLTK ships.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// ASCII punctuation characters.
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

// Ellipsis and double dash stay whole, numbers keep their separators,
// words keep inner hyphens, apostrophes and periods, anything else is a
// single character token.
const TOKEN_PATTERN: &str = r"(?x)
      \.\.\.
    | --
    | \p{N}+(?:[.,:]\p{N}+)+
    | [\p{L}\p{N}_]+(?:['\-.][\p{L}\p{N}_]+)*
    | \S
";

/// Clitics split off the end of a word.
const CLITICS: &[&str] = &["'s", "'m", "'d", "'ll", "'re", "'ve"];

/// Fused forms split in two at a fixed byte offset.
const FUSED_WORDS: &[&str] = &["cannot", "gimme", "gonna", "gotta", "lemme", "wanna"];

/// Filtering resources handed to a [`Tokenizer`].
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    pub stop_words: HashSet<String>,
    pub punctuation: HashSet<char>,
}

impl TokenizerConfig {
    pub fn english() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            punctuation: ASCII_PUNCTUATION.chars().collect(),
        }
    }

    pub fn with_stop_words(mut self, stop_words: HashSet<String>) -> Self {
        self.stop_words = stop_words;
        self
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::english()
    }
}

/// Turns raw text into lower-cased content words, in order.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
    pattern: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        let pattern = Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex");
        Self { config, pattern }
    }

    /// Segment `text` into words and punctuation without any filtering.
    ///
    /// Clitics are split the way the Penn Treebank does it, so `don't`
    /// becomes `do` + `n't` and `she's` becomes `she` + `'s`.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let text = text.replace('\u{2019}', "'");
        let mut words = Vec::new();
        for m in self.pattern.find_iter(&text) {
            split_word(m.as_str(), &mut words);
        }
        words
    }

    /// Lower-case, drop punctuation-only tokens and stopwords.
    ///
    /// ```
    /// use sentence_search::Tokenizer;
    ///
    /// let tokens = Tokenizer::default().tokenize("The cat sat, didn't it?");
    /// assert_eq!(tokens, vec!["cat", "sat", "n't"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.segment(text)
            .into_iter()
            .map(|token| token.to_lowercase())
            .filter(|token| !self.is_punctuation(token) && !self.config.stop_words.contains(token))
            .collect()
    }

    fn is_punctuation(&self, token: &str) -> bool {
        token.chars().all(|c| self.config.punctuation.contains(&c))
    }
}

fn split_word(word: &str, out: &mut Vec<String>) {
    if word.is_ascii() && FUSED_WORDS.contains(&word.to_ascii_lowercase().as_str()) {
        out.push(word[..3].to_string());
        out.push(word[3..].to_string());
        return;
    }

    if let Some(pos) = word.rfind('\'') {
        let suffix = word[pos..].to_lowercase();
        // "n't" needs a stem in front of the n
        if suffix == "'t" && pos >= 2 && matches!(word.as_bytes()[pos - 1], b'n' | b'N') {
            out.push(word[..pos - 1].to_string());
            out.push(word[pos - 1..].to_string());
            return;
        }
        if pos > 0 && CLITICS.contains(&suffix.as_str()) {
            out.push(word[..pos].to_string());
            out.push(word[pos..].to_string());
            return;
        }
    }

    out.push(word.to_string());
}

/// Read a stopword file: one word per line, blank lines skipped.
pub fn load_stop_words(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|e| SearchError::io(path, e))?;
    let stop_words = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    Ok(stop_words)
}
