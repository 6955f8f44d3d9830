use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use crate::error::{HaikuError, Result};

const CURLY_QUOTES: [char; 2] = ['‘', '’'];

/// Word occurrence counts from a reference text. Words are stored uppercase to
/// match the pronunciation dictionary.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    counts: HashMap<String, usize>,
}

impl Lexicon {
    pub fn from_text(text: &str) -> Self {
        let mut counts = HashMap::new();
        for token in text.split_whitespace() {
            let word = Lexicon::normalize(token);
            if word.is_empty() {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
        debug!(distinct = counts.len(), "built lexicon");
        Self { counts }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HaikuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Lexicon::from_text(&text))
    }

    /// Uppercase, then trim ASCII punctuation and curly single quotes from both ends.
    pub fn normalize(token: &str) -> String {
        token
            .to_uppercase()
            .trim_matches(|c: char| c.is_ascii_punctuation() || CURLY_QUOTES.contains(&c))
            .to_string()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }
}
