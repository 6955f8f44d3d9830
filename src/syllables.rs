use std::collections::HashMap;
use std::io::{self, Write};
use crate::error::{HaikuError, Result};
use crate::phoneme::syllable_count;
use crate::pronunciation::PronunciationDict;

/// Word to syllable count, plus a sorted word list so seeded sampling is
/// reproducible regardless of hash order.
#[derive(Debug, Clone, Default)]
pub struct SyllableMap {
    counts: HashMap<String, usize>,
    words: Vec<String>,
    min_syllables: Option<usize>,
}

impl SyllableMap {
    pub fn from_pronunciations(dict: &PronunciationDict) -> Self {
        let counts: HashMap<String, usize> = dict
            .iter()
            .map(|(word, phonemes)| (word.to_string(), syllable_count(phonemes)))
            .collect();
        let mut words: Vec<String> = counts.keys().cloned().collect();
        words.sort();
        let min_syllables = counts.values().copied().filter(|&n| n > 0).min();
        Self { counts, words, min_syllables }
    }

    /// Fewest syllables of any word that has at least one.
    pub fn min_syllables(&self) -> Option<usize> {
        self.min_syllables
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Sum of syllables for `words`, matched case-insensitively.
    pub fn count_words<S: AsRef<str>>(&self, words: &[S]) -> Result<usize> {
        words.iter().try_fold(0, |sum, w| {
            let key = w.as_ref().to_uppercase();
            self.get(&key)
                .map(|n| sum + n)
                .ok_or_else(|| HaikuError::UnknownWord(w.as_ref().to_string()))
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for word in &self.words {
            writeln!(out, "{} :\t {}", word, self.counts[word])?;
        }
        Ok(())
    }
}
