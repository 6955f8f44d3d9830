//! CMU Pronouncing Dictionary loader.
//!
//! Each line holds a word followed by its phoneme codes:
//!
//! ```text
//! ;;; comment
//! STAR  S T AA1 R
//! ALUMINIUM  AH0 L UW1 M IH0 N AH0 M
//! ALUMINIUM(2)  AE2 L Y UW1 M IH0 N AH0 M
//! ```
//!
//! Only the first pronunciation of a word is kept; numbered variants are skipped.
//! Trailing `# ...` annotations (cmusphinx style) are dropped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use regex::Regex;
use tracing::debug;
use crate::error::{HaikuError, Result};
use crate::lexicon::Lexicon;

static VARIANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+\(\d+\)$").expect("variant pattern is valid"));

const COMMENT_PREFIX: &str = ";;;";

#[derive(Debug, Clone, Default)]
pub struct PronunciationDict {
    entries: HashMap<String, Vec<String>>,
}

impl PronunciationDict {
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        let mut variants = 0usize;

        for (idx, line) in text.lines().enumerate() {
            let content = line.split_once('#').map_or(line, |(before, _)| before);
            let trimmed = content.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let Some(word) = fields.next() else { continue };
            let phonemes: Vec<String> = fields.map(str::to_string).collect();
            if phonemes.is_empty() {
                return Err(HaikuError::MalformedEntry {
                    line: idx + 1,
                    content: line.to_string(),
                });
            }

            if VARIANT_RE.is_match(word) {
                variants += 1;
                continue;
            }
            entries.insert(word.to_string(), phonemes);
        }

        debug!(words = entries.len(), skipped_variants = variants, "parsed pronunciation dictionary");
        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HaikuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        PronunciationDict::parse(&text)
    }

    /// Drop every word that never appears in `lexicon`.
    pub fn filter(&mut self, lexicon: &Lexicon) {
        let before = self.entries.len();
        self.entries.retain(|word, _| lexicon.contains(word));
        debug!(before, after = self.entries.len(), "filtered pronunciation dictionary");
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(w, p)| (w.as_str(), p.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = ";;; sample
STAR  S T AA1 R
SEA  S IY1

ALUMINIUM  AH0 L UW1 M IH0 N AH0 M
ALUMINIUM(2)  AE2 L Y UW1 M IH0 N AH0 M
";

    #[test]
    fn test_parse() {
        let dict = PronunciationDict::parse(SAMPLE).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get("STAR").unwrap(), ["S", "T", "AA1", "R"]);
        assert_eq!(dict.get("ALUMINIUM").unwrap()[0], "AH0");
        assert!(!dict.contains("ALUMINIUM(2)"));
    }

    #[test]
    fn test_malformed_line() {
        let err = PronunciationDict::parse("STAR  S T AA1 R\nLONELY\n").unwrap_err();
        match err {
            HaikuError::MalformedEntry { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "LONELY");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_filter() {
        let mut dict = PronunciationDict::parse(SAMPLE).unwrap();
        let lex = Lexicon::from_text("the star over the sea");
        dict.filter(&lex);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("STAR"));
        assert!(dict.contains("SEA"));
        assert!(!dict.contains("ALUMINIUM"));
    }

    #[test]
    fn test_trailing_annotation_stripped() {
        let dict = PronunciationDict::parse("achill  AE1 K IH0 L # place, irish\n# note\n").unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("achill").unwrap(), ["AE1", "K", "IH0", "L"]);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let dict = PronunciationDict::parse("READ  R IY1 D\nREAD  R EH1 D\n").unwrap();
        assert_eq!(dict.get("READ").unwrap(), ["R", "EH1", "D"]);
    }
}
