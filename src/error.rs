use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HaikuError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dictionary entry on line {line}: {content:?}")]
    MalformedEntry { line: usize, content: String },

    #[error("word {0:?} has no syllable count")]
    UnknownWord(String),

    #[error("line target must be at least one syllable")]
    InvalidTarget,

    #[error("no words left after filtering the dictionary")]
    EmptyVocabulary,

    #[error("no word fits within {target} syllables")]
    UnreachableTarget { target: usize },

    #[error("gave up on a {target}-syllable line after {draws} draws")]
    DrawsExhausted { target: usize, draws: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HaikuError>;
