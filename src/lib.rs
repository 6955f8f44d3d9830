pub mod error;
pub mod phoneme;
pub mod pronunciation;
pub mod lexicon;
pub mod syllables;
pub mod line;
pub mod haiku;
pub mod config;

pub use config::HaikuConfig;
pub use error::{HaikuError, Result};
pub use haiku::{Haiku, HaikuGenerator};
pub use lexicon::Lexicon;
pub use line::{Line, random_line};
pub use pronunciation::PronunciationDict;
pub use syllables::SyllableMap;
