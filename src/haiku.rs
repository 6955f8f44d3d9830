use std::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};
use crate::config::HaikuConfig;
use crate::error::{HaikuError, Result};
use crate::lexicon::Lexicon;
use crate::line::{Line, random_line};
use crate::pronunciation::PronunciationDict;
use crate::syllables::SyllableMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haiku {
    pub lines: Vec<Line>,
}

impl fmt::Display for Haiku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub struct HaikuGenerator {
    pub syllables: SyllableMap,
    pattern: Vec<usize>,
    max_draws: usize,
    rng: StdRng,
}

impl HaikuGenerator {
    pub fn new(syllables: SyllableMap, config: &HaikuConfig) -> Result<Self> {
        config.validate()?;
        if syllables.is_empty() {
            return Err(HaikuError::EmptyVocabulary);
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            syllables,
            pattern: config.pattern.clone(),
            max_draws: config.max_draws,
            rng,
        })
    }

    /// Build from in-memory dictionary and reference text.
    pub fn from_sources(dict_text: &str, reference_text: &str, config: &HaikuConfig) -> Result<Self> {
        let dict = PronunciationDict::parse(dict_text)?;
        let lexicon = Lexicon::from_text(reference_text);
        HaikuGenerator::from_parts(dict, &lexicon, config)
    }

    /// Load both input files named by `config`.
    pub fn from_config(config: &HaikuConfig) -> Result<Self> {
        let dict = PronunciationDict::load(&config.pronunciation_path)?;
        let lexicon = Lexicon::load(&config.reference_path)?;
        HaikuGenerator::from_parts(dict, &lexicon, config)
    }

    fn from_parts(mut dict: PronunciationDict, lexicon: &Lexicon, config: &HaikuConfig) -> Result<Self> {
        dict.filter(lexicon);
        let missing = lexicon.iter().filter(|(w, _)| !dict.contains(w)).count();
        if missing > 0 {
            warn!(missing, "reference words without a pronunciation were ignored");
        }
        let syllables = SyllableMap::from_pronunciations(&dict);
        debug!(words = syllables.len(), "syllable map ready");
        HaikuGenerator::new(syllables, config)
    }

    pub fn generate(&mut self) -> Result<Haiku> {
        let mut lines = Vec::with_capacity(self.pattern.len());
        for &target in &self.pattern {
            lines.push(random_line(&self.syllables, target, self.max_draws, &mut self.rng)?);
        }
        Ok(Haiku { lines })
    }

    pub fn generate_many(&mut self, n: usize) -> Result<Vec<Haiku>> {
        (0..n).map(|_| self.generate()).collect()
    }
}
