use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{HaikuError, Result};
use crate::line::DEFAULT_MAX_DRAWS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HaikuConfig {
    pub pronunciation_path: PathBuf,
    pub reference_path: PathBuf,
    /// How many haiku to print.
    pub count: usize,
    /// Syllable target for each line, in order.
    pub pattern: Vec<usize>,
    pub seed: Option<u64>,
    pub max_draws: usize,
}

impl Default for HaikuConfig {
    fn default() -> Self {
        Self {
            pronunciation_path: PathBuf::from("pronunciation_dict.txt"),
            reference_path: PathBuf::from("silmarillion.txt"),
            count: 100,
            pattern: vec![5, 7, 5],
            seed: None,
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }
}

impl HaikuConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: HaikuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| HaikuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        HaikuConfig::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(HaikuError::InvalidConfig("pattern has no lines".into()));
        }
        if self.pattern.contains(&0) {
            return Err(HaikuError::InvalidConfig("pattern contains a zero-syllable line".into()));
        }
        if self.max_draws == 0 {
            return Err(HaikuError::InvalidConfig("max_draws must be positive".into()));
        }
        Ok(())
    }
}
