use std::fmt;
use rand::Rng;
use tracing::trace;
use crate::error::{HaikuError, Result};
use crate::syllables::SyllableMap;

pub const DEFAULT_MAX_DRAWS: usize = 1_000_000;

/// One assembled line of verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub words: Vec<String>,
    pub syllables: usize,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            let lower = word.to_lowercase();
            if i == 0 {
                f.write_str(&capitalize(&lower))?;
            } else {
                write!(f, " {}", lower)?;
            }
        }
        Ok(())
    }
}

/// Draw random words until their syllables add up to exactly `target`.
///
/// A draw that repeats a word already on the line is ignored; a draw that
/// overshoots the target is taken back. Fails after `max_draws` draws.
pub fn random_line<R: Rng>(
    map: &SyllableMap,
    target: usize,
    max_draws: usize,
    rng: &mut R,
) -> Result<Line> {
    if target == 0 {
        return Err(HaikuError::InvalidTarget);
    }
    if map.is_empty() {
        return Err(HaikuError::EmptyVocabulary);
    }
    if !map.min_syllables().is_some_and(|n| n <= target) {
        return Err(HaikuError::UnreachableTarget { target });
    }

    let pool = map.words();
    let mut words: Vec<String> = Vec::new();
    let mut total = 0usize;
    let mut draws = 0usize;

    while total < target {
        if draws >= max_draws {
            return Err(HaikuError::DrawsExhausted { target, draws });
        }
        draws += 1;

        let word = &pool[rng.random_range(0..pool.len())];
        if words.contains(word) {
            continue;
        }
        let syllables = map.get(word).unwrap_or(0);
        if total + syllables > target {
            trace!(%word, syllables, total, target, "overshot, retrying");
            continue;
        }
        words.push(word.clone());
        total += syllables;
    }

    Ok(Line { words, syllables: total })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronunciation::PronunciationDict;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn map(text: &str) -> SyllableMap {
        SyllableMap::from_pronunciations(&PronunciationDict::parse(text).unwrap())
    }

    // Enough monosyllables that no partial line can strand itself.
    const WORDS: &str = "STAR  S T AA1 R
SEA  S IY1
MOON  M UW1 N
SUN  S AH1 N
TREE  T R IY1
LIGHT  L AY1 T
FIRE  F AY1 R
STONE  S T OW1 N
WIND  W IH1 N D
SILVER  S IH1 L V ER0
WANDERING  W AA1 N D ER0 IH0 NG
ELBERETH  EH1 L B ER0 EH2 TH
TWILIGHT  T W AY1 L AY2 T
";

    #[test]
    fn test_lines_hit_target() {
        let map = map(WORDS);
        let mut rng = StdRng::seed_from_u64(7);
        for target in [1, 3, 5, 7] {
            for _ in 0..50 {
                let line = random_line(&map, target, DEFAULT_MAX_DRAWS, &mut rng).unwrap();
                assert_eq!(line.syllables, target);
                assert_eq!(map.count_words(&line.words).unwrap(), target);
            }
        }
    }

    #[test]
    fn test_no_repeated_words() {
        let map = map(WORDS);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let line = random_line(&map, 7, DEFAULT_MAX_DRAWS, &mut rng).unwrap();
            let mut seen = line.words.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), line.words.len());
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let map = map(WORDS);
        let a = random_line(&map, 5, DEFAULT_MAX_DRAWS, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random_line(&map, 5, DEFAULT_MAX_DRAWS, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_formatting() {
        let line = Line {
            words: vec!["SILVER".into(), "STAR".into(), "SEA".into()],
            syllables: 4,
        };
        assert_eq!(line.to_string(), "Silver star sea");
    }

    #[test]
    fn test_zero_target() {
        let map = map(WORDS);
        let err = random_line(&map, 0, 10, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, HaikuError::InvalidTarget));
    }

    #[test]
    fn test_empty_vocabulary() {
        let err = random_line(&SyllableMap::default(), 5, 10, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, HaikuError::EmptyVocabulary));
    }

    #[test]
    fn test_unreachable_target() {
        let map = map("WANDERING  W AA1 N D ER0 IH0 NG\nHMM  HH M\n");
        let err = random_line(&map, 2, 10, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, HaikuError::UnreachableTarget { target: 2 }));
    }

    #[test]
    fn test_draws_exhausted() {
        // Only one two-syllable word: 4 syllables can never be reached without repeats.
        let map = map("SILVER  S IH1 L V ER0\n");
        let err = random_line(&map, 4, 100, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, HaikuError::DrawsExhausted { target: 4, draws: 100 }));
    }
}
