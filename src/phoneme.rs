/// Stress level carried by a vowel code's trailing digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stress {
    Unstressed,
    Primary,
    Secondary,
}

impl Stress {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.chars().last()? {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }
}

// Vowels (and only vowels) end in a stress digit.
pub fn is_vowel(code: &str) -> bool {
    Stress::from_code(code).is_some()
}

pub fn syllable_count<S: AsRef<str>>(codes: &[S]) -> usize {
    codes.iter().filter(|c| is_vowel(c.as_ref())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_detection() {
        assert!(is_vowel("AH0"));
        assert!(is_vowel("EY1"));
        assert!(is_vowel("IH2"));
        assert!(!is_vowel("K"));
        assert!(!is_vowel("AH3"));
        assert!(!is_vowel(""));
    }

    #[test]
    fn test_stress_levels() {
        assert_eq!(Stress::from_code("UW1"), Some(Stress::Primary));
        assert_eq!(Stress::from_code("AE2"), Some(Stress::Secondary));
        assert_eq!(Stress::from_code("ER0"), Some(Stress::Unstressed));
        assert_eq!(Stress::from_code("NG"), None);
    }

    #[test]
    fn test_syllable_count() {
        // aluminium: AH0 L UW1 M IH0 N AH0 M
        let codes = ["AH0", "L", "UW1", "M", "IH0", "N", "AH0", "M"];
        assert_eq!(syllable_count(&codes), 4);

        let hmm: [&str; 2] = ["HH", "M"];
        assert_eq!(syllable_count(&hmm), 0);

        let empty: [String; 0] = [];
        assert_eq!(syllable_count(&empty), 0);
    }
}
