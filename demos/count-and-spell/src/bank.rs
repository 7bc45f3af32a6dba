//! Word bank for the spelling puzzle.

use serde::Deserialize;

/// Simple words suitable for pre-schoolers. Hosts may swap in their own
/// list via [`WordBank::from_json`].
const BUILTIN: [&str; 5] = ["BALL", "CAT", "MOM", "DAD", "APPLE"];

#[derive(Debug, Clone, Deserialize)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Parse a `{"words": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in list.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Pick a word by index (caller provides the random index).
    pub fn pick(&self, index: usize) -> &str {
        &self.words[index % self.words.len()]
    }

    /// Number of words in the bank.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bank() {
        let bank = WordBank::from_json(r#"{"words": ["SUN", "MOON"]}"#).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.pick(1), "MOON");
    }

    #[test]
    fn pick_wraps_around() {
        let bank = WordBank::builtin();
        assert_eq!(bank.pick(0), bank.pick(bank.len()));
    }

    #[test]
    fn builtin_is_nonempty_uppercase() {
        let bank = WordBank::builtin();
        assert!(!bank.is_empty());
        for i in 0..bank.len() {
            let word = bank.pick(i);
            assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{}", word);
        }
    }
}
