//! Rule-based thematic reading of word frequencies.
//!
//! A lexicon maps recurring words of the ghazal tradition to a short gloss of
//! what they signal. Interpretation is a lookup, no statistics involved.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const BUILTIN_LEXICON: &[(&str, &str)] = &[
    ("ہے", "Existential themes, being/identity - central to Urdu poetic discourse"),
    ("غم", "Sorrow, melancholy - foundational in Ghalib's poetic universe"),
    ("دل", "Heart, emotion - core of romantic and spiritual expression"),
    ("عشق", "Love, passion - primary theme in Urdu ghazal tradition"),
    ("خدا", "Divine, God - spiritual and metaphysical dimensions"),
    ("زندگی", "Life, existence - philosophical contemplation"),
    ("موت", "Death, mortality - recurring memento mori theme"),
    ("آشنا", "Beloved, familiar - central to love poetry"),
    ("سجدہ", "Prostration, prayer - spiritual devotion"),
    ("جام", "Wine cup - symbol of intoxication (literal and spiritual)"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignificantWord {
    pub word: String,
    pub count: usize,
    pub interpretation: String,
}

#[derive(Debug, Clone)]
pub struct ThemeLexicon {
    entries: HashMap<String, String>,
}

impl Default for ThemeLexicon {
    fn default() -> Self {
        Self {
            entries: BUILTIN_LEXICON
                .iter()
                .map(|(word, gloss)| (word.to_string(), gloss.to_string()))
                .collect(),
        }
    }
}

impl ThemeLexicon {
    /// Built-in entries, then `overrides` on top (same word replaces the gloss).
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut lexicon = Self::default();
        for (word, gloss) in overrides {
            lexicon.entries.insert(word.trim().to_string(), gloss.clone());
        }
        lexicon
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn gloss(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn interpret(&self, frequencies: &IndexMap<String, usize>) -> Vec<SignificantWord> {
        frequencies
            .iter()
            .filter_map(|(word, count)| {
                self.gloss(word).map(|gloss| SignificantWord {
                    word: word.clone(),
                    count: *count,
                    interpretation: gloss.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::frequency::FrequencyAnalysis;

    #[test]
    fn test_interpret_keeps_frequency_order() {
        let analysis = FrequencyAnalysis::from_tokens(
            "غم ہے یا مسیحا کا نشہ ہے کوئی بات ہے".split_whitespace(),
        );
        let significant = ThemeLexicon::default().interpret(&analysis.frequencies);

        assert_eq!(significant.len(), 2);
        assert_eq!(significant[0].word, "غم");
        assert_eq!(significant[0].count, 1);
        assert_eq!(significant[1].word, "ہے");
        assert_eq!(significant[1].count, 3);
        assert!(significant[1].interpretation.starts_with("Existential"));
    }

    #[test]
    fn test_overrides_extend_and_replace() {
        let mut overrides = HashMap::new();
        overrides.insert("شمع".to_string(), "Candle - the lover's self-consuming vigil".to_string());
        overrides.insert("دل".to_string(), "Heart".to_string());

        let lexicon = ThemeLexicon::with_overrides(&overrides);
        assert_eq!(lexicon.len(), 11);
        assert_eq!(lexicon.gloss("دل"), Some("Heart"));
        assert!(lexicon.gloss("شمع").is_some());
    }
}
