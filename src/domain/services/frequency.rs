use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word frequencies keyed in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyAnalysis {
    pub total_words: usize,
    pub unique_words: usize,
    pub type_token_ratio: f64,
    pub frequencies: IndexMap<String, usize>,
}

impl FrequencyAnalysis {
    pub fn from_tokens<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies: IndexMap<String, usize> = IndexMap::new();
        let mut total_words = 0;

        for word in words {
            total_words += 1;
            *frequencies.entry(word.as_ref().to_string()).or_insert(0) += 1;
        }

        let unique_words = frequencies.len();
        let type_token_ratio = if total_words > 0 {
            unique_words as f64 / total_words as f64
        } else {
            0.0
        };

        Self {
            total_words,
            unique_words,
            type_token_ratio,
            frequencies,
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Full distribution, highest count first; ties keep first-occurrence order.
    pub fn by_count_desc(&self) -> Vec<WordCount> {
        let mut counts: Vec<WordCount> = self
            .frequencies
            .iter()
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect();
        // sort_by is stable
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut counts = self.by_count_desc();
        counts.truncate(n);
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUPLET: &str = "غم ہے یا مسیحا کا نشہ ہے کوئی بات ہے غم ہے یا مسیحا کا نشہ ہے";

    #[test]
    fn test_frequencies_and_ttr() {
        let analysis = FrequencyAnalysis::from_tokens(COUPLET.split_whitespace());

        assert_eq!(analysis.total_words, 17);
        assert_eq!(analysis.unique_words, 8);
        assert_eq!(analysis.count("ہے"), 5);
        assert_eq!(analysis.count("غم"), 2);
        assert_eq!(analysis.count("کوئی"), 1);
        assert!((analysis.type_token_ratio - 8.0 / 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_most_common_breaks_ties_by_first_occurrence() {
        let analysis = FrequencyAnalysis::from_tokens(COUPLET.split_whitespace());
        let top = analysis.most_common(3);

        assert_eq!(top[0], WordCount { word: "ہے".to_string(), count: 5 });
        assert_eq!(top[1].word, "غم");
        assert_eq!(top[2].word, "یا");
    }

    #[test]
    fn test_most_common_larger_than_vocabulary() {
        let analysis = FrequencyAnalysis::from_tokens(["دل", "دل"]);
        assert_eq!(analysis.most_common(10).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let analysis = FrequencyAnalysis::from_tokens(Vec::<String>::new());
        assert_eq!(analysis.total_words, 0);
        assert_eq!(analysis.type_token_ratio, 0.0);
        assert!(analysis.most_common(5).is_empty());
    }
}
