use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedPhrase {
    pub phrase: String,
    pub count: usize,
}

/// Adjacent word pairs that occur more than once in `text`.
///
/// Occurrences are counted as non-overlapping substring matches against the
/// original text, so a pair also matches across a line break only if the
/// text contains it with a single space.
pub fn repeated_phrases(text: &str) -> Vec<RepeatedPhrase> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut found: Vec<RepeatedPhrase> = Vec::new();

    for pair in words.windows(2) {
        let phrase = format!("{} {}", pair[0], pair[1]);
        if found.iter().any(|p| p.phrase == phrase) {
            continue;
        }

        let count = text.matches(phrase.as_str()).count();
        if count > 1 {
            found.push(RepeatedPhrase { phrase, count });
        }
    }

    found
}
