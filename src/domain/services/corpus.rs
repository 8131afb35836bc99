use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Splits on `\n`, dropping a trailing `\r` from each line.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

pub fn clean_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A sher: two misra. The second is missing for a trailing odd line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couplet {
    pub first: String,
    pub second: Option<String>,
}

impl Couplet {
    pub fn is_complete(&self) -> bool {
        self.second.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_lines: usize,
    pub total_words: usize,
    pub unique_words: usize,
    pub avg_line_length: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub lines: Vec<String>,
}

impl Corpus {
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: clean_lines(split_lines(content)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn couplets(&self) -> Vec<Couplet> {
        self.lines
            .chunks(2)
            .map(|pair| Couplet {
                first: pair[0].clone(),
                second: pair.get(1).cloned(),
            })
            .collect()
    }

    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }

    pub fn stats(&self) -> CorpusStats {
        let words: Vec<&str> = self
            .lines
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect();
        let unique: HashSet<&str> = words.iter().copied().collect();

        let avg_line_length = if self.lines.is_empty() {
            0.0
        } else {
            let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
            chars as f64 / self.lines.len() as f64
        };

        CorpusStats {
            total_lines: self.lines.len(),
            total_words: words.len(),
            unique_words: unique.len(),
            avg_line_length,
        }
    }
}
