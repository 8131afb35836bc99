use crate::domain::services::corpus::{Corpus, CorpusStats, Couplet};
use crate::domain::services::frequency::{FrequencyAnalysis, WordCount};
use crate::domain::services::repetition::RepeatedPhrase;
use crate::domain::services::themes::SignificantWord;
use crate::domain::services::tokenizer::DEFAULT_PUNCTUATION;
use crate::domain::services::unicode::VerificationReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    File(PathBuf),
    Http(String),
}

impl std::fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusSource::File(path) => write!(f, "{}", path.display()),
            CorpusSource::Http(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Cleaned corpus and the text report
    Txt,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn all() -> Vec<OutputFormat> {
        vec![OutputFormat::Txt, OutputFormat::Csv, OutputFormat::Json]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Txt => f.write_str("txt"),
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub punctuation: String,
    pub top_n: usize,
    pub detect_repetition: bool,
    pub lexicon: HashMap<String, String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            top_n: 5,
            detect_repetition: true,
            lexicon: HashMap::new(),
        }
    }
}

/// Decoded corpus text as it came from the source.
#[derive(Debug, Clone)]
pub struct RawCorpus {
    pub origin: String,
    pub content: String,
    pub verification: VerificationReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub origin: String,
    pub generated_at: DateTime<Utc>,
    pub verification: VerificationReport,
    pub corpus: Corpus,
    pub couplets: Vec<Couplet>,
    pub stats: CorpusStats,
    pub token_count: usize,
    pub punctuation_count: usize,
    pub frequency: FrequencyAnalysis,
    pub most_common: Vec<WordCount>,
    pub significant_words: Vec<SignificantWord>,
    pub repeated_phrases: Vec<RepeatedPhrase>,
}
