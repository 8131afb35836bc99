use crate::adapters::http::CorpusFetcher;
use crate::app::report::{frequencies_csv, render_analysis_report};
use crate::domain::model::{AnalysisResult, CorpusSource, OutputFormat, RawCorpus};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::domain::services::corpus::Corpus;
use crate::domain::services::frequency::FrequencyAnalysis;
use crate::domain::services::repetition::repeated_phrases;
use crate::domain::services::themes::ThemeLexicon;
use crate::domain::services::tokenizer::{TokenKind, TokenizeMode, Tokenizer};
use crate::domain::services::unicode::UnicodeVerifier;
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const CORPUS_FILE: &str = "processed_corpus.txt";
pub const REPORT_FILE: &str = "analysis_report.txt";
pub const FREQUENCIES_FILE: &str = "frequencies.csv";
pub const ANALYSIS_FILE: &str = "analysis.json";

pub struct CorpusPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    verifier: UnicodeVerifier,
}

impl<S: Storage, C: ConfigProvider> CorpusPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            verifier: UnicodeVerifier::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn read_source(&self, source: &CorpusSource) -> Result<Vec<u8>> {
        match source {
            CorpusSource::File(path) => {
                tracing::debug!("Reading corpus file: {}", path.display());
                Ok(tokio::fs::read(path).await?)
            }
            CorpusSource::Http(url) => CorpusFetcher::new()?.fetch(url).await,
        }
    }

    fn bundle(files: &[(&str, Vec<u8>)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        for (name, data) in files {
            zip.start_file::<_, ()>(*name, FileOptions::default())?;
            zip.write_all(data)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CorpusPipeline<S, C> {
    async fn ingest(&self) -> Result<RawCorpus> {
        let source = self.config.source()?;
        let bytes = self.read_source(&source).await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), source);

        let encoding = self.config.encoding();
        let decoded = encoding.decode_checked(&bytes, self.config.strict_encoding())?;
        let content = decoded.text;

        let mut verification = self.verifier.verify(&content);
        verification.length_bytes = bytes.len();
        verification.encoding = encoding.label().to_string();
        if decoded.replaced {
            tracing::warn!("Corpus contained malformed {} sequences, replaced with U+FFFD", encoding);
            verification.valid = false;
            verification.encoding_status = format!("✗ Invalid {} encoding (replaced)", encoding);
        } else {
            verification.encoding_status = format!("✓ Valid {}", encoding);
        }
        verification.text.clear();

        Ok(RawCorpus {
            origin: source.to_string(),
            content,
            verification,
        })
    }

    async fn analyze(&self, raw: RawCorpus) -> Result<AnalysisResult> {
        let options = self.config.analysis_options();
        let tokenizer = Tokenizer::new(&options.punctuation)?;
        let lexicon = ThemeLexicon::with_overrides(&options.lexicon);

        let corpus = Corpus::from_content(&raw.content);
        if corpus.is_empty() {
            tracing::warn!("Corpus from {} has no non-empty lines", raw.origin);
        }
        let couplets = corpus.couplets();
        let stats = corpus.stats();

        let joined = corpus.lines.join(" ");
        let tokens = tokenizer.tokenize(&joined, TokenizeMode::KeepPunctuation);
        let punctuation_count = tokens
            .iter()
            .filter(|t| tokenizer.classify(t) == TokenKind::Punctuation)
            .count();

        let frequency = FrequencyAnalysis::from_tokens(tokenizer.words(&tokens));
        let most_common = frequency.most_common(options.top_n);
        let significant_words = lexicon.interpret(&frequency.frequencies);

        let repeated = if options.detect_repetition {
            repeated_phrases(&joined)
        } else {
            Vec::new()
        };

        tracing::debug!(
            "Analyzed {} lines, {} tokens, {} repeated phrases",
            stats.total_lines,
            tokens.len(),
            repeated.len()
        );

        Ok(AnalysisResult {
            origin: raw.origin,
            generated_at: chrono::Utc::now(),
            verification: raw.verification,
            corpus,
            couplets,
            stats,
            token_count: tokens.len(),
            punctuation_count,
            frequency,
            most_common,
            significant_words,
            repeated_phrases: repeated,
        })
    }

    async fn publish(&self, result: AnalysisResult) -> Result<String> {
        let formats = self.config.output_formats();
        let mut files: Vec<(&str, Vec<u8>)> = Vec::new();

        for format in &formats {
            match format {
                OutputFormat::Txt => {
                    files.push((CORPUS_FILE, result.corpus.joined().into_bytes()));
                    files.push((REPORT_FILE, render_analysis_report(&result).into_bytes()));
                }
                OutputFormat::Csv => {
                    files.push((FREQUENCIES_FILE, frequencies_csv(&result.frequency)?.into_bytes()));
                }
                OutputFormat::Json => {
                    files.push((ANALYSIS_FILE, serde_json::to_vec_pretty(&result)?));
                }
            }
        }

        for (name, data) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(name, data).await?;
        }

        if let Some(archive) = self.config.archive_name() {
            let zip_data = Self::bundle(&files)?;
            tracing::debug!("Writing archive {} ({} bytes)", archive, zip_data.len());
            self.storage.write_file(&archive, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), archive));
        }

        Ok(self.config.output_path().to_string())
    }
}
