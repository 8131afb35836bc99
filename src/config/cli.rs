use crate::domain::model::{AnalysisOptions, CorpusSource, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::domain::services::tokenizer::DEFAULT_PUNCTUATION;
use crate::domain::services::unicode::TextEncoding;
use crate::utils::error::{PhilologyError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "urdu-philology")]
#[command(about = "Clean, verify and analyze a classical Urdu poetry corpus")]
pub struct CliConfig {
    /// Corpus file to read
    #[arg(long, conflicts_with = "url", required_unless_present = "url")]
    pub input: Option<PathBuf>,

    /// Corpus URL to fetch instead of a local file
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, default_value = "utf-8")]
    pub encoding: TextEncoding,

    #[arg(long, value_enum, value_delimiter = ',', default_values_t = OutputFormat::all())]
    pub formats: Vec<OutputFormat>,

    #[arg(long, default_value = "5", help = "Number of most frequent words to report")]
    pub top_n: usize,

    #[arg(long, default_value = DEFAULT_PUNCTUATION, help = "Characters treated as punctuation")]
    pub punctuation: String,

    #[arg(long, help = "Skip repeated phrase detection")]
    pub no_repetition: bool,

    #[arg(long, help = "Also bundle all outputs into a ZIP archive")]
    pub archive: bool,

    #[arg(long, default_value = "corpus_bundle.zip")]
    pub archive_name: String,

    #[arg(long, help = "Replace malformed input instead of failing")]
    pub lossy: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn source(&self) -> Result<CorpusSource> {
        match (&self.input, &self.url) {
            (Some(path), _) => Ok(CorpusSource::File(path.clone())),
            (None, Some(url)) => Ok(CorpusSource::Http(url.clone())),
            (None, None) => Err(PhilologyError::MissingConfigError {
                field: "input".to_string(),
            }),
        }
    }

    fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    fn strict_encoding(&self) -> bool {
        !self.lossy
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.formats.clone()
    }

    fn archive_name(&self) -> Option<String> {
        self.archive.then(|| self.archive_name.clone())
    }

    fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            punctuation: self.punctuation.clone(),
            top_n: self.top_n,
            detect_repetition: !self.no_repetition,
            lexicon: HashMap::new(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.source()? {
            CorpusSource::File(path) => {
                validation::validate_path("input", &path.to_string_lossy())?
            }
            CorpusSource::Http(url) => validation::validate_url("url", &url)?,
        }

        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("top_n", self.top_n, 1)?;
        validation::validate_non_empty_string("punctuation", &self.punctuation)?;

        if self.formats.is_empty() {
            return Err(PhilologyError::MissingConfigError {
                field: "formats".to_string(),
            });
        }
        validation::validate_unique("formats", &self.formats)?;

        if self.archive {
            validation::validate_archive_name("archive_name", &self.archive_name)?;
        }

        Ok(())
    }
}
