use crate::domain::model::{AnalysisOptions, CorpusSource, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::domain::services::tokenizer::DEFAULT_PUNCTUATION;
use crate::domain::services::unicode::TextEncoding;
use crate::utils::error::{PhilologyError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const DEFAULT_ARCHIVE_NAME: &str = "corpus_bundle.zip";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub tokenize: Option<TokenizeConfig>,
    pub analysis: Option<AnalysisConfig>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `file` or `http`
    pub r#type: String,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub encoding: Option<TextEncoding>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeConfig {
    pub punctuation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub top_n: Option<usize>,
    pub detect_repetition: Option<bool>,
    pub lexicon: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Option<Vec<OutputFormat>>,
    pub archive: Option<ArchiveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PhilologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PhilologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CORPUS_DIR})，未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| PhilologyError::processing(format!("Invalid env pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        match self.source()? {
            CorpusSource::File(path) => {
                validation::validate_path("source.path", &path.to_string_lossy())?
            }
            CorpusSource::Http(url) => validation::validate_url("source.endpoint", &url)?,
        }

        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_positive_number("analysis.top_n", self.top_n(), 1)?;
        validation::validate_non_empty_string("tokenize.punctuation", &self.punctuation())?;

        let formats = self.output_formats();
        if formats.is_empty() {
            return Err(PhilologyError::MissingConfigError {
                field: "load.output_formats".to_string(),
            });
        }
        validation::validate_unique("load.output_formats", &formats)?;

        if let Some(name) = self.archive_name() {
            validation::validate_archive_name("load.archive.filename", &name)?;
        }

        Ok(())
    }

    pub fn top_n(&self) -> usize {
        self.analysis.as_ref().and_then(|a| a.top_n).unwrap_or(5)
    }

    pub fn punctuation(&self) -> String {
        self.tokenize
            .as_ref()
            .and_then(|t| t.punctuation.clone())
            .unwrap_or_else(|| DEFAULT_PUNCTUATION.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }

    /// 乾跑摘要：只描述將要處理的內容，不讀取語料也不寫入輸出
    pub fn dry_run_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "🔍 Dry Run Analysis:");
        let _ = writeln!(out);
        let _ = writeln!(out, "📡 Corpus Source:");
        match self.source() {
            Ok(CorpusSource::File(path)) => {
                let _ = writeln!(out, "  File: {}", path.display());
                if !path.exists() {
                    let _ = writeln!(out, "  ⚠️ File does not exist yet");
                }
            }
            Ok(CorpusSource::Http(url)) => {
                let _ = writeln!(out, "  URL: {}", url);
            }
            Err(e) => {
                let _ = writeln!(out, "  ❌ {}", e);
            }
        }
        let _ = writeln!(
            out,
            "  Decoding: {} ({})",
            self.encoding(),
            if self.strict_encoding() { "strict" } else { "lossy" }
        );

        let options = self.analysis_options();
        let _ = writeln!(out);
        let _ = writeln!(out, "⚙️ Analysis:");
        let _ = writeln!(out, "  Punctuation: {}", options.punctuation);
        let _ = writeln!(out, "  Top words: {}", options.top_n);
        let _ = writeln!(
            out,
            "  Repeated phrase detection: {}",
            if options.detect_repetition { "on" } else { "off" }
        );
        if !options.lexicon.is_empty() {
            let _ = writeln!(out, "  Extra lexicon entries: {}", options.lexicon.len());
        }

        let formats: Vec<String> = self.output_formats().iter().map(|f| f.to_string()).collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "💾 Output Configuration:");
        let _ = writeln!(out, "  Path: {}", self.output_path());
        let _ = writeln!(out, "  Formats: {}", formats.join(", "));
        if let Some(archive) = self.archive_name() {
            let _ = writeln!(out, "  Archive: {} (ZIP)", archive);
        }
        out
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> Result<CorpusSource> {
        match self.source.r#type.as_str() {
            "file" => {
                let path = validation::validate_required_field("source.path", &self.source.path)?;
                Ok(CorpusSource::File(PathBuf::from(path)))
            }
            "http" => {
                let endpoint =
                    validation::validate_required_field("source.endpoint", &self.source.endpoint)?;
                Ok(CorpusSource::Http(endpoint.clone()))
            }
            other => Err(PhilologyError::InvalidConfigValueError {
                field: "source.type".to_string(),
                value: other.to_string(),
                reason: "Supported source types: file, http".to_string(),
            }),
        }
    }

    fn encoding(&self) -> TextEncoding {
        self.source.encoding.unwrap_or_default()
    }

    fn strict_encoding(&self) -> bool {
        self.source.strict.unwrap_or(true)
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.load
            .output_formats
            .clone()
            .unwrap_or_else(OutputFormat::all)
    }

    fn archive_name(&self) -> Option<String> {
        self.load
            .archive
            .as_ref()
            .filter(|a| a.enabled)
            .map(|a| {
                a.filename
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ARCHIVE_NAME.to_string())
            })
    }

    fn analysis_options(&self) -> AnalysisOptions {
        let analysis = self.analysis.as_ref();
        AnalysisOptions {
            punctuation: self.punctuation(),
            top_n: self.top_n(),
            detect_repetition: analysis.and_then(|a| a.detect_repetition).unwrap_or(true),
            lexicon: analysis
                .and_then(|a| a.lexicon.clone())
                .unwrap_or_default(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[pipeline]
name = "ghalib-diwan"
description = "Ghalib ghazals"
version = "1.0.0"

[source]
type = "file"
path = "data/sample_ghazal.txt"
encoding = "utf-8-sig"

[analysis]
top_n = 10
detect_repetition = false

[analysis.lexicon]
"شمع" = "Candle - the lover's vigil"

[load]
output_path = "./test-output"
output_formats = ["txt", "json"]

[load.archive]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "ghalib-diwan");
        assert_eq!(
            config.source().unwrap(),
            CorpusSource::File(PathBuf::from("data/sample_ghazal.txt"))
        );
        assert_eq!(config.encoding(), TextEncoding::Utf8Sig);
        assert!(config.strict_encoding());
        assert_eq!(config.output_formats(), vec![OutputFormat::Txt, OutputFormat::Json]);
        assert_eq!(config.archive_name().as_deref(), Some("corpus_bundle.zip"));

        let options = config.analysis_options();
        assert_eq!(options.top_n, 10);
        assert!(!options.detect_repetition);
        assert_eq!(options.punctuation, DEFAULT_PUNCTUATION);
        assert!(options.lexicon.contains_key("شمع"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("URDU_TEST_CORPUS_URL", "https://archive.example.org/ghazal.txt");

        let toml_content = r#"
[pipeline]
name = "remote"
version = "1.0"

[source]
type = "http"
endpoint = "${URDU_TEST_CORPUS_URL}"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source().unwrap(),
            CorpusSource::Http("https://archive.example.org/ghazal.txt".to_string())
        );
        assert_eq!(config.output_formats(), OutputFormat::all());

        std::env::remove_var("URDU_TEST_CORPUS_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[pipeline]
name = "test"
version = "1.0"

[source]
type = "http"
endpoint = "invalid-url"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_path_and_unknown_type() {
        let missing_path = r#"
[pipeline]
name = "test"
version = "1.0"

[source]
type = "file"

[load]
output_path = "./output"
"#;
        let config = TomlConfig::from_toml_str(missing_path).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PhilologyError::MissingConfigError { .. })
        ));

        let unknown = missing_path.replace("type = \"file\"", "type = \"s3\"");
        let config = TomlConfig::from_toml_str(&unknown).unwrap();
        assert!(matches!(
            config.source(),
            Err(PhilologyError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_unknown_output_format_fails_to_parse() {
        let toml_content = r#"
[pipeline]
name = "test"
version = "1.0"

[source]
type = "file"
path = "a.txt"

[load]
output_path = "./output"
output_formats = ["xlsx"]
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(PhilologyError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_unsupported_encoding_fails_to_parse() {
        let toml_content = r#"
[pipeline]
name = "test"
version = "1.0"

[source]
type = "file"
path = "a.txt"
encoding = "cp1256"

[load]
output_path = "./output"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        match err {
            PhilologyError::ConfigValidationError { field, message } => {
                assert_eq!(field, "toml_parsing");
                assert!(message.contains("cp1256"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_dry_run_summary_touches_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let corpus = dir.path().join("missing_ghazal.txt");
        let output = dir.path().join("never-created");

        let toml_content = format!(
            r#"
[pipeline]
name = "dry"
version = "1.0"

[source]
type = "file"
path = "{}"
encoding = "utf-16"
strict = false

[analysis]
top_n = 3

[load]
output_path = "{}"
output_formats = ["csv"]

[load.archive]
enabled = true
filename = "dry.zip"
"#,
            corpus.to_str().unwrap().replace('\\', "/"),
            output.to_str().unwrap().replace('\\', "/")
        );

        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        let summary = config.dry_run_summary();

        assert!(summary.contains("missing_ghazal.txt"));
        assert!(summary.contains("⚠️ File does not exist yet"));
        assert!(summary.contains("Decoding: UTF-16 (lossy)"));
        assert!(summary.contains("Top words: 3"));
        assert!(summary.contains("Formats: csv"));
        assert!(summary.contains("Archive: dry.zip (ZIP)"));
        assert!(!output.exists());
        assert!(!corpus.exists());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"
version = "1.0"

[source]
type = "file"
path = "ghazal.txt"

[load]
output_path = "./output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
        assert!(!config.monitoring_enabled());
    }
}
