use std::path::Path;
use urdu_philology::core::ConfigProvider;
use urdu_philology::domain::services::corpus::Corpus;
use urdu_philology::utils::validation::Validate;
use urdu_philology::{CorpusSource, OutputFormat, TextEncoding, TomlConfig};

fn manifest_path(relative: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn test_shipped_config_is_valid() {
    let config = TomlConfig::from_file(manifest_path("corpus.toml")).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(
        config.source().unwrap(),
        CorpusSource::File("data/sample_ghazal.txt".into())
    );
    assert_eq!(config.encoding(), TextEncoding::Utf8);
    assert_eq!(config.output_formats(), OutputFormat::all());
    assert_eq!(config.archive_name().as_deref(), Some("corpus_bundle.zip"));
    assert!(config.analysis_options().lexicon.contains_key("درد"));
}

#[test]
fn test_sample_ghazal_structure() {
    let content = std::fs::read_to_string(manifest_path("data/sample_ghazal.txt")).unwrap();
    let corpus = Corpus::from_content(&content);

    assert_eq!(corpus.lines.len(), 6);
    let couplets = corpus.couplets();
    assert_eq!(couplets.len(), 3);
    assert!(couplets.iter().all(|c| c.is_complete()));
}
