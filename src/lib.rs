pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::corpus_pipeline::CorpusPipeline;
pub use core::engine::CorpusEngine;
pub use domain::model::{AnalysisOptions, AnalysisResult, CorpusSource, OutputFormat};
pub use domain::services::tokenizer::{TokenizeMode, Tokenizer};
pub use domain::services::unicode::{TextEncoding, UnicodeVerifier};
pub use utils::error::{PhilologyError, Result};
