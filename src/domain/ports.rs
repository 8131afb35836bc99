use crate::domain::model::{AnalysisOptions, AnalysisResult, CorpusSource, OutputFormat, RawCorpus};
use crate::domain::services::unicode::TextEncoding;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> Result<CorpusSource>;
    fn encoding(&self) -> TextEncoding;
    fn strict_encoding(&self) -> bool;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> Vec<OutputFormat>;
    /// ZIP bundle name, when archiving is enabled.
    fn archive_name(&self) -> Option<String>;
    fn analysis_options(&self) -> AnalysisOptions;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn ingest(&self) -> Result<RawCorpus>;
    async fn analyze(&self, raw: RawCorpus) -> Result<AnalysisResult>;
    async fn publish(&self, result: AnalysisResult) -> Result<String>;
}
