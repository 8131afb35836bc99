pub mod engine;

pub use crate::domain::model::{AnalysisResult, RawCorpus};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
