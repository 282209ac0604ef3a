use crate::domain::model::{CustomParams, Extracted, Record, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn inputs_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn params_file(&self) -> &str;
}

/// The customization point. Implement this to replace the packaged
/// threshold filter with your own algorithm logic; the surrounding
/// pipeline (params, input discovery, parsing, output) stays as-is.
pub trait Algorithm: Send + Sync {
    fn apply(&self, data: &Value, params: &CustomParams) -> Result<Vec<Record>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Extracted>;
    async fn transform(&self, extracted: Extracted) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
