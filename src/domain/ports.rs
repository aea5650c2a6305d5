use crate::domain::model::{
    ConvertedFile, DelimitedRecord, PrintConfiguration, StoredObject, TransformResult,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Narrow object-storage capability used by the conversion driver.
pub trait ObjectStorage: Send + Sync {
    fn fetch(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    fn store(
        &self,
        bucket: &str,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<StoredObject>> + Send;

    /// `Ok(false)` for a missing object; any other fault is an error.
    fn exists(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_bucket(&self) -> &str;
    fn output_bucket(&self) -> &str;
    fn print_config(&self) -> &PrintConfiguration;

    fn monitoring_enabled(&self) -> bool {
        false
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<DelimitedRecord>>;
    async fn transform(&self, records: Vec<DelimitedRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<ConvertedFile>;
}
