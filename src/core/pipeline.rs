use crate::core::document::{render_document, PCL_CONTENT_TYPE};
use crate::core::paths::output_key;
use crate::core::reader::read_records;
use crate::core::{ObjectStorage, Pipeline};
use crate::domain::model::{
    ConvertedFile, DelimitedRecord, PrintConfiguration, SourceDescriptor, TransformResult,
};
use crate::utils::error::{PclError, Result};
use chrono::Utc;

/// Converts one delimited source object into one PCL artifact.
pub struct PclPipeline<S: ObjectStorage> {
    storage: S,
    source: SourceDescriptor,
    config: PrintConfiguration,
    output_bucket: String,
}

impl<S: ObjectStorage> PclPipeline<S> {
    pub fn new(
        storage: S,
        source: SourceDescriptor,
        config: PrintConfiguration,
        output_bucket: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            source,
            config,
            output_bucket: output_bucket.into(),
        }
    }

    pub fn source(&self) -> &SourceDescriptor {
        &self.source
    }
}

#[async_trait::async_trait]
impl<S: ObjectStorage> Pipeline for PclPipeline<S> {
    async fn extract(&self) -> Result<Vec<DelimitedRecord>> {
        let SourceDescriptor { bucket, key, .. } = &self.source;

        if !self.storage.exists(bucket, key).await? {
            return Err(PclError::SourceNotFound {
                bucket: bucket.clone(),
                key: key.clone(),
            });
        }

        let data = self.storage.fetch(bucket, key).await?;
        tracing::debug!("Fetched {} bytes from {}/{}", data.len(), bucket, key);

        read_records(&data, &self.source.file_name)
    }

    async fn transform(&self, records: Vec<DelimitedRecord>) -> Result<TransformResult> {
        if records.is_empty() {
            tracing::warn!("{} has no data rows", self.source.file_name);
        }

        let document = render_document(&records, &self.config, Utc::now());
        Ok(TransformResult {
            record_count: records.len(),
            document,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<ConvertedFile> {
        let key = output_key(&self.source.key, &self.source.file_name, Utc::now());
        let stored = self
            .storage
            .store(
                &self.output_bucket,
                &key,
                result.document.as_bytes(),
                PCL_CONTENT_TYPE,
            )
            .await?;

        Ok(ConvertedFile {
            file_name: self.source.file_name.clone(),
            output_bucket: stored.bucket,
            output_key: stored.key,
            location: stored.location,
            size_bytes: result.document.len(),
            page_count: result.record_count,
        })
    }
}
