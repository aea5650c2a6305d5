use crate::core::engine::ConversionEngine;
use crate::core::overrides::apply_overrides;
use crate::core::pipeline::PclPipeline;
use crate::core::{ConfigProvider, ObjectStorage};
use crate::domain::model::{
    BatchFile, BatchPayload, ConvertedFile, PrintConfiguration, SourceDescriptor,
};
use crate::utils::error::{PclError, Result, StatusTag};
use crate::utils::validation::{RequestErrors, Validate};
use serde::Serialize;

impl Validate for BatchPayload {
    fn validate(&self) -> Result<()> {
        let mut errors = RequestErrors::new();

        errors.check(self.batch_id > 0, "batchId must be a positive number");
        errors.require_text("clientId", self.client_id.as_deref());
        errors.require_text("profileId", self.profile_id.as_deref());
        errors.require_text("processingType", self.processing_type.as_deref());
        errors.check(!self.files.is_empty(), "files must contain at least one entry");

        for (index, file) in self.files.iter().enumerate() {
            errors.require_text(&format!("files[{}].fileName", index), Some(file.file_name.as_str()));
            errors.require_text(
                &format!("files[{}].storageKey", index),
                Some(file.storage_key.as_str()),
            );
        }

        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub batch_id: i64,
    pub status: StatusTag,
    pub message: String,
    pub files: Vec<ConvertedFile>,
}

/// Converts every file of a batch, one after the other.
///
/// The first failing file stops the batch; artifacts already stored for
/// earlier files are left in place.
pub struct BatchProcessor<S, C> {
    storage: S,
    config: C,
}

impl<S: ObjectStorage + Clone, C: ConfigProvider> BatchProcessor<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn process(&self, payload: &BatchPayload) -> Result<Vec<ConvertedFile>> {
        payload.validate()?;
        let print = apply_overrides(self.config.print_config(), &payload.overrides)?;

        tracing::info!(
            "🚀 Batch {} ({} files, envelope {}, format {})",
            payload.batch_id,
            payload.files.len(),
            print.envelope_type,
            print.paper_format
        );

        self.convert_files(&payload.files, &print).await
    }

    pub async fn convert_files(
        &self,
        files: &[BatchFile],
        print: &PrintConfiguration,
    ) -> Result<Vec<ConvertedFile>> {
        let mut converted = Vec::with_capacity(files.len());

        for file in files {
            tracing::info!("📄 Converting {}", file.file_name);
            let result = self
                .convert_file(file, print)
                .await
                .map_err(|e| PclError::FileFailed {
                    file_name: file.file_name.clone(),
                    source: Box::new(e),
                })?;
            converted.push(result);
        }

        Ok(converted)
    }

    async fn convert_file(&self, file: &BatchFile, print: &PrintConfiguration) -> Result<ConvertedFile> {
        let source = SourceDescriptor {
            file_name: file.file_name.clone(),
            bucket: file
                .bucket
                .clone()
                .unwrap_or_else(|| self.config.input_bucket().to_string()),
            key: file.storage_key.clone(),
        };

        let pipeline = PclPipeline::new(
            self.storage.clone(),
            source,
            print.clone(),
            self.config.output_bucket(),
        );
        let engine = ConversionEngine::new_with_monitoring(pipeline, self.config.monitoring_enabled());
        let converted = engine.run().await?;

        let declared = file.declared_page_count as usize;
        if declared > 0 && declared != converted.page_count {
            tracing::warn!(
                "⚠️ {} declared {} pages but produced {}",
                file.file_name,
                declared,
                converted.page_count
            );
        }

        Ok(converted)
    }

    /// Runs the batch and reports the outcome; never fails.
    pub async fn handle(&self, payload: &BatchPayload) -> BatchResponse {
        match self.process(payload).await {
            Ok(files) => {
                tracing::info!("✅ Batch {} converted {} files", payload.batch_id, files.len());
                BatchResponse {
                    batch_id: payload.batch_id,
                    status: StatusTag::Success,
                    message: format!("{} file(s) converted", files.len()),
                    files,
                }
            }
            Err(e) => {
                tracing::error!(
                    "❌ Batch {} failed: {} (Category: {:?})",
                    payload.batch_id,
                    e,
                    e.category()
                );
                BatchResponse {
                    batch_id: payload.batch_id,
                    status: e.status_tag(),
                    message: e.user_friendly_message(),
                    files: Vec::new(),
                }
            }
        }
    }
}
