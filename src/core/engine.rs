use crate::core::Pipeline;
use crate::domain::model::ConvertedFile;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs extract, transform and load for one pipeline.
pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<ConvertedFile> {
        tracing::debug!("Extracting records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("📥 Read {} records", records.len());
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(records).await?;
        tracing::debug!(
            "Generated {} pages ({} bytes)",
            result.record_count,
            result.document.len()
        );
        self.monitor.log_stats("Transform");

        let converted = self.pipeline.load(result).await?;
        tracing::info!("📁 Stored {}", converted.location);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(converted)
    }
}
