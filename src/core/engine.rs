use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct AlgoEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AlgoEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs the pipeline once: extract, transform, load. Any failure
    /// aborts the run with no retry and no partial output.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting CtD algorithm run...");

        tracing::info!("Extracting input data...");
        let extracted = self.pipeline.extract().await?;
        tracing::info!(
            "Parsed dataset from {} (threshold = {})",
            extracted.source,
            extracted.params.threshold
        );
        self.monitor.log_stats("Extract");

        tracing::info!("Applying algorithm logic...");
        let result = self.pipeline.transform(extracted).await?;
        tracing::info!(
            "Processed {} records out of {}",
            result.kept.len(),
            result.input_count
        );
        self.monitor.log_stats("Transform");

        tracing::info!("Writing results...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Results written to {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
