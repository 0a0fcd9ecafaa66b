use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

/// Where the run ended up and how many cards went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub card_count: usize,
    pub output_location: String,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🎲 Starting card generation");
        self.monitor.log_phase("Start");

        let collection = self.pipeline.generate().await?;
        tracing::info!("✅ Generated {} unique cards", collection.len());
        self.monitor.log_phase("Generate");

        let data = self.pipeline.serialize(&collection).await?;
        self.monitor.log_phase("Serialize");

        let output_location = self.pipeline.load(data).await?;
        tracing::info!("📁 Output saved to: {}", output_location);
        self.monitor.log_phase("Load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            card_count: collection.len(),
            output_location,
        })
    }
}
