use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::{PhaseTimeline, PhaseTiming, SystemMonitor};

pub struct CorpusEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
    timeline: PhaseTimeline,
}

impl<P: Pipeline> CorpusEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
            timeline: PhaseTimeline::new(),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Phases of the most recent run, labelled with what each one processed.
    pub fn phase_timings(&self) -> Vec<PhaseTiming> {
        self.timeline.phases()
    }

    fn finish_phase(&self, label: String) {
        self.timeline.mark(label.as_str());
        self.monitor.log_stats(&label);
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting corpus pipeline");
        self.timeline.reset();

        // 1. Ingest
        tracing::info!("Ingesting corpus...");
        let raw = self.pipeline.ingest().await?;
        tracing::info!(
            "Ingested {} characters from {} ({})",
            raw.verification.length_chars,
            raw.origin,
            raw.verification.encoding_status
        );
        self.finish_phase(format!(
            "Ingest ({} chars, {})",
            raw.verification.length_chars, raw.verification.encoding
        ));

        // 2. Analyze
        tracing::info!("Analyzing corpus...");
        let result = self.pipeline.analyze(raw).await?;
        tracing::info!(
            "Analyzed {} lines, {} words ({} unique, TTR {:.3})",
            result.stats.total_lines,
            result.frequency.total_words,
            result.frequency.unique_words,
            result.frequency.type_token_ratio
        );
        self.finish_phase(format!(
            "Analyze ({} lines, {} words)",
            result.stats.total_lines, result.frequency.total_words
        ));

        // 3. Publish
        tracing::info!("Publishing results...");
        let output_path = self.pipeline.publish(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.finish_phase(format!("Publish ({})", output_path));

        tracing::info!("⏱️ {}", self.timeline.summary());
        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
