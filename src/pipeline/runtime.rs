use crate::config::CompileConfig;
use crate::error::TimelineError;
use crate::pipeline::traits::{FrameQuantizer, PhonemeClassifier, RestScheduler};
use crate::types::{PoseEvent, ScheduledEvent, TranscriptionRecord};

pub struct TimelineCompiler {
    config: CompileConfig,
    classifier: Box<dyn PhonemeClassifier>,
    quantizer: Box<dyn FrameQuantizer>,
    scheduler: Box<dyn RestScheduler>,
}

impl std::fmt::Debug for TimelineCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineCompiler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub(crate) struct TimelineCompilerParts {
    pub config: CompileConfig,
    pub classifier: Box<dyn PhonemeClassifier>,
    pub quantizer: Box<dyn FrameQuantizer>,
    pub scheduler: Box<dyn RestScheduler>,
}

impl TimelineCompiler {
    pub(crate) fn from_parts(parts: TimelineCompilerParts) -> Self {
        Self {
            config: parts.config,
            classifier: parts.classifier,
            quantizer: parts.quantizer,
            scheduler: parts.scheduler,
        }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Classify and quantize each record. Fails on the first unknown symbol;
    /// a partially compiled timeline is never returned.
    pub fn compile_events(
        &self,
        records: &[TranscriptionRecord],
    ) -> Result<Vec<PoseEvent>, TimelineError> {
        let sorted = records
            .windows(2)
            .all(|pair| pair[0].start_seconds <= pair[1].start_seconds);
        if !sorted {
            tracing::warn!(
                record_count = records.len(),
                "transcription records are not sorted by start time; the schedule will be out of order"
            );
        }

        let mut events = Vec::with_capacity(records.len());
        for record in records {
            let pose = self.classifier.classify(&record.symbol)?;
            let frame = self
                .quantizer
                .frame_at(record.start_seconds, self.config.frame_rate)?;
            events.push(PoseEvent {
                pose,
                frame,
                duration_seconds: record.duration_seconds,
            });
        }
        tracing::debug!(
            record_count = records.len(),
            frame_rate = self.config.frame_rate,
            "classified and quantized transcription records"
        );
        Ok(events)
    }

    /// Run the full pipeline: classify, quantize, then gap-fill.
    pub fn compile(
        &self,
        records: &[TranscriptionRecord],
    ) -> Result<Vec<ScheduledEvent>, TimelineError> {
        let events = self.compile_events(records)?;
        self.scheduler.schedule(
            &events,
            &self.config.base_pose,
            self.config.gap_threshold_frames,
        )
    }
}
