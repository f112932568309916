use std::path::Path;

use crate::config::CompileConfig;
use crate::error::TimelineError;
use crate::pipeline::defaults::{GapFillScheduler, HalfUpQuantizer, TableClassifier};
use crate::pipeline::runtime::{TimelineCompiler, TimelineCompilerParts};
use crate::pipeline::traits::{FrameQuantizer, PhonemeClassifier, RestScheduler};

pub struct TimelineCompilerBuilder {
    config: CompileConfig,
    classifier: Option<Box<dyn PhonemeClassifier>>,
    quantizer: Option<Box<dyn FrameQuantizer>>,
    scheduler: Option<Box<dyn RestScheduler>>,
}

impl TimelineCompilerBuilder {
    pub fn new(config: CompileConfig) -> Self {
        Self {
            config,
            classifier: None,
            quantizer: None,
            scheduler: None,
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn PhonemeClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_quantizer(mut self, quantizer: Box<dyn FrameQuantizer>) -> Self {
        self.quantizer = Some(quantizer);
        self
    }

    pub fn with_scheduler(mut self, scheduler: Box<dyn RestScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Validate the configuration and assemble the compiler. A misconfigured
    /// frame rate or an unreadable table override fails here, before any
    /// transcription is touched.
    pub fn build(self) -> Result<TimelineCompiler, TimelineError> {
        let rate = self.config.frame_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(TimelineError::InvalidFrameRate { rate });
        }

        let classifier: Box<dyn PhonemeClassifier> = match self.classifier {
            Some(classifier) => classifier,
            None => match self.config.table_path.as_deref() {
                Some(path) => Box::new(TableClassifier::from_file(Path::new(path))?),
                None => Box::new(TableClassifier::builtin()),
            },
        };

        Ok(TimelineCompiler::from_parts(TimelineCompilerParts {
            scheduler: self.scheduler.unwrap_or_else(|| {
                Box::new(GapFillScheduler::new(self.config.rest_placement))
            }),
            quantizer: self.quantizer.unwrap_or_else(|| Box::new(HalfUpQuantizer)),
            classifier,
            config: self.config,
        }))
    }
}
