use std::collections::HashMap;
use std::path::Path;

use crate::error::TimelineError;
use crate::pipeline::traits::{FrameQuantizer, PhonemeClassifier, RestScheduler};
use crate::timeline::classify::{classify_symbol, classify_symbol_in, load_table};
use crate::timeline::quantize::frame_at;
use crate::timeline::schedule::{schedule, RestPlacement};
use crate::types::{PoseCategory, PoseEvent, ScheduledEvent};

/// Classifier backed by the built-in IPA table, or by a caller-supplied
/// replacement loaded from JSON.
#[derive(Debug, Default)]
pub struct TableClassifier {
    custom: Option<HashMap<String, PoseCategory>>,
}

impl TableClassifier {
    pub fn builtin() -> Self {
        Self { custom: None }
    }

    pub fn from_table(table: HashMap<String, PoseCategory>) -> Self {
        Self {
            custom: Some(table),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, TimelineError> {
        Ok(Self::from_table(load_table(path)?))
    }
}

impl PhonemeClassifier for TableClassifier {
    fn classify(&self, symbol: &str) -> Result<PoseCategory, TimelineError> {
        match &self.custom {
            Some(table) => classify_symbol_in(table, symbol),
            None => classify_symbol(symbol),
        }
    }
}

pub struct HalfUpQuantizer;

impl FrameQuantizer for HalfUpQuantizer {
    fn frame_at(&self, start_seconds: f64, frame_rate: f64) -> Result<i64, TimelineError> {
        frame_at(start_seconds, frame_rate)
    }
}

/// The gap-fill scheduler with its rest-placement policy fixed at
/// construction time.
#[derive(Debug, Default)]
pub struct GapFillScheduler {
    placement: RestPlacement,
}

impl GapFillScheduler {
    pub fn new(placement: RestPlacement) -> Self {
        Self { placement }
    }
}

impl RestScheduler for GapFillScheduler {
    fn schedule(
        &self,
        events: &[PoseEvent],
        base_pose: &str,
        gap_threshold_frames: i64,
    ) -> Result<Vec<ScheduledEvent>, TimelineError> {
        schedule(events, base_pose, gap_threshold_frames, self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_classifier_matches_table_fn() {
        let classifier = TableClassifier::builtin();
        assert_eq!(
            classifier.classify("ð").unwrap(),
            classify_symbol("ð").unwrap()
        );
        assert!(classifier.classify("q").is_err());
    }

    #[test]
    fn custom_classifier_shadows_builtin() {
        let mut table = HashMap::new();
        table.insert("a".to_string(), PoseCategory::W);
        let classifier = TableClassifier::from_table(table);
        assert_eq!(classifier.classify("a").unwrap(), PoseCategory::W);
        // Symbols the custom table drops are unknown, not defaulted.
        assert!(classifier.classify("b").is_err());
    }

    #[test]
    fn half_up_quantizer_delegates() {
        let quantizer = HalfUpQuantizer;
        assert_eq!(quantizer.frame_at(0.4, 40.0).unwrap(), 16);
        assert!(quantizer.frame_at(0.4, 0.0).is_err());
    }

    #[test]
    fn gap_fill_scheduler_delegates() {
        let scheduler = GapFillScheduler::default();
        let events = vec![PoseEvent {
            pose: PoseCategory::A,
            frame: 16,
            duration_seconds: 0.025,
        }];
        let out = scheduler.schedule(&events, "Rest", 4).unwrap();
        let expected = schedule(&events, "Rest", 4, RestPlacement::default()).unwrap();
        assert_eq!(out, expected);
    }
}
