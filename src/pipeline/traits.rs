use crate::error::TimelineError;
use crate::types::{PoseCategory, PoseEvent, ScheduledEvent};

pub trait PhonemeClassifier: Send + Sync {
    fn classify(&self, symbol: &str) -> Result<PoseCategory, TimelineError>;
}

pub trait FrameQuantizer: Send + Sync {
    fn frame_at(&self, start_seconds: f64, frame_rate: f64) -> Result<i64, TimelineError>;
}

pub trait RestScheduler: Send + Sync {
    fn schedule(
        &self,
        events: &[PoseEvent],
        base_pose: &str,
        gap_threshold_frames: i64,
    ) -> Result<Vec<ScheduledEvent>, TimelineError>;
}
