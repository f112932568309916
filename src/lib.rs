pub mod config;
pub mod error;
pub mod pipeline;
pub mod playback;
pub mod sync_file;
pub mod timeline;
pub mod types;

pub use config::CompileConfig;
pub use error::TimelineError;
pub use pipeline::builder::TimelineCompilerBuilder;
pub use pipeline::runtime::TimelineCompiler;
pub use pipeline::traits::{FrameQuantizer, PhonemeClassifier, RestScheduler};
pub use playback::{play_schedule, PoseApplier};
pub use sync_file::{parse_sync_file, parse_sync_str};
pub use timeline::report::{
    compute_schedule_stats, EventKind, EventRecord, Meta, ScheduleStats, TimelineReport,
};
pub use timeline::schedule::RestPlacement;
pub use types::{PoseCategory, PoseEvent, ScheduledEvent, TranscriptionRecord};
