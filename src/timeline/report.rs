use serde::Serialize;

use crate::types::ScheduledEvent;

#[derive(Debug, Clone, Serialize)]
pub struct TimelineReport {
    pub schema_version: u32,
    pub meta: Meta,
    pub events: Vec<EventRecord>,
    pub stats: ScheduleStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub source_path: String,
    pub frame_rate: f64,
    pub base_pose: String,
    pub record_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Speech,
    Rest,
}

/// Flat, serialization-friendly view of one scheduled event.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub kind: EventKind,
    pub pose: String,
    pub frame: i64,
    pub duration_seconds: f64,
}

impl From<&ScheduledEvent> for EventRecord {
    fn from(event: &ScheduledEvent) -> Self {
        Self {
            kind: if event.is_rest() {
                EventKind::Rest
            } else {
                EventKind::Speech
            },
            pose: event.pose_name().to_string(),
            frame: event.frame(),
            duration_seconds: event.duration_seconds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStats {
    pub speech_events: usize,
    pub rest_events: usize,
    pub first_frame: i64,
    pub last_frame: i64,
    /// Internal silences wide enough to have been bracketed by a rest pair.
    pub filled_gaps: usize,
}

pub fn compute_schedule_stats(scheduled: &[ScheduledEvent]) -> ScheduleStats {
    let rest_events = scheduled.iter().filter(|e| e.is_rest()).count();
    ScheduleStats {
        speech_events: scheduled.len() - rest_events,
        rest_events,
        first_frame: scheduled.first().map_or(0, ScheduledEvent::frame),
        last_frame: scheduled.last().map_or(0, ScheduledEvent::frame),
        // Two rests always bracket the timeline; the remainder come in pairs.
        filled_gaps: rest_events.saturating_sub(2) / 2,
    }
}
