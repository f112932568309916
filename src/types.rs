use serde::{Deserialize, Serialize};

/// Closed set of mouth shapes the classifier maps phonetic symbols onto.
///
/// The names double as the rig-facing pose identifiers for speech events;
/// rest events carry a caller-supplied base pose name instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PoseCategory {
    A,
    E,
    O,
    L,
    M,
    S,
    Th,
    N,
    R,
    F,
    W,
}

impl PoseCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::E => "E",
            Self::O => "O",
            Self::L => "L",
            Self::M => "M",
            Self::S => "S",
            Self::Th => "TH",
            Self::N => "N",
            Self::R => "R",
            Self::F => "F",
            Self::W => "W",
        }
    }
}

impl std::fmt::Display for PoseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed phonetic unit as produced by the transcription engine.
///
/// The record sequence as a whole must be non-decreasing in `start_seconds`;
/// the scheduler relies on that ordering and does not re-sort.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRecord {
    pub symbol: String,
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

/// A classified and quantized transcription record.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseEvent {
    pub pose: PoseCategory,
    /// Frame index derived from `start_seconds` and the frame rate; never
    /// negative for valid input times.
    pub frame: i64,
    pub duration_seconds: f64,
}

/// One entry of the compiled, animation-ready event sequence.
///
/// Frames are `i64` because the leading rest sits one frame before the first
/// speech event and is `-1` when speech starts at frame 0 (pre-roll).
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledEvent {
    Speech(PoseEvent),
    Rest { pose: String, frame: i64 },
}

impl ScheduledEvent {
    pub fn frame(&self) -> i64 {
        match self {
            Self::Speech(event) => event.frame,
            Self::Rest { frame, .. } => *frame,
        }
    }

    pub fn pose_name(&self) -> &str {
        match self {
            Self::Speech(event) => event.pose.as_str(),
            Self::Rest { pose, .. } => pose.as_str(),
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        match self {
            Self::Speech(event) => event.duration_seconds,
            Self::Rest { .. } => 0.0,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest { .. })
    }
}
