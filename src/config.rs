use crate::timeline::schedule::RestPlacement;

/// Per-compilation settings, threaded explicitly through the pipeline.
///
/// Nothing here is read from ambient state; frame rate and base pose in
/// particular are the caller's choice, not a scene property.
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Target animation frame rate; must be finite and positive.
    pub frame_rate: f64,
    /// Rig pose name used for synthesized rest events.
    pub base_pose: String,
    /// Silences strictly wider than this many frames get a rest pair.
    pub gap_threshold_frames: i64,
    pub rest_placement: RestPlacement,
    /// Optional JSON classifier-table override for rigs with a different
    /// mouth set; the built-in table is used when absent.
    pub table_path: Option<String>,
}

impl CompileConfig {
    pub const DEFAULT_FRAME_RATE: f64 = 24.0;
    pub const DEFAULT_BASE_POSE: &'static str = "Rest";
    pub const DEFAULT_GAP_THRESHOLD_FRAMES: i64 = 4;
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            frame_rate: Self::DEFAULT_FRAME_RATE,
            base_pose: Self::DEFAULT_BASE_POSE.to_string(),
            gap_threshold_frames: Self::DEFAULT_GAP_THRESHOLD_FRAMES,
            rest_placement: RestPlacement::default(),
            table_path: None,
        }
    }
}
