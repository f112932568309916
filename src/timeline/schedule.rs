use crate::error::TimelineError;
use crate::types::{PoseEvent, ScheduledEvent};

/// The leading rest sits this many frames before the first speech event, and
/// each pre-gap rest this many frames before the next one. One frame gives a
/// visible transition instead of a hard cut.
const LEAD_IN_FRAMES: i64 = 1;

/// Frames the mouth holds its last speech shape before returning to rest.
const TRAILING_HOLD_FRAMES: i64 = 3;

/// Where the "snap back to rest" event lands after a speech event that
/// precedes a silence gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestPlacement {
    /// Legacy placement: the rest lands at `index + 2`, derived from the
    /// event's position in the sequence rather than its frame. A historical
    /// quirk, kept as the default so existing scenes keyframe identically.
    /// The scheduler clamps the result into the silence window, so output
    /// frames stay ordered even on timelines where the index falls behind
    /// the frame numbers.
    SequenceIndex,
    /// Time-derived placement: `frame + offset` after the speech event.
    FrameOffset(i64),
}

impl Default for RestPlacement {
    fn default() -> Self {
        Self::SequenceIndex
    }
}

impl RestPlacement {
    fn rest_after_frame(self, index: usize, frame: i64) -> i64 {
        match self {
            Self::SequenceIndex => index as i64 + 2,
            Self::FrameOffset(offset) => frame + offset,
        }
    }
}

/// Expand classified, quantized events into the playback schedule.
///
/// Rest events on `base_pose` bracket the speech and cover every internal
/// silence wider than `gap_threshold_frames` (strict greater-than; a gap of
/// exactly the threshold is played through). Input must already be sorted by
/// frame; the scheduler never reorders.
pub fn schedule(
    events: &[PoseEvent],
    base_pose: &str,
    gap_threshold_frames: i64,
    placement: RestPlacement,
) -> Result<Vec<ScheduledEvent>, TimelineError> {
    let first = events.first().ok_or(TimelineError::EmptyTimeline)?;
    debug_assert!(
        events.windows(2).all(|pair| pair[0].frame <= pair[1].frame),
        "scheduler input must be sorted by frame"
    );

    let rest = |frame: i64| ScheduledEvent::Rest {
        pose: base_pose.to_string(),
        frame,
    };

    let mut out = Vec::with_capacity(events.len() + 2);
    out.push(rest(first.frame - LEAD_IN_FRAMES));

    for (index, event) in events.iter().enumerate() {
        out.push(ScheduledEvent::Speech(event.clone()));
        if let Some(next) = events.get(index + 1) {
            let gap = next.frame - event.frame;
            // The pair needs at least one silent frame to land on; gaps of a
            // single frame are played through whatever the threshold says.
            if gap > gap_threshold_frames && gap > 1 {
                // Bracket the silence: snap to rest shortly after this event,
                // hold, and come off rest one frame before the next one.
                let before_next = next.frame - LEAD_IN_FRAMES;
                let after_current = placement
                    .rest_after_frame(index, event.frame)
                    .clamp(event.frame + 1, before_next);
                out.push(rest(after_current));
                out.push(rest(before_next));
            }
        }
    }

    let last_frame = events[events.len() - 1].frame;
    out.push(rest(last_frame + TRAILING_HOLD_FRAMES));
    Ok(out)
}
