use crate::error::TimelineError;
use crate::types::ScheduledEvent;

/// The rig-side collaborator: seeks to a frame, applies a named pose, and
/// records a keyframe. Implementations live outside this crate; compilation
/// never touches one.
pub trait PoseApplier {
    fn seek(&mut self, frame: i64) -> Result<(), TimelineError>;
    fn apply_pose(&mut self, pose: &str) -> Result<(), TimelineError>;
    fn record_keyframe(&mut self) -> Result<(), TimelineError>;
}

/// Play a compiled schedule through an applier, in order: seek, apply,
/// record, for every event. Stops on the first applier failure.
pub fn play_schedule(
    scheduled: &[ScheduledEvent],
    applier: &mut dyn PoseApplier,
) -> Result<(), TimelineError> {
    for event in scheduled {
        applier.seek(event.frame())?;
        applier.apply_pose(event.pose_name())?;
        applier.record_keyframe()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PoseCategory, PoseEvent};

    #[derive(Default)]
    struct RecordingApplier {
        calls: Vec<String>,
        fail_on_pose: Option<String>,
    }

    impl PoseApplier for RecordingApplier {
        fn seek(&mut self, frame: i64) -> Result<(), TimelineError> {
            self.calls.push(format!("seek {frame}"));
            Ok(())
        }

        fn apply_pose(&mut self, pose: &str) -> Result<(), TimelineError> {
            if self.fail_on_pose.as_deref() == Some(pose) {
                return Err(TimelineError::runtime("apply pose", "rig rejected pose"));
            }
            self.calls.push(format!("apply {pose}"));
            Ok(())
        }

        fn record_keyframe(&mut self) -> Result<(), TimelineError> {
            self.calls.push("key".to_string());
            Ok(())
        }
    }

    fn sample_schedule() -> Vec<ScheduledEvent> {
        vec![
            ScheduledEvent::Rest {
                pose: "Rest".to_string(),
                frame: 15,
            },
            ScheduledEvent::Speech(PoseEvent {
                pose: PoseCategory::A,
                frame: 16,
                duration_seconds: 0.025,
            }),
            ScheduledEvent::Rest {
                pose: "Rest".to_string(),
                frame: 19,
            },
        ]
    }

    #[test]
    fn plays_events_in_order() {
        let mut applier = RecordingApplier::default();
        play_schedule(&sample_schedule(), &mut applier).unwrap();
        assert_eq!(
            applier.calls,
            vec![
                "seek 15", "apply Rest", "key", "seek 16", "apply A", "key", "seek 19",
                "apply Rest", "key",
            ]
        );
    }

    #[test]
    fn applier_failure_stops_playback() {
        let mut applier = RecordingApplier {
            fail_on_pose: Some("A".to_string()),
            ..RecordingApplier::default()
        };
        let err = play_schedule(&sample_schedule(), &mut applier).unwrap_err();
        assert!(matches!(err, TimelineError::Runtime { .. }));
        // The rest-pose keyframe landed; nothing after the failure did.
        assert_eq!(applier.calls.last().map(String::as_str), Some("seek 16"));
    }
}
