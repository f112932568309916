use crate::error::TimelineError;

/// Quantize a continuous start time into an animation frame index.
///
/// Rounding is half-up (`floor(t * rate + 0.5)`), which is stable for the
/// non-negative times this pipeline sees; frame 0 is the first frame.
pub fn frame_at(start_seconds: f64, frame_rate: f64) -> Result<i64, TimelineError> {
    if !frame_rate.is_finite() || frame_rate <= 0.0 {
        return Err(TimelineError::InvalidFrameRate { rate: frame_rate });
    }
    debug_assert!(
        start_seconds.is_finite() && start_seconds >= 0.0,
        "start times are validated at the parsing boundary"
    );
    Ok((start_seconds * frame_rate + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_forty_fps_example() {
        // 0.4s at 40fps lands exactly on frame 16.
        assert_eq!(frame_at(0.4, 40.0).unwrap(), 16);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(frame_at(0.5, 1.0).unwrap(), 1);
        assert_eq!(frame_at(1.5, 1.0).unwrap(), 2);
        assert_eq!(frame_at(0.49, 1.0).unwrap(), 0);
        assert_eq!(frame_at(0.0625, 24.0).unwrap(), 2);
    }

    #[test]
    fn zero_time_is_frame_zero() {
        assert_eq!(frame_at(0.0, 24.0).unwrap(), 0);
        assert_eq!(frame_at(0.0, 120.0).unwrap(), 0);
    }

    #[test]
    fn monotone_in_time_for_fixed_rate() {
        let rate = 29.97;
        let times = [0.0, 0.01, 0.2, 0.2, 0.5, 1.0, 2.75, 10.0, 60.0];
        let frames: Vec<i64> = times
            .iter()
            .map(|&t| frame_at(t, rate).unwrap())
            .collect();
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|&f| f >= 0));
    }

    #[test]
    fn rejects_invalid_frame_rates() {
        for rate in [0.0, -24.0, f64::NAN, f64::INFINITY] {
            let err = frame_at(1.0, rate).unwrap_err();
            assert!(matches!(err, TimelineError::InvalidFrameRate { .. }));
        }
    }
}
