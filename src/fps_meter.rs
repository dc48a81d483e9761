use crate::error::ComputationFailed;
use crate::frame_clock::Timestamp;
use crate::recorder::Session;
use crate::report::FpsReport;
use logging_timer::time;

/// Ideal number of frames at `target_frame_rate` over `elapsed_ms`.
pub fn expected_frames(elapsed_ms: Timestamp, target_frame_rate: f64) -> u64 {
    if elapsed_ms <= 0 {
        return 0;
    }
    (elapsed_ms as f64 * target_frame_rate / 1000.0).round() as u64
}

fn frames_within(frames: &[Timestamp], start: Timestamp, stop: Timestamp) -> u64 {
    frames.iter().filter(|&&ts| ts >= start && ts <= stop).count() as u64
}

fn rate(frames: u64, elapsed_ms: Timestamp) -> f64 {
    frames as f64 / elapsed_ms as f64 * 1000.0
}

/// Computes the report for `session`, treating `stop` as the end of the interval.
///
/// Ticks delivered after `stop` (the callback may still fire while unsubscribing) are not counted.
#[time]
pub fn measure(session: &Session, stop: Timestamp) -> Result<FpsReport, ComputationFailed> {
    // stop comes from the caller and may be anywhere in the i64 range
    let elapsed_ms = stop.saturating_sub(session.start);
    if elapsed_ms <= 0 {
        return Err(ComputationFailed::InvalidInterval { elapsed_ms });
    }

    let total_native_frames = frames_within(&session.native_frames, session.start, stop);
    if total_native_frames == 0 {
        return Err(ComputationFailed::NoNativeFrames);
    }
    let total_logic_frames = frames_within(&session.logic_frames, session.start, stop);

    Ok(FpsReport {
        native_fps: rate(total_native_frames, elapsed_ms),
        logic_fps: rate(total_logic_frames, elapsed_ms),
        total_native_frames,
        total_logic_frames,
        total_expected_frames: expected_frames(elapsed_ms, session.target_frame_rate),
        total_time_ms: elapsed_ms,
    })
}
