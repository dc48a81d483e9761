use crate::frame_clock::Timestamp;
use crate::toast::{ToastLength, ToastQueue};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Log target for FPS summaries.
pub const LOG_TARGET: &str = "fpsrec";

pub const UNABLE_TO_GET_FPS_INFO: &str = "Unable to get FPS info";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FpsReport {
    pub native_fps: f64,
    pub logic_fps: f64,
    pub total_native_frames: u64,
    pub total_logic_frames: u64,
    pub total_expected_frames: u64,
    pub total_time_ms: Timestamp,
}

impl fmt::Display for FpsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "FPS: {:.2}, {} frames ({} expected)",
            self.native_fps, self.total_native_frames, self.total_expected_frames
        )?;
        writeln!(
            f,
            "JS FPS: {:.2}, {} frames ({} expected)",
            self.logic_fps, self.total_logic_frames, self.total_expected_frames
        )?;
        write!(f, "Total Time MS: {}", self.total_time_ms)
    }
}

/// Where summaries go once a recording stops.
pub trait ReportSink: Send + Sync {
    fn log(&self, message: &str);

    /// Short-lived, auto-dismissing notification.
    fn toast(&self, message: &str);
}

pub struct DefaultSink {
    toasts: Arc<ToastQueue>,
    length: ToastLength,
}

impl DefaultSink {
    pub fn new(toasts: Arc<ToastQueue>, length: ToastLength) -> Self {
        Self { toasts, length }
    }
}

impl ReportSink for DefaultSink {
    fn log(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }

    fn toast(&self, message: &str) {
        self.toasts.show(message, self.length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let report = FpsReport {
            native_fps: 59.996,
            logic_fps: 49.0,
            total_native_frames: 60,
            total_logic_frames: 49,
            total_expected_frames: 60,
            total_time_ms: 1000,
        };
        assert_eq!(
            report.to_string(),
            "FPS: 60.00, 60 frames (60 expected)\n\
             JS FPS: 49.00, 49 frames (60 expected)\n\
             Total Time MS: 1000"
        );
    }

    #[test]
    fn test_default_sink_toasts() {
        let toasts = Arc::new(ToastQueue::new());
        let sink = DefaultSink::new(Arc::clone(&toasts), ToastLength::Long);
        sink.log("not a toast");
        sink.toast(UNABLE_TO_GET_FPS_INFO);
        assert_eq!(toasts.visible(), vec![UNABLE_TO_GET_FPS_INFO.to_string()]);
    }

    #[test]
    fn test_report_json_field_names() {
        let report = FpsReport {
            native_fps: 30.0,
            logic_fps: 15.0,
            total_native_frames: 15,
            total_logic_frames: 7,
            total_expected_frames: 30,
            total_time_ms: 500,
        };
        let value = serde_json::to_value(report).unwrap();
        assert_eq!(value["total_native_frames"], 15);
        assert_eq!(value["logic_fps"], 15.0);
    }
}
