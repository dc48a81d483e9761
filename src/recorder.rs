use crate::frame_clock::Timestamp;
use log::trace;
use std::sync::{Mutex, PoisonError};

pub const DEFAULT_TARGET_FRAME_RATE: f64 = 60.0;

/// One recording interval, as handed to the FPS calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub start: Timestamp,
    pub native_frames: Vec<Timestamp>,
    pub logic_frames: Vec<Timestamp>,
    pub target_frame_rate: f64,
}

/// Collects native and logic frame timestamps for a single session.
///
/// The two sources sit behind separate locks so the render thread and the logic thread never
/// contend with each other. A tick older than the last one seen from the same source is dropped,
/// which keeps each sequence non-decreasing.
#[derive(Debug)]
pub struct SampleRecorder {
    start: Timestamp,
    target_frame_rate: f64,
    native: Mutex<Vec<Timestamp>>,
    logic: Mutex<Vec<Timestamp>>,
}

impl SampleRecorder {
    pub fn new(start: Timestamp, target_frame_rate: f64) -> Self {
        Self {
            start,
            target_frame_rate,
            native: Mutex::new(Vec::new()),
            logic: Mutex::new(Vec::new()),
        }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn record_native(&self, ts: Timestamp) {
        Self::append(&self.native, ts, "native");
    }

    pub fn record_logic(&self, ts: Timestamp) {
        Self::append(&self.logic, ts, "logic");
    }

    fn append(frames: &Mutex<Vec<Timestamp>>, ts: Timestamp, source: &str) {
        let mut frames = frames.lock().unwrap_or_else(PoisonError::into_inner);
        if frames.last().is_some_and(|&last| ts < last) {
            trace!("dropping out-of-order {} tick at {}", source, ts);
            return;
        }
        frames.push(ts);
    }

    /// Drains everything recorded so far into a `Session`.
    pub fn finish(&self) -> Session {
        let take = |frames: &Mutex<Vec<Timestamp>>| {
            std::mem::take(&mut *frames.lock().unwrap_or_else(PoisonError::into_inner))
        };
        let native_frames = take(&self.native);
        let logic_frames = take(&self.logic);
        Session {
            start: self.start,
            native_frames,
            logic_frames,
            target_frame_rate: self.target_frame_rate,
        }
    }
}
