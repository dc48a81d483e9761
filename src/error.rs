use crate::frame_clock::Timestamp;
use thiserror::Error;

/// `start()` was called while a session is still active.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Already recording FPS!")]
pub struct AlreadyRecordingError;

/// A report could not be derived from the recorded samples.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationFailed {
    #[error("stop boundary is not after start ({elapsed_ms}ms elapsed)")]
    InvalidInterval { elapsed_ms: Timestamp },
    #[error("stop time is not a finite number")]
    NonFiniteStopTime,
    #[error("no native frames recorded")]
    NoNativeFrames,
}
