use crate::error::{AlreadyRecordingError, ComputationFailed};
use crate::fps_meter;
use crate::frame_clock::{FrameClock, SubscriptionHandle, TickCallback, Timestamp};
use crate::recorder::{SampleRecorder, DEFAULT_TARGET_FRAME_RATE};
use crate::report::FpsReport;
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct ActiveSession {
    recorder: Arc<SampleRecorder>,
    subscription: SubscriptionHandle,
}

enum State {
    Idle,
    Recording(ActiveSession),
}

/// Owns the single active recording session, if any.
///
/// `Idle --start--> Recording --stop|invalidate--> Idle`. Starting twice is an error rather than a
/// restart, since overlapping sessions would share elapsed time.
pub struct RecordingController<C: FrameClock> {
    clock: Arc<C>,
    target_frame_rate: f64,
    state: Mutex<State>,
}

impl<C: FrameClock> RecordingController<C> {
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_target_frame_rate(clock, DEFAULT_TARGET_FRAME_RATE)
    }

    pub fn with_target_frame_rate(clock: Arc<C>, target_frame_rate: f64) -> Self {
        Self {
            clock,
            target_frame_rate,
            state: Mutex::new(State::Idle),
        }
    }

    pub fn clock(&self) -> &Arc<C> {
        &self.clock
    }

    pub fn is_recording(&self) -> bool {
        matches!(*self.lock(), State::Recording(_))
    }

    pub fn start(&self) -> Result<(), AlreadyRecordingError> {
        let mut state = self.lock();
        if let State::Recording(_) = *state {
            return Err(AlreadyRecordingError);
        }

        let start = self.clock.now();
        let recorder = Arc::new(SampleRecorder::new(start, self.target_frame_rate));
        let on_native: TickCallback = {
            let recorder = Arc::clone(&recorder);
            Arc::new(move |ts: Timestamp| recorder.record_native(ts))
        };
        let on_logic: TickCallback = {
            let recorder = Arc::clone(&recorder);
            Arc::new(move |ts: Timestamp| recorder.record_logic(ts))
        };
        let subscription = self.clock.subscribe(on_native, on_logic);

        info!("recording FPS from {}", start);
        *state = State::Recording(ActiveSession {
            recorder,
            subscription,
        });
        Ok(())
    }

    /// Ends the active session and computes its report, `Ok(None)` when nothing was recording.
    ///
    /// The controller is idle afterwards whether or not the report could be computed.
    pub fn stop(&self, end: Timestamp) -> Result<Option<FpsReport>, ComputationFailed> {
        let active = match std::mem::replace(&mut *self.lock(), State::Idle) {
            State::Idle => {
                debug!("stop without an active recording");
                return Ok(None);
            }
            State::Recording(active) => active,
        };
        self.clock.unsubscribe(active.subscription);

        let session = active.recorder.finish();
        debug!(
            "stopping at {}: {} native, {} logic ticks",
            end,
            session.native_frames.len(),
            session.logic_frames.len()
        );
        fps_meter::measure(&session, end).map(Some)
    }

    /// Drops any active session without computing a report. Safe to call at any time.
    pub fn invalidate(&self) {
        if let State::Recording(active) = std::mem::replace(&mut *self.lock(), State::Idle) {
            debug!("discarding recording started at {}", active.recorder.start());
            self.clock.unsubscribe(active.subscription);
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: FrameClock> Drop for RecordingController<C> {
    fn drop(&mut self) {
        self.invalidate();
    }
}
