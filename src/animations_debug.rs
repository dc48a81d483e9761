//! Scripting-facing entry points for recording FPS around an animation.

use crate::controller::RecordingController;
use crate::error::{AlreadyRecordingError, ComputationFailed};
use crate::frame_clock::{FrameClock, Timestamp};
use crate::report::{FpsReport, ReportSink, UNABLE_TO_GET_FPS_INFO};
use crate::settings::DeveloperSettings;
use log::warn;
use std::sync::Arc;

pub struct AnimationsDebug<C: FrameClock> {
    settings: Option<Arc<dyn DeveloperSettings>>,
    sink: Arc<dyn ReportSink>,
    controller: RecordingController<C>,
}

impl<C: FrameClock> AnimationsDebug<C> {
    pub fn new(
        controller: RecordingController<C>,
        settings: Option<Arc<dyn DeveloperSettings>>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            settings,
            sink,
            controller,
        }
    }

    pub fn controller(&self) -> &RecordingController<C> {
        &self.controller
    }

    /// Does nothing unless animation FPS debugging is enabled in the developer settings.
    pub fn start_recording_fps(&self) -> Result<(), AlreadyRecordingError> {
        let enabled = self
            .settings
            .as_ref()
            .is_some_and(|s| s.is_animation_fps_debug_enabled());
        if !enabled {
            return Ok(());
        }
        self.controller.start()
    }

    /// Called when an animation finishes, with its stop time in unix milliseconds as seen by the
    /// caller. Frames after that point are not counted.
    pub fn stop_recording_fps(&self, animation_stop_time_ms: f64) -> Option<FpsReport> {
        let result = if animation_stop_time_ms.is_finite() {
            self.controller.stop(animation_stop_time_ms as Timestamp)
        } else if self.controller.is_recording() {
            self.controller.invalidate();
            Err(ComputationFailed::NonFiniteStopTime)
        } else {
            Ok(None)
        };

        match result {
            Ok(None) => None,
            Ok(Some(report)) => {
                let summary = report.to_string();
                self.sink.log(&summary);
                self.sink.toast(&summary);
                Some(report)
            }
            Err(e) => {
                warn!("{}: {}", UNABLE_TO_GET_FPS_INFO, e);
                self.sink.toast(UNABLE_TO_GET_FPS_INFO);
                None
            }
        }
    }

    pub fn invalidate(&self) {
        self.controller.invalidate();
    }
}
