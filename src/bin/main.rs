use clap::Parser;
use fpsrec::animations_debug::AnimationsDebug;
use fpsrec::config::Config;
use fpsrec::controller::RecordingController;
use fpsrec::frame_clock::{FrameClock, SystemTime, TickHub};
use fpsrec::report::{DefaultSink, ReportSink};
use fpsrec::settings::{DeveloperSettings, Settings};
use fpsrec::simulate::Simulation;
use fpsrec::toast::{ToastLength, ToastQueue};
use log::{info, LevelFilter};
use std::sync::Arc;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    fpsrec::logger::init(if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let mut settings = match &config.settings {
        Some(path) => Settings::load_from(path.clone())?,
        None => Settings::load()?,
    };
    if let Some(enabled) = config.enable_fps_debug {
        settings.data.animation_fps_debug = enabled;
        settings.save()?;
        info!("saved settings to {}", settings.path().display());
    }
    if !settings.is_animation_fps_debug_enabled() {
        info!("animation FPS debugging is disabled, nothing will be recorded");
    }

    let hub = Arc::new(TickHub::new(SystemTime));
    let toasts = Arc::new(ToastQueue::new());
    let sink: Arc<dyn ReportSink> = Arc::new(DefaultSink::new(Arc::clone(&toasts), ToastLength::Long));
    let controller = RecordingController::with_target_frame_rate(Arc::clone(&hub), config.target_fps);
    let module = AnimationsDebug::new(
        controller,
        Some(Arc::new(settings) as Arc<dyn DeveloperSettings>),
        sink,
    );

    module.start_recording_fps()?;
    let stats = Simulation {
        native_fps: config.native_fps,
        logic_fps: config.logic_fps,
        duration: Duration::from_millis(config.duration_ms),
    }
    .run(&*hub)?;
    info!(
        "produced {} native and {} logic frames",
        stats.native_frames, stats.logic_frames
    );

    let report = module.stop_recording_fps(hub.now() as f64);
    module.invalidate();

    for toast in toasts.visible() {
        println!("{}", toast);
    }
    if config.json {
        if let Some(report) = report {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
