use clap::Parser;
use std::path::PathBuf;

/// Records FPS over a simulated animation and prints the summary.
#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// Length of the simulated animation in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub duration_ms: u64,

    /// Rate the render thread produces native frames at.
    #[clap(long, default_value_t = 60.0)]
    pub native_fps: f64,

    /// Rate the logic thread produces logic frames at.
    #[clap(long, default_value_t = 50.0)]
    pub logic_fps: f64,

    /// Frame rate the expected-frame count is measured against.
    #[clap(long, default_value_t = 60.0)]
    pub target_fps: f64,

    /// Developer settings file, defaults to `<config dir>/fpsrec/settings.json`.
    #[clap(long)]
    pub settings: Option<PathBuf>,

    /// Persist the animation FPS debug flag before recording.
    #[clap(long)]
    pub enable_fps_debug: Option<bool>,

    /// Print the report as JSON on stdout.
    #[clap(long)]
    pub json: bool,

    #[clap(short, long)]
    pub verbose: bool,
}
