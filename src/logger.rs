use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

static START_TIME: Mutex<Option<Instant>> = Mutex::new(None);

pub fn reset_start_time() {
    let mut start_time = START_TIME.lock().unwrap_or_else(|e| e.into_inner());
    *start_time = Some(Instant::now());
}

fn elapsed_prefix() -> String {
    START_TIME
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .map(|start_time| start_time.elapsed().as_millis())
        .map_or(String::from(""), |ms| format!("{:6}ms", ms))
}

/// Installs the global logger. `RUST_LOG` overrides `default_level`.
///
/// FPS summaries are logged at debug level under the `fpsrec` target, so they show up with
/// `RUST_LOG=fpsrec=debug`.
pub fn init(default_level: LevelFilter) {
    reset_start_time();
    let mut builder = Builder::new();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let result = builder
        .format(move |buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} [{} {}] {}",
                elapsed_prefix(),
                style.value(record.level()),
                record.target(),
                record.args()
            )
        })
        .try_init();
    if result.is_err() {
        log::debug!("logger already initialized");
    }
}
