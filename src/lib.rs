pub mod animations_debug;
pub mod config;
pub mod controller;
pub mod error;
pub mod fps_meter;
pub mod frame_clock;
pub mod logger;
pub mod recorder;
pub mod report;
pub mod settings;
pub mod simulate;
pub mod toast;
