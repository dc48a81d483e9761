use crate::frame_clock::{TickHub, TimeSource};
use anyhow::*;
use log::debug;
use logging_timer::{executing, timer};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Drives a `TickHub` from a render loop and a logic loop running side by side.
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    pub native_fps: f64,
    pub logic_fps: f64,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub native_frames: u64,
    pub logic_frames: u64,
}

fn frame_interval(fps: f64) -> Result<Duration> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(anyhow!("frame rate must be positive, got {}", fps));
    }
    Ok(Duration::from_secs_f64(1.0 / fps))
}

fn produce(interval: Duration, deadline: Instant, frames: &AtomicU64, tick: impl Fn()) {
    let mut next = Instant::now() + interval;
    while next < deadline {
        thread::sleep(next.saturating_duration_since(Instant::now()));
        tick();
        frames.fetch_add(1, Ordering::Relaxed);
        next += interval;
    }
}

impl Simulation {
    pub fn run<T: TimeSource>(&self, hub: &TickHub<T>) -> Result<SimulationStats> {
        let tmr = timer!("Simulation::run");
        let native_interval = frame_interval(self.native_fps)?;
        let logic_interval = frame_interval(self.logic_fps)?;
        let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build()?;

        let native_frames = AtomicU64::new(0);
        let logic_frames = AtomicU64::new(0);
        let deadline = Instant::now() + self.duration;
        debug!(
            "simulating {:?}: native every {:?}, logic every {:?}",
            self.duration, native_interval, logic_interval
        );
        pool.scope(|s| {
            s.spawn(|_| produce(native_interval, deadline, &native_frames, || {
                hub.native_frame();
            }));
            s.spawn(|_| produce(logic_interval, deadline, &logic_frames, || {
                hub.logic_frame();
            }));
        });
        executing!(tmr, "producers joined");

        Ok(SimulationStats {
            native_frames: native_frames.into_inner(),
            logic_frames: logic_frames.into_inner(),
        })
    }
}
