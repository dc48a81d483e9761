use fpsrec::animations_debug::AnimationsDebug;
use fpsrec::controller::RecordingController;
use fpsrec::error::{AlreadyRecordingError, ComputationFailed};
use fpsrec::frame_clock::{ManualTime, TickHub, Timestamp};
use fpsrec::report::{DefaultSink, FpsReport, ReportSink};
use fpsrec::settings::DeveloperSettings;
use fpsrec::toast::{ToastLength, ToastQueue};
use std::sync::Arc;
use std::thread;

fn hub() -> Arc<TickHub<ManualTime>> {
    Arc::new(TickHub::new(ManualTime::new(0)))
}

fn tick_native_at(hub: &TickHub<ManualTime>, ts: Timestamp) {
    hub.time().set(ts);
    hub.native_frame();
}

fn tick_logic_at(hub: &TickHub<ManualTime>, ts: Timestamp) {
    hub.time().set(ts);
    hub.logic_frame();
}

fn record_animation(native: &[Timestamp], logic: &[Timestamp], stop: Timestamp) -> FpsReport {
    let hub = hub();
    let controller = RecordingController::new(Arc::clone(&hub));
    controller.start().unwrap();

    // merge the two streams in timestamp order, as they would arrive in real time
    let (mut n, mut l) = (native.iter().peekable(), logic.iter().peekable());
    loop {
        match (n.peek(), l.peek()) {
            (Some(&&a), Some(&&b)) if a <= b => {
                tick_native_at(&hub, a);
                n.next();
            }
            (_, Some(&&b)) => {
                tick_logic_at(&hub, b);
                l.next();
            }
            (Some(&&a), None) => {
                tick_native_at(&hub, a);
                n.next();
            }
            (None, None) => break,
        }
    }
    // delivered after the animation ended
    tick_native_at(&hub, stop + 16);

    controller.stop(stop).unwrap().unwrap()
}

fn assert_one_second_report(report: FpsReport) {
    assert_eq!(report.total_native_frames, 60);
    assert_eq!(report.total_logic_frames, 49);
    assert_eq!(report.total_expected_frames, 60);
    assert_eq!(report.total_time_ms, 1000);
    assert!((report.native_fps - 60.0).abs() < 1e-6);
    assert!((report.logic_fps - 49.0).abs() < 1e-6);
}

#[test]
fn one_second_animation() {
    // 16, 33, 50, ..., 983, 990
    let mut native: Vec<Timestamp> = (1..=59).map(|i| i * 50 / 3).collect();
    native.push(990);
    let logic: Vec<Timestamp> = (1..=49).map(|i| i * 20).collect();
    assert_eq!(native.len(), 60);
    assert_eq!(&native[..3], &[16, 33, 50]);
    assert_one_second_report(record_animation(&native, &logic, 1000));
}

#[test]
fn last_frame_on_stop_boundary_counts() {
    let native: Vec<Timestamp> = (1..=60).map(|i| i * 50 / 3).collect();
    let logic: Vec<Timestamp> = (1..=49).map(|i| i * 20).collect();
    assert_eq!(native.last(), Some(&1000));
    assert_one_second_report(record_animation(&native, &logic, 1000));
}

#[test]
fn lifecycle() {
    let controller = RecordingController::new(hub());
    assert_eq!(controller.stop(10), Ok(None));
    controller.start().unwrap();
    assert_eq!(controller.start(), Err(AlreadyRecordingError));
    controller.invalidate();
    controller.start().unwrap();
    assert_eq!(controller.stop(0), Err(ComputationFailed::InvalidInterval { elapsed_ms: 0 }));
    assert_eq!(controller.stop(10), Ok(None));
}

#[test]
fn concurrent_producers() {
    let hub = hub();
    hub.time().set(1);
    let controller = RecordingController::new(Arc::clone(&hub));
    controller.start().unwrap();

    let render = {
        let hub = Arc::clone(&hub);
        thread::spawn(move || {
            for _ in 0..600 {
                hub.native_frame();
            }
        })
    };
    let logic = {
        let hub = Arc::clone(&hub);
        thread::spawn(move || {
            for _ in 0..400 {
                hub.logic_frame();
            }
        })
    };
    render.join().unwrap();
    logic.join().unwrap();

    let report = controller.stop(11).unwrap().unwrap();
    assert_eq!(report.total_native_frames, 600);
    assert_eq!(report.total_logic_frames, 400);
    assert!((report.native_fps - 60_000.0).abs() < 1e-6);
}

#[test]
fn toast_shows_summary() {
    let hub = hub();
    let toasts = Arc::new(ToastQueue::new());
    let sink: Arc<dyn ReportSink> = Arc::new(DefaultSink::new(Arc::clone(&toasts), ToastLength::Long));
    let module = AnimationsDebug::new(
        RecordingController::new(Arc::clone(&hub)),
        Some(Arc::new(true) as Arc<dyn DeveloperSettings>),
        sink,
    );

    module.start_recording_fps().unwrap();
    for ts in (10..=500).step_by(10) {
        tick_native_at(&hub, ts);
    }
    let report = module.stop_recording_fps(500.0).unwrap();
    assert_eq!(report.total_native_frames, 50);
    assert_eq!(
        toasts.visible(),
        vec!["FPS: 100.00, 50 frames (30 expected)\nJS FPS: 0.00, 0 frames (30 expected)\nTotal Time MS: 500".to_string()]
    );
}

#[test]
fn extreme_stop_after_negative_start() {
    let hub = Arc::new(TickHub::new(ManualTime::new(-5)));
    let controller = RecordingController::new(Arc::clone(&hub));
    controller.start().unwrap();
    tick_native_at(&hub, 0);
    let report = controller.stop(i64::MAX).unwrap().unwrap();
    assert_eq!(report.total_time_ms, i64::MAX);
    assert_eq!(report.total_native_frames, 1);
    assert!(!controller.is_recording());
}
