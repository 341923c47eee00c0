//! Performance monitor tests.

use polysketch::perf::{OperationStats, PerfMonitor};

#[test]
fn frame_timing_records_samples() {
    let mut monitor = PerfMonitor::new();
    assert_eq!(monitor.total_frames(), 0);
    assert_eq!(monitor.average_frame_time(), 0.0);

    monitor.begin_frame();
    let ms = monitor.end_frame().expect("frame was begun");
    assert!(ms >= 0.0);
    assert_eq!(monitor.total_frames(), 1);
    assert!(monitor.average_frame_time() >= 0.0);
}

#[test]
fn end_frame_without_begin_returns_none() {
    let mut monitor = PerfMonitor::new();
    assert_eq!(monitor.end_frame(), None);
}

#[test]
fn estimated_fps_is_zero_without_samples() {
    let monitor = PerfMonitor::new();
    assert_eq!(monitor.estimated_fps(), 0.0);
    assert_eq!(monitor.slow_frame_percentage(), 0.0);
    assert_eq!(monitor.max_frame_time(), 0.0);
}

#[test]
fn operation_stats_track_average_and_extremes() {
    let mut stats = OperationStats::default();
    stats.record(2.0);
    stats.record(4.0);
    stats.record(6.0);

    assert_eq!(stats.count(), 3);
    assert_eq!(stats.average(), 4.0);
    assert_eq!(stats.max_ms(), 6.0);
}
