use crate::ProgressTimer;

use std::time::Duration;

fn default_timer() -> ProgressTimer {
    ProgressTimer::new(Duration::from_millis(100), Duration::from_secs(5))
}

#[test]
fn test_stopped_timer_does_not_progress() {
    let mut timer = default_timer();

    assert!(!timer.tick());
    assert_eq!(timer.progress(), 0.0);
}

#[test]
fn test_story_completes_on_the_fiftieth_tick() {
    let mut timer = default_timer();
    timer.start();

    for _ in 0..49 {
        assert!(!timer.tick());
    }
    assert!((timer.progress() - 0.98).abs() < 1e-9);
    assert!(timer.tick());
    assert_eq!(timer.progress(), 1.0);
}

#[test]
fn test_paused_timer_keeps_progress() {
    let mut timer = default_timer();
    timer.start();
    timer.tick();
    timer.pause();

    for _ in 0..100 {
        assert!(!timer.tick());
    }

    assert!((timer.progress() - 0.02).abs() < 1e-9);
    assert!(timer.is_paused());
    assert!(timer.is_running());
}

#[test]
fn test_restart_resets_progress_but_not_pause() {
    let mut timer = default_timer();
    timer.start();
    timer.tick();
    timer.pause();

    timer.start();

    assert_eq!(timer.progress(), 0.0);
    assert!(timer.is_paused());
}

#[test]
fn test_zero_duration_is_complete() {
    let mut timer = ProgressTimer::new(Duration::from_millis(100), Duration::ZERO);
    timer.start();

    assert_eq!(timer.progress(), 1.0);
    assert!(timer.tick());
}
