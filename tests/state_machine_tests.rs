//! State machine tests for the countdown engine.
//!
//! These tests drive the public engine API with the manual scheduler and
//! the recording notifier, so whole countdowns run without touching the
//! wall clock.

use tokio::sync::mpsc;

use countdown::notify::{elapsed_alert, MockNotifier};
use countdown::timer::{CountdownTimer, ManualScheduler, TimerDuration, TimerEvent};
use countdown::types::TimerState;

// ============================================================================
// Test Helpers
// ============================================================================

type TestTimer = CountdownTimer<ManualScheduler, MockNotifier>;

struct Harness {
    timer: TestTimer,
    events: mpsc::UnboundedReceiver<TimerEvent>,
    scheduler: ManualScheduler,
    notifier: MockNotifier,
}

fn harness() -> Harness {
    let (tx, rx) = mpsc::unbounded_channel();
    let scheduler = ManualScheduler::new();
    let notifier = MockNotifier::new();
    let timer = CountdownTimer::new(scheduler.clone(), notifier.clone(), tx);
    Harness {
        timer,
        events: rx,
        scheduler,
        notifier,
    }
}

fn duration(minutes: u32, seconds: u32) -> TimerDuration {
    TimerDuration::new(minutes, seconds).unwrap()
}

impl Harness {
    fn drain_events(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    fn tick_times(&mut self, n: u32) {
        for _ in 0..n {
            self.timer.handle_tick().unwrap();
        }
    }
}

// ============================================================================
// Configure
// ============================================================================

#[test]
fn configured_duration_is_minutes_times_sixty_plus_seconds() {
    // The full dial: every minutes/seconds combination lands exactly
    for minutes in [0, 1, 7, 59] {
        for seconds in [0, 1, 30, 59] {
            let mut h = harness();
            h.timer.configure(duration(minutes, seconds)).unwrap();
            assert_eq!(h.timer.remaining_seconds(), minutes * 60 + seconds);
            assert_eq!(h.timer.total_seconds(), minutes * 60 + seconds);
            assert_eq!(h.timer.state(), TimerState::Idle);
        }
    }
}

#[test]
fn configure_emits_a_display_refresh() {
    let mut h = harness();
    h.timer.configure(duration(0, 45)).unwrap();

    let events = h.drain_events();
    assert_eq!(
        events,
        vec![TimerEvent::Tick {
            remaining_seconds: 45
        }]
    );
}

#[test]
fn configure_while_running_fails_and_leaves_state_unchanged() {
    let mut h = harness();
    h.timer.configure(duration(0, 30)).unwrap();
    h.timer.start().unwrap();
    h.tick_times(5);
    h.drain_events();

    let err = h.timer.configure(duration(5, 0)).unwrap_err();

    assert!(err.is_invalid_state());
    assert_eq!(h.timer.state(), TimerState::Running);
    assert_eq!(h.timer.remaining_seconds(), 25);
    assert!(h.drain_events().is_empty());
}

// ============================================================================
// Running
// ============================================================================

#[test]
fn n_ticks_leave_r_minus_n_remaining() {
    let mut h = harness();
    h.timer.configure(duration(2, 0)).unwrap();
    h.timer.start().unwrap();

    h.tick_times(45);

    assert_eq!(h.timer.remaining_seconds(), 120 - 45);
    assert_eq!(h.timer.state(), TimerState::Running);
}

#[test]
fn each_tick_reports_the_new_remaining_value() {
    let mut h = harness();
    h.timer.configure(duration(0, 3)).unwrap();
    h.timer.start().unwrap();
    h.drain_events();

    h.tick_times(2);

    let ticks: Vec<u32> = h
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            TimerEvent::Tick { remaining_seconds } => Some(remaining_seconds),
            _ => None,
        })
        .collect();
    assert_eq!(ticks, vec![2, 1]);
}

// ============================================================================
// Pause / Resume
// ============================================================================

#[test]
fn resume_continues_from_pause_point_without_drift() {
    let mut h = harness();
    h.timer.configure(duration(1, 0)).unwrap();
    h.timer.start().unwrap();

    h.tick_times(17);
    h.timer.pause().unwrap();
    assert_eq!(h.timer.remaining_seconds(), 43);
    assert_eq!(h.timer.state(), TimerState::Paused);

    h.timer.start().unwrap();

    // Never back at 60; elapsed time is not re-added
    assert_eq!(h.timer.remaining_seconds(), 43);
    assert_eq!(h.timer.state(), TimerState::Running);
}

#[test]
fn repeated_pause_resume_cycles_keep_the_count_exact() {
    let mut h = harness();
    h.timer.configure(duration(0, 30)).unwrap();
    h.timer.start().unwrap();

    for _ in 0..3 {
        h.tick_times(5);
        h.timer.pause().unwrap();
        h.timer.start().unwrap();
    }

    assert_eq!(h.timer.remaining_seconds(), 15);
}

#[test]
fn pause_cancels_the_schedule_and_blocks_ticks() {
    let mut h = harness();
    h.timer.configure(duration(0, 30)).unwrap();
    h.timer.start().unwrap();
    assert!(h.scheduler.is_scheduled());

    h.timer.pause().unwrap();

    assert!(!h.scheduler.is_scheduled());
    h.tick_times(10);
    assert_eq!(h.timer.remaining_seconds(), 30);
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn completion_notifies_once_with_the_fixed_payload_then_goes_idle() {
    let mut h = harness();
    h.timer.configure(duration(0, 5)).unwrap();
    h.timer.start().unwrap();

    h.tick_times(5);

    assert_eq!(h.notifier.notification_count(), 1);
    assert_eq!(h.notifier.get_notifications()[0], elapsed_alert());

    assert_eq!(h.timer.state(), TimerState::Idle);
    assert_eq!(h.timer.remaining_seconds(), 0);
    assert_eq!(h.timer.total_seconds(), 0);
    assert!(!h.scheduler.is_scheduled());
}

#[test]
fn completion_publishes_the_reset_to_listeners() {
    let mut h = harness();
    h.timer.configure(duration(0, 1)).unwrap();
    h.timer.start().unwrap();
    h.drain_events();

    h.tick_times(1);

    let events = h.drain_events();
    assert_eq!(
        events,
        vec![
            TimerEvent::Tick {
                remaining_seconds: 0
            },
            TimerEvent::Tick {
                remaining_seconds: 0
            },
            TimerEvent::StateChanged {
                state: TimerState::Idle
            },
        ]
    );
}

#[test]
fn paused_countdown_still_notifies_exactly_once() {
    let mut h = harness();
    h.timer.configure(duration(1, 0)).unwrap();
    h.timer.start().unwrap();

    h.tick_times(30);
    h.timer.pause().unwrap();
    assert_eq!(h.timer.remaining_seconds(), 30);

    h.timer.start().unwrap();
    h.tick_times(30);

    assert_eq!(h.notifier.notification_count(), 1);
    assert_eq!(h.timer.remaining_seconds(), 0);
    assert_eq!(h.timer.state(), TimerState::Idle);
}

#[test]
fn zero_duration_waits_one_tick_before_alerting() {
    let mut h = harness();
    h.timer.configure(duration(0, 0)).unwrap();
    h.timer.start().unwrap();

    // Starting alone does not alert
    assert_eq!(h.notifier.notification_count(), 0);
    assert_eq!(h.timer.state(), TimerState::Running);

    h.tick_times(1);

    assert_eq!(h.notifier.notification_count(), 1);
    assert_eq!(h.timer.state(), TimerState::Idle);
}

#[test]
fn timer_is_reusable_after_completion() {
    let mut h = harness();
    h.timer.configure(duration(0, 2)).unwrap();
    h.timer.start().unwrap();
    h.tick_times(2);
    assert_eq!(h.notifier.notification_count(), 1);

    // Second full run from the auto-reset Idle state
    h.timer.configure(duration(0, 3)).unwrap();
    h.timer.start().unwrap();
    h.tick_times(3);

    assert_eq!(h.notifier.notification_count(), 2);
    assert_eq!(h.timer.state(), TimerState::Idle);
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn reset_works_from_every_state() {
    // Idle
    let mut h = harness();
    h.timer.reset().unwrap();
    assert_eq!(h.timer.state(), TimerState::Idle);
    assert_eq!(h.timer.remaining_seconds(), 0);

    // Running
    let mut h = harness();
    h.timer.configure(duration(0, 30)).unwrap();
    h.timer.start().unwrap();
    h.tick_times(3);
    h.timer.reset().unwrap();
    assert_eq!(h.timer.state(), TimerState::Idle);
    assert_eq!(h.timer.remaining_seconds(), 0);
    assert_eq!(h.timer.total_seconds(), 0);
    assert!(!h.scheduler.is_scheduled());

    // Paused
    let mut h = harness();
    h.timer.configure(duration(0, 30)).unwrap();
    h.timer.start().unwrap();
    h.timer.pause().unwrap();
    h.timer.reset().unwrap();
    assert_eq!(h.timer.state(), TimerState::Idle);
    assert_eq!(h.timer.total_seconds(), 0);
}

#[test]
fn ticks_after_reset_are_inert() {
    let mut h = harness();
    h.timer.configure(duration(0, 10)).unwrap();
    h.timer.start().unwrap();
    h.timer.reset().unwrap();
    h.drain_events();

    h.tick_times(20);

    assert_eq!(h.timer.remaining_seconds(), 0);
    assert_eq!(h.notifier.notification_count(), 0);
    assert!(h.drain_events().is_empty());
}

#[test]
fn misuse_is_harmless() {
    let mut h = harness();

    // Pause before any start
    h.timer.pause().unwrap();
    assert_eq!(h.timer.state(), TimerState::Idle);

    // Double start holds a single schedule
    h.timer.configure(duration(0, 10)).unwrap();
    h.timer.start().unwrap();
    h.timer.start().unwrap();
    assert_eq!(h.scheduler.schedule_count(), 1);
}
