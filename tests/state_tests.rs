//! Tests for the progress state tracker.
//!
//! These cover the counter semantics (arithmetic increments, monotonic
//! sets, completion) and the time-derived figures over a scripted clock.

use std::time::Duration;

use headway::ProgressState;

mod common;
use common::helpers::*;

#[test]
fn test_incr_accumulates() {
    let mut state = ProgressState::new(100);
    state.incr(30);
    state.incr(20);
    assert_eq!(state.current(), 50);
}

#[test]
fn test_incr_accepts_negative_deltas() {
    // Deltas are applied arithmetically, without validation.
    let mut state = ProgressState::new(100);
    state.incr(30);
    state.incr(-10);
    assert_eq!(state.current(), 20);
}

#[test]
fn test_set_is_monotonic() {
    let mut state = ProgressState::new(100);
    state.set(40);
    state.set(25);
    assert_eq!(state.current(), 40, "a lower value is silently ignored");
    state.set(60);
    assert_eq!(state.current(), 60);
}

#[test]
fn test_complete_determinate() {
    let mut state = ProgressState::new(100);
    state.incr(42);
    state.complete();
    assert_eq!(state.current(), 100);
    assert!(state.done());
    assert_eq!(state.fraction(), 1.0);
}

#[test]
fn test_complete_freezes_indeterminate_total() {
    let mut state = ProgressState::new(0);
    assert!(state.indeterminate());
    state.incr(37);
    state.complete();
    assert_eq!(state.total(), 37);
    assert!(state.done());
    assert!(!state.indeterminate());
}

#[test]
fn test_fresh_indeterminate_is_not_done() {
    let state = ProgressState::new(0);
    assert!(state.indeterminate());
    assert!(!state.done());
}

#[test]
fn test_fraction_indeterminate_is_zero() {
    let mut state = ProgressState::new(0);
    state.incr(1_000_000);
    assert_eq!(state.fraction(), 0.0);
}

#[test]
fn test_fraction_is_unclamped() {
    let mut state = ProgressState::new(100);
    state.incr(150);
    assert!(state.fraction() > 1.0);
}

#[test]
fn test_elapsed_follows_the_clock() {
    let clock = ManualClock::new();
    let state = ProgressState::with_clock(100, clock.clone());
    assert_eq!(state.elapsed(), Duration::ZERO);
    clock.advance(Duration::from_millis(1500));
    assert_eq!(state.elapsed(), Duration::from_millis(1500));
}

#[test]
fn test_rate_projects_total_in_the_first_second() {
    let clock = ManualClock::new();
    let mut state = ProgressState::with_clock(1000, clock.clone());
    state.incr(1);
    clock.advance(Duration::from_millis(500));
    // 1000 units projected over the 500 ms bucket.
    assert!((state.rate() - 2000.0).abs() < 1e-9);
}

#[test]
fn test_rate_settles_on_current_over_elapsed() {
    let clock = ManualClock::new();
    let mut state = ProgressState::with_clock(1000, clock.clone());
    state.incr(500);
    clock.advance(Duration::from_secs(2));
    assert!((state.rate() - 250.0).abs() < 1e-9);
}

#[test]
fn test_remaining_from_estimate() {
    let clock = ManualClock::new();
    let mut state = ProgressState::with_clock(100, clock.clone());
    state.incr(50);
    clock.advance(Duration::from_secs(2));
    // 25 units/s over 100 units: 4 s estimated, 2 s spent.
    assert_eq!(state.remaining(), Duration::from_secs(2));
}

#[test]
fn test_remaining_floors_at_zero() {
    let clock = ManualClock::new();
    let mut state = ProgressState::with_clock(100, clock.clone());
    // Overrunning the total pushes the estimate below the elapsed time.
    state.incr(150);
    clock.advance(Duration::from_secs(10));
    assert_eq!(state.remaining(), Duration::ZERO);
}

#[test]
fn test_reset_restarts_the_run() {
    let clock = ManualClock::new();
    let mut state = ProgressState::with_clock(100, clock.clone());
    state.incr(100);
    clock.advance(Duration::from_secs(5));
    assert!(state.done());

    state.reset(50);
    assert_eq!(state.current(), 0);
    assert_eq!(state.total(), 50);
    assert!(!state.done());
    assert_eq!(state.elapsed(), Duration::ZERO);
}
