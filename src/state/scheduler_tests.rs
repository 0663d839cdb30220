//! Tests for the one-shot swap timer.
//!
//! Time is injected as explicit `Instant`s, so the delay law, the
//! cancel-on-replace rule, and teardown are all exercised without sleeping.

use super::*;
use crate::model::RouteId;
use std::time::{Duration, Instant};

// ===== Test Helpers =====

fn armed_timer(route: RouteId, now: Instant) -> SwapTimer {
    let mut timer = SwapTimer::new();
    timer.arm(ScheduledSwap::new(route), now);
    timer
}

// ===== Delay law =====

#[test]
fn does_not_fire_before_the_settle_delay() {
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::Send, now);

    for elapsed_ms in [0, 1, 75, 149] {
        let probe = now + Duration::from_millis(elapsed_ms);
        assert_eq!(
            timer.fire_due(probe),
            None,
            "Must stay silent at {elapsed_ms}ms, before the 150ms deadline"
        );
    }
}

#[test]
fn fires_exactly_at_the_deadline() {
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::Send, now);

    assert_eq!(timer.fire_due(now + SETTLE_DELAY), Some(RouteId::Send));
}

#[test]
fn fires_when_polled_late() {
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::History, now);

    assert_eq!(
        timer.fire_due(now + Duration::from_secs(5)),
        Some(RouteId::History),
        "A late poll still delivers the swap"
    );
}

#[test]
fn fires_at_most_once() {
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::Send, now);
    let late = now + Duration::from_secs(1);

    assert_eq!(timer.fire_due(late), Some(RouteId::Send));
    assert_eq!(timer.fire_due(late), None, "One-shot: a second poll yields nothing");
    assert!(!timer.is_armed());
}

// ===== Cancel-on-replace =====

#[test]
fn arming_replaces_the_pending_swap() {
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::Send, now);

    // Second request lands before the first deadline.
    timer.arm(ScheduledSwap::new(RouteId::Settings), now + Duration::from_millis(50));

    assert_eq!(
        timer.fire_due(now + Duration::from_millis(150)),
        None,
        "The replaced swap must not fire at its old deadline"
    );
    assert_eq!(
        timer.fire_due(now + Duration::from_millis(200)),
        Some(RouteId::Settings),
        "Only the most recent swap takes effect"
    );
}

#[test]
fn rearming_the_same_route_keeps_one_pending_swap() {
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::Receive, now);
    timer.arm(ScheduledSwap::new(RouteId::Receive), now);

    assert_eq!(timer.fire_due(now + SETTLE_DELAY), Some(RouteId::Receive));
    assert_eq!(
        timer.fire_due(now + SETTLE_DELAY),
        None,
        "Two identical requests collapse into one pending swap"
    );
}

// ===== Teardown =====

#[test]
fn cancel_prevents_the_swap_from_ever_firing() {
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::Settings, now);

    let cancelled = timer.cancel();

    assert_eq!(cancelled, Some(TimerKey::for_route(RouteId::Settings)));
    assert_eq!(
        timer.fire_due(now + Duration::from_secs(10)),
        None,
        "A cancelled swap must never fire"
    );
}

#[test]
fn cancel_is_a_safe_no_op_when_nothing_is_armed() {
    let mut timer = SwapTimer::new();
    assert_eq!(timer.cancel(), None);

    // Also after the timer already fired.
    let now = Instant::now();
    let mut timer = armed_timer(RouteId::Send, now);
    let _ = timer.fire_due(now + SETTLE_DELAY);
    assert_eq!(timer.cancel(), None);
}

// ===== Keys =====

#[test]
fn cancellation_key_matches_the_scheduled_key() {
    // Arming and cancelling go through the same per-route key, so teardown
    // always targets the timer that is actually pending.
    let swap = ScheduledSwap::new(RouteId::History);
    let now = Instant::now();
    let mut timer = SwapTimer::new();
    timer.arm(swap.clone(), now);

    assert_eq!(timer.armed_key(), Some(swap.key()));
    assert_eq!(timer.cancel().as_ref(), Some(swap.key()));
}

#[test]
fn keys_are_unique_per_route() {
    let keys: Vec<TimerKey> = RouteId::ORDER.iter().map(|r| TimerKey::for_route(*r)).collect();
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b, "Each route owns its own timer key");
        }
    }
    assert_eq!(
        TimerKey::for_route(RouteId::Balance).as_str(),
        "delay-route-change:balance"
    );
}
