//! End-to-end walk through a tab switch, without a terminal.
//!
//! Drives the pure controller, the swap timer, and the container props the
//! way the shell does, checking what the renderer would observe at each
//! point in time.

use crate::model::{AnimationSpec, FadeKind, HostSnapshot, RouteId, SlideKind};
use crate::state::{complete_swap, handle_update, SwapTimer, TransitionState, SETTLE_DELAY};
use crate::view_state::TabContentProps;
use std::time::{Duration, Instant};

fn active(route: RouteId) -> HostSnapshot {
    HostSnapshot::with_route(route)
}

#[test]
fn full_switch_from_balance_to_history_and_back() {
    let t0 = Instant::now();
    let mut timer = SwapTimer::new();
    let mut state = TransitionState::new(RouteId::Balance);
    let mut snapshot = active(RouteId::Balance);

    // Host switches to history (rightward).
    let next = active(RouteId::History);
    let (new_state, swap) = handle_update(state, &snapshot, &next);
    state = new_state;
    timer.arm(swap.expect("route change schedules a swap"), t0);
    snapshot = next;

    // During the settle window the renderer sees the old view exiting.
    let props = TabContentProps::build(&state, &snapshot);
    assert!(props.in_flight());
    assert_eq!(props.displayed_route, RouteId::Balance);
    assert_eq!(props.animate_out_trigger, RouteId::History);
    assert_eq!(
        props.exit_animation.and_then(|spec| spec.slide()),
        Some(SlideKind::OutLeftSmall)
    );
    assert_eq!(props.duration, SETTLE_DELAY);
    assert_eq!(timer.fire_due(t0 + Duration::from_millis(100)), None);

    // The swap lands at the deadline.
    let landed = timer.fire_due(t0 + SETTLE_DELAY).expect("swap fires");
    state = complete_swap(state, landed);

    let props = TabContentProps::build(&state, &snapshot);
    assert!(!props.in_flight());
    assert_eq!(props.displayed_route, RouteId::History);
    assert_eq!(props.exit_animation, None, "Exit spec is spent");
    assert_eq!(
        props.enter_animation,
        Some(AnimationSpec::Directional {
            slide: SlideKind::InRightSmall,
            fade: FadeKind::In,
        })
    );

    // Back to send (leftward) to cover the mirrored pair.
    let t1 = t0 + Duration::from_secs(1);
    let next = active(RouteId::Send);
    let (new_state, swap) = handle_update(state, &snapshot, &next);
    state = new_state;
    timer.arm(swap.expect("second switch schedules a swap"), t1);
    snapshot = next;

    let props = TabContentProps::build(&state, &snapshot);
    assert_eq!(
        props.exit_animation.and_then(|spec| spec.slide()),
        Some(SlideKind::OutRightSmall)
    );
    assert_eq!(
        props.enter_animation.and_then(|spec| spec.slide()),
        Some(SlideKind::InLeftSmall)
    );

    let landed = timer.fire_due(t1 + SETTLE_DELAY).expect("second swap fires");
    state = complete_swap(state, landed);
    assert_eq!(
        TabContentProps::build(&state, &snapshot).displayed_route,
        RouteId::Send
    );
}

#[test]
fn interrupted_switch_never_shows_the_abandoned_route() {
    let t0 = Instant::now();
    let mut timer = SwapTimer::new();
    let mut state = TransitionState::new(RouteId::Balance);
    let mut snapshot = active(RouteId::Balance);

    // First request: balance -> receive.
    let next = active(RouteId::Receive);
    let (new_state, swap) = handle_update(state, &snapshot, &next);
    state = new_state;
    timer.arm(swap.unwrap(), t0);
    snapshot = next;

    // 80ms in, the host switches again: receive -> settings.
    let t1 = t0 + Duration::from_millis(80);
    let next = active(RouteId::Settings);
    let (new_state, swap) = handle_update(state, &snapshot, &next);
    state = new_state;
    timer.arm(swap.unwrap(), t1);
    snapshot = next;

    // The first deadline passes silently; receive is never mounted.
    assert_eq!(timer.fire_due(t0 + SETTLE_DELAY), None);
    assert_eq!(
        TabContentProps::build(&state, &snapshot).displayed_route,
        RouteId::Balance
    );

    let landed = timer.fire_due(t1 + SETTLE_DELAY).expect("replacement fires");
    assert_eq!(landed, RouteId::Settings);
    state = complete_swap(state, landed);
    assert_eq!(state.displayed_route(), RouteId::Settings);
}

#[test]
fn unmount_during_the_settle_window_freezes_the_displayed_route() {
    let t0 = Instant::now();
    let mut timer = SwapTimer::new();
    let state = TransitionState::new(RouteId::Send);
    let snapshot = active(RouteId::Send);

    let next = active(RouteId::Balance);
    let (state, swap) = handle_update(state, &snapshot, &next);
    timer.arm(swap.unwrap(), t0);

    // Unmount before the deadline.
    timer.cancel();

    assert_eq!(timer.fire_due(t0 + Duration::from_secs(10)), None);
    assert_eq!(
        state.displayed_route(),
        RouteId::Send,
        "Without the timer the swap never applies"
    );
}
