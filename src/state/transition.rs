//! Route transition state machine (pure).
//!
//! All transitions are pure functions over [`TransitionState`]; the single
//! deferred side effect (the view swap) is returned as a [`ScheduledSwap`]
//! descriptor for the shell to arm, so everything here is testable without
//! a clock.

use crate::model::{AnimationSpec, HostSnapshot, RouteId, TransitionAnimations};
use crate::state::scheduler::ScheduledSwap;
use std::time::Duration;

/// How long the outgoing view gets to animate before the swap.
///
/// Also handed to the renderer as the playback duration, so the exit
/// animation completes exactly as the incoming view mounts.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// What the tab-content container is currently showing.
///
/// `displayed_route` trails the host's `current_route` by [`SETTLE_DELAY`]
/// during a transition. The animation fields are transient: set when a
/// route change is observed, overwritten by the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionState {
    displayed_route: RouteId,
    exit_animation: Option<AnimationSpec>,
    enter_animation: Option<AnimationSpec>,
}

impl TransitionState {
    /// State for a freshly mounted container: shows the host's current
    /// route, nothing animating, no swap pending.
    pub fn new(current_route: RouteId) -> Self {
        Self {
            displayed_route: current_route,
            exit_animation: None,
            enter_animation: None,
        }
    }

    /// Route whose sub-view is mounted right now.
    pub fn displayed_route(&self) -> RouteId {
        self.displayed_route
    }

    /// Animation for the outgoing view, while a transition is in flight.
    pub fn exit_animation(&self) -> Option<AnimationSpec> {
        self.exit_animation
    }

    /// Animation for the incoming view.
    pub fn enter_animation(&self) -> Option<AnimationSpec> {
        self.enter_animation
    }
}

/// React to the host's current route changing from `previous` to `next`.
///
/// Picks the directional exit/enter pair from the display order and returns
/// the swap to schedule: a one-shot timer, keyed by `next`, that moves
/// `displayed_route` after [`SETTLE_DELAY`]. The caller must let this swap
/// replace any previously armed one; stacking two would let a stale swap
/// overwrite a newer route.
///
/// Equal routes are a no-op: unchanged state, nothing scheduled.
pub fn handle_route_change(
    state: TransitionState,
    previous: RouteId,
    next: RouteId,
) -> (TransitionState, Option<ScheduledSwap>) {
    if previous == next {
        return (state, None);
    }

    // Tied indices cannot happen for distinct routes; render an unanimated
    // swap if they ever do.
    let animations = TransitionAnimations::between(previous, next);
    let state = TransitionState {
        displayed_route: state.displayed_route,
        exit_animation: animations.map(|a| a.exit),
        enter_animation: animations.map(|a| a.enter),
    };

    (state, Some(ScheduledSwap::new(next)))
}

/// Suppress the directional enter animation while the host is inactive.
///
/// Applies only when `inactive` was set in both the previous and the next
/// snapshot, and only to the enter animation; whatever exit animation the
/// route change computed is left alone. Runs after [`handle_route_change`]
/// within the same update.
pub fn apply_inactive_override(
    mut state: TransitionState,
    previous: &HostSnapshot,
    next: &HostSnapshot,
) -> TransitionState {
    if previous.inactive && next.inactive {
        state.enter_animation = Some(AnimationSpec::plain_fade_in());
    }
    state
}

/// Full reaction to one host-store update.
///
/// Route-change handling first, inactive override second.
pub fn handle_update(
    state: TransitionState,
    previous: &HostSnapshot,
    next: &HostSnapshot,
) -> (TransitionState, Option<ScheduledSwap>) {
    let (state, swap) =
        handle_route_change(state, previous.current_route, next.current_route);
    let state = apply_inactive_override(state, previous, next);
    (state, swap)
}

/// The deferred mutation carried by a fired swap timer: mount `route`.
///
/// The exit animation is spent once the swap lands; the enter animation
/// stays, since the incoming view animates in from this moment.
pub fn complete_swap(mut state: TransitionState, route: RouteId) -> TransitionState {
    state.displayed_route = route;
    state.exit_animation = None;
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
