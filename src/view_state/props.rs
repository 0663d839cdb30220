//! Props for the animated tab-content container.

use crate::model::{AnimationSpec, HostSnapshot, RouteId};
use crate::state::{TransitionState, SETTLE_DELAY};
use std::time::Duration;

/// Everything the animated container needs for one frame.
///
/// `displayed_route` selects which sub-view is mounted and doubles as the
/// animate-in trigger; the host's current route is the animate-out trigger.
/// During a transition the two differ for exactly one settle delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContentProps {
    /// Sub-view to mount; also the animate-in trigger.
    pub displayed_route: RouteId,
    /// Host's current route; the animate-out trigger.
    pub animate_out_trigger: RouteId,
    /// Animation for the outgoing view, while one is in flight.
    pub exit_animation: Option<AnimationSpec>,
    /// Animation for the incoming view.
    pub enter_animation: Option<AnimationSpec>,
    /// Uniform playback duration, equal to the settle delay.
    pub duration: Duration,
    /// Forwarded to the mounted sub-view untouched.
    pub keyboard_active: bool,
}

impl TabContentProps {
    /// Assemble props from the controller state and the latest snapshot.
    pub fn build(state: &TransitionState, snapshot: &HostSnapshot) -> Self {
        Self {
            displayed_route: state.displayed_route(),
            animate_out_trigger: snapshot.current_route,
            exit_animation: state.exit_animation(),
            enter_animation: state.enter_animation(),
            duration: SETTLE_DELAY,
            keyboard_active: snapshot.keyboard_active,
        }
    }

    /// Whether a transition is still in flight (swap not yet landed).
    pub fn in_flight(&self) -> bool {
        self.displayed_route != self.animate_out_trigger
    }
}
