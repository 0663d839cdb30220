//! One-shot delayed-swap timer.
//!
//! The transition state machine returns [`ScheduledSwap`] descriptors; the
//! shell owns a single [`SwapTimer`] that arms them against real deadlines.
//! Time is always passed in, never read, so the delay and teardown laws are
//! testable with hand-built `Instant`s.

use crate::model::RouteId;
use crate::state::transition::SETTLE_DELAY;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Identity of a pending swap timer, unique per target route.
///
/// Arming and cancelling go through the same key, so teardown always
/// cancels the timer that is actually pending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey(String);

impl TimerKey {
    /// Key for the swap that mounts `route`.
    pub fn for_route(route: RouteId) -> Self {
        Self(format!("delay-route-change:{route}"))
    }

    /// String form, for logging.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptor for the deferred `displayed_route := route` mutation.
///
/// Pure value: says what to do and when, does not do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSwap {
    key: TimerKey,
    delay: Duration,
    route: RouteId,
}

impl ScheduledSwap {
    /// Swap to `route` after the standard settle delay.
    pub fn new(route: RouteId) -> Self {
        Self {
            key: TimerKey::for_route(route),
            delay: SETTLE_DELAY,
            route,
        }
    }

    /// Timer identity.
    pub fn key(&self) -> &TimerKey {
        &self.key
    }

    /// How long after arming the swap fires.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Route the swap will mount.
    pub fn route(&self) -> RouteId {
        self.route
    }
}

#[derive(Debug)]
struct ArmedSwap {
    key: TimerKey,
    deadline: Instant,
    route: RouteId,
}

/// Holder for at most one armed swap per controller instance.
///
/// Arming replaces any not-yet-fired swap, so a stale swap can never fire
/// after a newer route change and overwrite it.
#[derive(Debug, Default)]
pub struct SwapTimer {
    armed: Option<ArmedSwap>,
}

impl SwapTimer {
    /// Timer with nothing armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `swap` to fire at `now + swap.delay()`, replacing any pending one.
    pub fn arm(&mut self, swap: ScheduledSwap, now: Instant) {
        if let Some(stale) = self.armed.take() {
            debug!(stale = %stale.key, replacement = %swap.key, "Replacing pending swap");
        }
        self.armed = Some(ArmedSwap {
            deadline: now + swap.delay,
            key: swap.key,
            route: swap.route,
        });
    }

    /// Fire the armed swap if its deadline has passed.
    ///
    /// Yields the route to mount at most once; the timer disarms on firing.
    pub fn fire_due(&mut self, now: Instant) -> Option<RouteId> {
        if self.armed.as_ref().is_some_and(|s| now >= s.deadline) {
            let fired = self.armed.take()?;
            debug!(key = %fired.key, "Swap timer fired");
            return Some(fired.route);
        }
        None
    }

    /// Unconditional teardown cancellation.
    ///
    /// Returns the cancelled key; `None` (a no-op) when nothing was armed
    /// or the timer already fired.
    pub fn cancel(&mut self) -> Option<TimerKey> {
        let cancelled = self.armed.take()?;
        debug!(key = %cancelled.key, "Cancelled pending swap");
        Some(cancelled.key)
    }

    /// Whether a swap is waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Key of the armed swap, if any.
    pub fn armed_key(&self) -> Option<&TimerKey> {
        self.armed.as_ref().map(|s| &s.key)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
