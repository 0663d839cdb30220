//! Route transition state machine (pure).
//!
//! All state transitions are pure functions testable without a TUI or a
//! real clock; the shell owns the one timer.

pub mod scheduler;
pub mod transition;

// Re-export for convenience
pub use scheduler::{ScheduledSwap, SwapTimer, TimerKey};
pub use transition::{
    apply_inactive_override, complete_swap, handle_route_change, handle_update,
    TransitionState, SETTLE_DELAY,
};
