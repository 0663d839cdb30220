//! tabflow
//!
//! TUI wallet shell with animated tab-content transitions.
//!
//! The pure core lives in [`state`]: a transition controller that picks a
//! directional slide/fade pair from the fixed tab order and defers the view
//! swap behind a one-shot settle timer. The impure shell in [`view`] wires
//! the controller to a ratatui terminal; the five wallet screens themselves
//! are injected through a route table and stay replaceable.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod tests;
