//! Cross-module tests for the transition core.

mod route_switch_flow;
