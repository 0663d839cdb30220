//! Domain model types (pure).

pub mod animation;
pub mod host;
pub mod key_action;
pub mod route;

pub use animation::{AnimationSpec, FadeKind, SlideKind, TransitionAnimations};
pub use host::HostSnapshot;
pub use key_action::KeyAction;
pub use route::{RouteId, RouteParseError};
