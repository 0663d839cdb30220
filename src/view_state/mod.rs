//! Pure view-state layer.
//!
//! Computes what the rendering shell consumes (the animated-container
//! props and the per-frame presentation math) without touching a terminal.

pub mod progress;
pub mod props;

pub use progress::{fade_dimmed, slide_offset, transition_progress};
pub use props::TabContentProps;
