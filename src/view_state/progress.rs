//! Presentation math for the stand-in animation presenter.
//!
//! The real playback engine lives outside this crate; the TUI shell only
//! needs a deterministic mapping from (spec, elapsed time) to a horizontal
//! cell offset and a dim flag.

use crate::model::{FadeKind, SlideKind};
use std::time::{Duration, Instant};

/// Widest slide offset, as a fraction of the content width. "Small" slides
/// move a short distance, not the full pane.
const SLIDE_SPAN_RATIO: f32 = 0.125;

/// Fraction of the playback duration elapsed, clamped to `[0, 1]`.
pub fn transition_progress(started: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Horizontal offset in cells for a slide at the given progress.
///
/// In-slides start displaced and converge on zero; out-slides start at zero
/// and drift away. Positive offsets move right.
pub fn slide_offset(slide: SlideKind, progress: f32, width: u16) -> i16 {
    let span = (f32::from(width) * SLIDE_SPAN_RATIO).round();
    let progress = progress.clamp(0.0, 1.0);
    let cells = match slide {
        SlideKind::InRightSmall => span * (1.0 - progress),
        SlideKind::InLeftSmall => -span * (1.0 - progress),
        SlideKind::OutLeftSmall => -span * progress,
        SlideKind::OutRightSmall => span * progress,
    };
    cells.round() as i16
}

/// Whether the fade renders the view dimmed at the given progress.
///
/// Fade-in is dim for the first half and bright after; fade-out mirrors it.
pub fn fade_dimmed(fade: FadeKind, progress: f32) -> bool {
    match fade {
        FadeKind::In => progress < 0.5,
        FadeKind::Out => progress >= 0.5,
    }
}
