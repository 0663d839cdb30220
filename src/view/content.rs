//! Animated tab-content container.
//!
//! Mounts the sub-view selected by `displayed_route` and applies the
//! stand-in presentation of the active animation spec: a small horizontal
//! offset for the slide and a dim pass for the fade.

use crate::view::subview::{RouteTable, SubViewCtx};
use crate::view_state::{fade_dimmed, slide_offset, TabContentProps};
use ratatui::{layout::Rect, Frame};

/// Snapshot of the active animation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentPhase {
    /// Spec being presented: the exit spec while the swap is pending, the
    /// enter spec after it lands, `None` when idle.
    pub spec: Option<crate::model::AnimationSpec>,
    /// Playback progress in `[0, 1]`.
    pub progress: f32,
}

impl ContentPhase {
    /// Nothing animating; content renders in place.
    pub fn idle() -> Self {
        Self {
            spec: None,
            progress: 1.0,
        }
    }
}

/// Render the mounted sub-view with the current animation phase applied.
pub fn render_content(
    frame: &mut Frame,
    area: Rect,
    props: &TabContentProps,
    phase: ContentPhase,
    table: &RouteTable,
) {
    let (offset, dimmed) = match phase.spec {
        Some(spec) => (
            spec.slide()
                .map(|slide| slide_offset(slide, phase.progress, area.width))
                .unwrap_or(0),
            fade_dimmed(spec.fade(), phase.progress),
        ),
        None => (0, false),
    };

    let ctx = SubViewCtx {
        keyboard_active: props.keyboard_active,
        dimmed,
    };

    table
        .get(props.displayed_route)
        .render(frame, shifted_area(area, offset), &ctx);
}

/// Shift `area` horizontally by `offset` cells, clamped to its own bounds.
fn shifted_area(area: Rect, offset: i16) -> Rect {
    if offset == 0 || area.width == 0 {
        return area;
    }
    let magnitude = offset.unsigned_abs().min(area.width.saturating_sub(1));
    if offset > 0 {
        Rect {
            x: area.x + magnitude,
            width: area.width - magnitude,
            ..area
        }
    } else {
        Rect {
            width: area.width - magnitude,
            ..area
        }
    }
}
