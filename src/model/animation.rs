//! Animation specifications handed to the playback collaborator.
//!
//! A spec names what to play; playing it is someone else's job. Directional
//! specs pair a small slide with a fade, chosen by comparing the ordinal
//! positions of the outgoing and incoming routes.

use crate::model::route::RouteId;
use std::cmp::Ordering;
use std::fmt;

/// Slide component of a directional animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    /// Incoming view slides in from the right edge.
    InRightSmall,
    /// Incoming view slides in from the left edge.
    InLeftSmall,
    /// Outgoing view slides out toward the left edge.
    OutLeftSmall,
    /// Outgoing view slides out toward the right edge.
    OutRightSmall,
}

impl SlideKind {
    /// Playback name understood by the animation collaborator.
    pub fn as_str(self) -> &'static str {
        match self {
            SlideKind::InRightSmall => "slideInRightSmall",
            SlideKind::InLeftSmall => "slideInLeftSmall",
            SlideKind::OutLeftSmall => "slideOutLeftSmall",
            SlideKind::OutRightSmall => "slideOutRightSmall",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fade component of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadeKind {
    /// Fade from transparent to opaque.
    In,
    /// Fade from opaque to transparent.
    Out,
}

impl FadeKind {
    /// Playback name understood by the animation collaborator.
    pub fn as_str(self) -> &'static str {
        match self {
            FadeKind::In => "fadeIn",
            FadeKind::Out => "fadeOut",
        }
    }
}

impl fmt::Display for FadeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named animation to play on one side of a tab transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationSpec {
    /// Slide-plus-fade pair used for normal directional transitions.
    Directional {
        /// Slide half of the pair.
        slide: SlideKind,
        /// Fade half of the pair.
        fade: FadeKind,
    },
    /// Plain single fade, used when the host context is inactive.
    Fade(FadeKind),
}

impl AnimationSpec {
    /// The plain fade-in override spec.
    pub const fn plain_fade_in() -> Self {
        AnimationSpec::Fade(FadeKind::In)
    }

    /// Playback names in the order the collaborator applies them.
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            AnimationSpec::Directional { slide, fade } => vec![slide.as_str(), fade.as_str()],
            AnimationSpec::Fade(fade) => vec![fade.as_str()],
        }
    }

    /// Fade component of this spec.
    pub fn fade(&self) -> FadeKind {
        match self {
            AnimationSpec::Directional { fade, .. } => *fade,
            AnimationSpec::Fade(fade) => *fade,
        }
    }

    /// Slide component, if this spec has one.
    pub fn slide(&self) -> Option<SlideKind> {
        match self {
            AnimationSpec::Directional { slide, .. } => Some(*slide),
            AnimationSpec::Fade(_) => None,
        }
    }
}

/// Exit/enter animation pair for one directional tab transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionAnimations {
    /// Played on the outgoing view.
    pub exit: AnimationSpec,
    /// Played on the incoming view.
    pub enter: AnimationSpec,
}

impl TransitionAnimations {
    /// Animation pair for moving between two routes.
    ///
    /// Moving right (next sits after previous in the display order) slides
    /// the old view out left and the new view in from the right; moving
    /// left mirrors that. Returns `None` when the indices tie, which cannot
    /// happen for distinct routes; callers treat it as an unanimated swap.
    pub fn between(previous: RouteId, next: RouteId) -> Option<Self> {
        match next.index().cmp(&previous.index()) {
            Ordering::Greater => Some(Self {
                exit: AnimationSpec::Directional {
                    slide: SlideKind::OutLeftSmall,
                    fade: FadeKind::Out,
                },
                enter: AnimationSpec::Directional {
                    slide: SlideKind::InRightSmall,
                    fade: FadeKind::In,
                },
            }),
            Ordering::Less => Some(Self {
                exit: AnimationSpec::Directional {
                    slide: SlideKind::OutRightSmall,
                    fade: FadeKind::Out,
                },
                enter: AnimationSpec::Directional {
                    slide: SlideKind::InLeftSmall,
                    fade: FadeKind::In,
                },
            }),
            Ordering::Equal => None,
        }
    }
}
