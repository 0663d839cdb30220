//! Sub-view seam: the injected route table and the events sub-views hand
//! back to the parent shell.
//!
//! The real wallet screens live outside this crate; anything implementing
//! [`SubView`] can be mounted. The shell only ever selects from the table
//! by route and forwards events, it never looks inside a view.

use crate::model::RouteId;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Events a sub-view hands back to the parent shell.
///
/// The shell owns the responses; sub-views only report intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubViewEvent {
    /// The sub-view asks the parent to switch tabs.
    TabSwitch(RouteId),
    /// The sub-view asks the parent to close the top bar.
    CloseTopBar,
}

/// Per-frame context forwarded to the mounted sub-view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubViewCtx {
    /// Whether an on-screen keyboard is up.
    pub keyboard_active: bool,
    /// Whether the fade stand-in wants the view rendered dimmed.
    pub dimmed: bool,
}

/// One mountable wallet screen.
pub trait SubView {
    /// Draw the screen into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &SubViewCtx);

    /// React to a key the shell did not consume.
    fn on_key(&mut self, _key: KeyEvent) -> Option<SubViewEvent> {
        None
    }
}

/// Read-only mapping from each route to its sub-view.
///
/// Constructor-injected into the shell and never mutated by it; tests swap
/// in their own views.
pub struct RouteTable {
    views: [Box<dyn SubView>; 5],
}

impl RouteTable {
    /// Table with one view per route, in display order.
    pub fn new(
        balance: Box<dyn SubView>,
        send: Box<dyn SubView>,
        receive: Box<dyn SubView>,
        history: Box<dyn SubView>,
        settings: Box<dyn SubView>,
    ) -> Self {
        Self {
            views: [balance, send, receive, history, settings],
        }
    }

    /// Sub-view for `route`.
    pub fn get(&self, route: RouteId) -> &dyn SubView {
        &*self.views[route.index()]
    }

    /// Mutable sub-view for `route`, for key dispatch.
    pub fn get_mut(&mut self, route: RouteId) -> &mut dyn SubView {
        &mut *self.views[route.index()]
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable").finish_non_exhaustive()
    }
}
