//! TUI rendering and terminal management (impure shell).
//!
//! Owns the terminal, the one swap timer, and the host-snapshot simulation;
//! every state transition goes through the pure functions in [`crate::state`]
//! with time passed in explicitly.

pub mod content;
pub mod subview;
pub mod tabs;
pub mod wallet;

pub use content::{render_content, ContentPhase};
pub use subview::{RouteTable, SubView, SubViewCtx, SubViewEvent};
pub use wallet::default_route_table;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{HostSnapshot, KeyAction, RouteId};
use crate::state::{self, SwapTimer, TransitionState};
use crate::view_state::{transition_progress, TabContentProps};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: TransitionState,
    snapshot: HostSnapshot,
    swap_timer: SwapTimer,
    /// When the in-flight animation (exit, then enter) started.
    transition_started: Option<Instant>,
    route_table: RouteTable,
    key_bindings: KeyBindings,
    top_bar_open: bool,
    tick_rate_ms: u64,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up terminal in raw mode with alternate screen.
    pub fn new(config: &ResolvedConfig, route_table: RouteTable) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, config, route_table))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal (used by tests).
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        route_table: RouteTable,
    ) -> Self {
        Self {
            terminal,
            state: TransitionState::new(config.initial_route),
            snapshot: HostSnapshot::with_route(config.initial_route),
            swap_timer: SwapTimer::new(),
            transition_started: None,
            route_table,
            key_bindings: KeyBindings::default(),
            top_bar_open: config.top_bar_open,
            tick_rate_ms: config.tick_rate_ms,
        }
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(self.tick_rate_ms);
        loop {
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key, Instant::now()) {
                        break;
                    }
                }
            }
            self.tick(Instant::now());
            self.draw()?;
        }
        self.unmount();
        Ok(())
    }

    /// Dispatch one key press. Returns `true` when the app should quit.
    ///
    /// Bound keys become shell actions; everything else falls through to
    /// the mounted sub-view, whose events are routed back here.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if let Some(action) = self.key_bindings.get(key) {
            return self.handle_action(action, now);
        }

        let displayed = self.state.displayed_route();
        if let Some(event) = self.route_table.get_mut(displayed).on_key(key) {
            match event {
                SubViewEvent::TabSwitch(route) => self.request_route(route, now),
                SubViewEvent::CloseTopBar => self.top_bar_open = false,
            }
        }
        false
    }

    /// Apply a shell action. Returns `true` when the app should quit.
    fn handle_action(&mut self, action: KeyAction, now: Instant) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::NextTab => {
                let next = self.snapshot.current_route.next();
                self.request_route(next, now);
            }
            KeyAction::PrevTab => {
                let prev = self.snapshot.current_route.prev();
                self.request_route(prev, now);
            }
            KeyAction::SelectTab(n) => {
                if let Some(route) = n.checked_sub(1).and_then(|i| RouteId::ORDER.get(i)) {
                    self.request_route(*route, now);
                }
            }
            KeyAction::ToggleKeyboard => {
                let mut next = self.snapshot;
                next.keyboard_active = !next.keyboard_active;
                self.apply_snapshot(next, now);
            }
            KeyAction::ToggleInactive => {
                let mut next = self.snapshot;
                next.inactive = !next.inactive;
                self.apply_snapshot(next, now);
            }
            KeyAction::OpenTopBar => self.top_bar_open = true,
        }
        false
    }

    /// Ask the host simulation for a different current route.
    fn request_route(&mut self, route: RouteId, now: Instant) {
        let mut next = self.snapshot;
        next.current_route = route;
        self.apply_snapshot(next, now);
    }

    /// Feed an updated host snapshot through the transition controller.
    fn apply_snapshot(&mut self, next: HostSnapshot, now: Instant) {
        if next == self.snapshot {
            return;
        }

        let (state, swap) = state::handle_update(self.state.clone(), &self.snapshot, &next);
        self.state = state;

        if let Some(swap) = swap {
            debug!(key = %swap.key(), route = %swap.route(), "Scheduling delayed route swap");
            self.swap_timer.arm(swap, now);
            self.transition_started = Some(now);
        }

        self.snapshot = next;
    }

    /// Advance time-driven state: fire a due swap, retire finished animations.
    fn tick(&mut self, now: Instant) {
        if let Some(route) = self.swap_timer.fire_due(now) {
            self.state = state::complete_swap(self.state.clone(), route);
            // The incoming view animates in from the moment it mounts.
            self.transition_started = Some(now);
            return;
        }

        let finished = self.transition_started.is_some_and(|started| {
            now.saturating_duration_since(started) >= state::SETTLE_DELAY
        });
        if finished && !self.swap_timer.is_armed() {
            self.transition_started = None;
        }
    }

    /// Unmount-time teardown: a pending swap must never outlive the app.
    fn unmount(&mut self) {
        if let Some(key) = self.swap_timer.cancel() {
            debug!(%key, "Cancelled swap on unmount");
        }
    }

    /// Render one frame.
    fn draw(&mut self) -> Result<(), TuiError> {
        let props = TabContentProps::build(&self.state, &self.snapshot);
        let phase = self.content_phase(Instant::now(), &props);
        let top_bar_open = self.top_bar_open;

        let Self {
            terminal,
            route_table,
            ..
        } = self;

        terminal.draw(|frame| {
            let area = frame.area();
            let (top_bar_area, tabs_area, content_area) = if top_bar_open {
                let chunks = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(area);
                (Some(chunks[0]), chunks[1], chunks[2])
            } else {
                let chunks =
                    Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
                (None, chunks[0], chunks[1])
            };

            if let Some(bar) = top_bar_area {
                render_top_bar(frame, bar);
            }
            tabs::render_tab_bar(frame, tabs_area, props.animate_out_trigger);
            content::render_content(frame, content_area, &props, phase, route_table);
        })?;

        Ok(())
    }

    /// Animation phase for the current frame.
    ///
    /// While the swap is pending the exit spec is presented; once it lands
    /// the enter spec takes over until its playback window closes.
    fn content_phase(&self, now: Instant, props: &TabContentProps) -> ContentPhase {
        let Some(started) = self.transition_started else {
            return ContentPhase::idle();
        };
        let spec = if props.in_flight() {
            props.exit_animation
        } else {
            props.enter_animation
        };
        ContentPhase {
            spec,
            progress: transition_progress(started, now, props.duration),
        }
    }
}

fn render_top_bar(frame: &mut Frame, area: Rect) {
    let bar = Paragraph::new(" tabflow · ]/[ or arrows switch tabs · 1-5 jump · q quit ")
        .style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(bar, area);
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit even when the loop errors.
///
/// Note: Logging must be initialized by the caller before calling this.
pub fn run_with_config(config: &ResolvedConfig, route_table: RouteTable) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config, route_table)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
