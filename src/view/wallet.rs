//! Placeholder wallet screens.
//!
//! Stand-ins for the real sub-views so the shell runs end to end. Each
//! renders a bordered pane; a couple of them report events back to the
//! shell to exercise the pass-through paths.

use crate::model::RouteId;
use crate::view::subview::{RouteTable, SubView, SubViewCtx, SubViewEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn pane_style(ctx: &SubViewCtx) -> Style {
    if ctx.dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_pane(frame: &mut Frame, area: Rect, ctx: &SubViewCtx, title: &str, lines: Vec<Line>) {
    let paragraph = Paragraph::new(lines)
        .style(pane_style(ctx))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}

/// Balance overview placeholder.
pub struct BalanceView;

impl SubView for BalanceView {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &SubViewCtx) {
        render_pane(
            frame,
            area,
            ctx,
            "Balance",
            vec![
                Line::from("Available: 1 337.00"),
                Line::from("Pending:       0.00"),
                Line::from(""),
                Line::from("Enter: send funds"),
            ],
        );
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<SubViewEvent> {
        // Send-funds shortcut on the balance screen.
        match key.code {
            KeyCode::Enter => Some(SubViewEvent::TabSwitch(RouteId::Send)),
            _ => None,
        }
    }
}

/// Send form placeholder.
pub struct SendView;

impl SubView for SendView {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &SubViewCtx) {
        let keyboard = if ctx.keyboard_active {
            "keyboard: up"
        } else {
            "keyboard: hidden"
        };
        render_pane(
            frame,
            area,
            ctx,
            "Send",
            vec![
                Line::from("To:     <address>"),
                Line::from("Amount: <amount>"),
                Line::from(""),
                Line::from(keyboard),
                Line::from("Esc: close top bar"),
            ],
        );
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<SubViewEvent> {
        match key.code {
            KeyCode::Esc => Some(SubViewEvent::CloseTopBar),
            _ => None,
        }
    }
}

/// Receive address placeholder.
pub struct ReceiveView;

impl SubView for ReceiveView {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &SubViewCtx) {
        render_pane(
            frame,
            area,
            ctx,
            "Receive",
            vec![
                Line::from("Address:"),
                Line::from("  tab1qexample000000000000000000"),
            ],
        );
    }
}

/// Transaction history placeholder.
pub struct HistoryView;

impl SubView for HistoryView {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &SubViewCtx) {
        render_pane(
            frame,
            area,
            ctx,
            "History",
            vec![
                Line::from("-  12.50  yesterday"),
                Line::from("+ 100.00  last week"),
            ],
        );
    }
}

/// Settings placeholder.
pub struct SettingsView;

impl SubView for SettingsView {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &SubViewCtx) {
        render_pane(
            frame,
            area,
            ctx,
            "Settings",
            vec![Line::from("Node: default"), Line::from("Theme: dark")],
        );
    }
}

/// Route table wired to the placeholder screens.
pub fn default_route_table() -> RouteTable {
    RouteTable::new(
        Box::new(BalanceView),
        Box::new(SendView),
        Box::new(ReceiveView),
        Box::new(HistoryView),
        Box::new(SettingsView),
    )
}
