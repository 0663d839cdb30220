//! Wallet tab bar widget.
//!
//! Displays the five fixed tabs using ratatui's Tabs widget. The highlight
//! follows the host's current route, so it moves immediately on a switch
//! while the content below settles through its transition.

use crate::model::RouteId;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab bar label for a route.
pub fn tab_label(route: RouteId) -> &'static str {
    match route {
        RouteId::Balance => "Balance",
        RouteId::Send => "Send",
        RouteId::Receive => "Receive",
        RouteId::History => "History",
        RouteId::Settings => "Settings",
    }
}

/// Render the wallet tab bar with `selected` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, selected: RouteId) {
    let titles: Vec<Line> = RouteId::ORDER
        .iter()
        .map(|route| Line::from(tab_label(*route)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Wallet"))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow))
        .select(selected.index());

    frame.render_widget(tabs, area);
}
