//! Dashboard header component
//!
//! Renders the title and the sync status gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and sync status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "FOODBOARD v{}  |  {}",
        env!("CARGO_PKG_VERSION"),
        state.api_url
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // In-flight requests animate the gauge; otherwise it shows the list size
    let (progress_text, gauge_color, progress_percent) = if state.in_flight > 0 {
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            format!("SYNCING - {} request(s) in flight", state.in_flight),
            Color::LightYellow,
            progress,
        )
    } else if !state.loaded {
        ("NOT LOADED - press R to load".to_string(), Color::Red, 0)
    } else {
        (
            format!("IN SYNC - {} plates", state.store.len()),
            Color::LightGreen,
            100,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
