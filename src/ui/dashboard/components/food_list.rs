//! Dashboard food list component
//!
//! Renders one row per food plate, highlighting the selected one

use super::super::state::DashboardState;
use super::super::utils::truncate;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

/// Render the food table.
pub fn render_food_list(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!("FOOD PLATES ({})", state.store.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed));

    if state.store.is_empty() {
        let message = if state.loaded {
            "No plates yet. Press A to add one."
        } else {
            "Loading..."
        };
        f.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let rows = state.store.foods().iter().map(|food| {
        let availability = if food.available {
            Span::styled("Available", Style::default().fg(Color::LightGreen))
        } else {
            Span::styled("Unavailable", Style::default().fg(Color::Red))
        };
        Row::new(vec![
            Cell::from(food.id.to_string()),
            Cell::from(truncate(&food.name, 28)),
            Cell::from(format!("R$ {}", food.price)),
            Cell::from(Line::from(availability)),
            Cell::from(truncate(&food.description, 60)),
        ])
    });

    let header = Row::new(vec!["#", "Name", "Price", "Status", "Description"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(28),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::Rgb(60, 30, 30))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}
