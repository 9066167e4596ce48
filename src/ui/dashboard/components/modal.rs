//! Dashboard modal component
//!
//! Renders the add/edit form or the delete confirmation over the dashboard

use super::super::state::{DashboardState, Modal};
use super::super::utils::centered_rect;
use crate::ui::form::{FoodForm, FormField};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Render the open modal, if any.
pub fn render_modal(f: &mut Frame, state: &DashboardState) {
    match &state.modal {
        Modal::Closed => {}
        Modal::Adding(form) => render_form(f, "NEW PLATE", form),
        Modal::Editing { food, form } => {
            render_form(f, &format!("EDIT PLATE #{}", food.id), form)
        }
        Modal::ConfirmDelete(food) => {
            let area = centered_rect(50, 20, f.area());
            let text = vec![
                Line::from(format!("Delete #{} '{}'?", food.id, food.name)),
                Line::from(""),
                Line::from(Span::styled(
                    "[Y] Delete   [N] Keep",
                    Style::default().fg(Color::LightRed),
                )),
            ];
            let block = Block::default()
                .title("CONFIRM")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Red));
            f.render_widget(Clear, area);
            f.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
        }
    }
}

fn render_form(f: &mut Frame, title: &str, form: &FoodForm) {
    let area = centered_rect(60, 50, f.area());

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let focused = form.focused() == field;
        let marker = if field.is_required() { "*" } else { " " };
        let label_style = if focused {
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if focused { "▏" } else { "" };

        lines.push(Line::from(Span::styled(
            format!("{}{}", field, marker),
            label_style,
        )));
        lines.push(Line::from(format!("  {}{}", form.value(field), cursor)));
        lines.push(Line::from(""));
    }

    if let Some(error) = form.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::LightRed))
        .padding(Padding::horizontal(1));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
