//! Dashboard footer component
//!
//! Renders key bindings, or the current notification when no modal is open

use super::super::state::{DashboardState, Modal};
use super::super::utils::get_level_color;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // An open modal keeps its key hints on screen
    let (footer_text, footer_color) = match &state.notification {
        Some(notification) if !state.modal.is_open() => (
            notification.message.clone(),
            get_level_color(notification.level),
        ),
        _ => (key_hints(&state.modal).to_string(), Color::Cyan),
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

fn key_hints(modal: &Modal) -> &'static str {
    match modal {
        Modal::Closed => "[A] Add | [E] Edit | [D] Delete | [R] Reload | [Q] Quit",
        Modal::Adding(_) | Modal::Editing { .. } => {
            "[Tab] Next field | [Enter] Save | [Esc] Cancel"
        }
        Modal::ConfirmDelete(_) => "[Y] Confirm delete | [N] Keep",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::{Food, FoodId};
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn footer_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 2)).unwrap();
        terminal
            .draw(|f| render_footer(f, Rect::new(0, 0, 80, 2), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state_with_notification() -> DashboardState {
        let mut state =
            DashboardState::new("http://localhost:3333".to_string(), UIConfig::new(false));
        state.notify("Loaded 2 foods".to_string(), LogLevel::Info);
        state
    }

    #[test]
    fn test_notification_shown_when_no_modal() {
        let state = state_with_notification();
        assert!(footer_text(&state).contains("Loaded 2 foods"));
    }

    #[test]
    // Opening the delete confirmation brings its keys back over a notification.
    fn test_modal_hints_win_over_notification() {
        let mut state = state_with_notification();
        state.ask_delete(Food {
            id: FoodId(1),
            name: "a".to_string(),
            image: String::new(),
            price: "1".to_string(),
            description: String::new(),
            available: true,
        });

        let text = footer_text(&state);
        assert!(text.contains("[Y] Confirm delete"));
        assert!(!text.contains("Loaded 2 foods"));
    }
}
