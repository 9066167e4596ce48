//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ███████╗  ██████╗   ██████╗  ██████╗   ██████╗    ██████╗    █████╗   ██████╗   ██████╗
  ██╔════╝ ██╔═══██╗ ██╔═══██╗ ██╔══██╗  ██╔══██╗  ██╔═══██╗  ██╔══██╗  ██╔══██╗  ██╔══██╗
  █████╗   ██║   ██║ ██║   ██║ ██║  ██║  ██████╔╝  ██║   ██║  ███████║  ██████╔╝  ██║  ██║
  ██╔══╝   ██║   ██║ ██║   ██║ ██║  ██║  ██╔══██╗  ██║   ██║  ██╔══██║  ██╔══██╗  ██║  ██║
  ██║      ╚██████╔╝ ╚██████╔╝ ██████╔╝  ██████╔╝  ╚██████╔╝  ██║  ██║  ██║  ██║  ██████╔╝
  ╚═╝       ╚═════╝   ╚═════╝  ╚═════╝   ╚═════╝    ╚═════╝   ╚═╝  ╚═╝  ╚═╝  ╚═╝  ╚═════╝
"#;

/// Draws the logo centered on screen, with the backend being contacted below it.
pub fn render_splash(f: &mut Frame, api_url: &str) {
    let logo_style = Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), logo_style)))
        .collect();

    lines.push(Line::from(" "));
    lines.push(Line::from(vec![
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        ),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("loading plates from {}", api_url),
            Style::default().fg(Color::Gray),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        "press any key to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16;
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_splash_shows_backend_url() {
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal
            .draw(|f| render_splash(f, "http://localhost:3333"))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("loading plates from http://localhost:3333"));
    }
}
