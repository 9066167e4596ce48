//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Operation;
use crate::logging::LogLevel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for an operation
pub fn get_operation_color(operation: &Operation) -> Color {
    match operation {
        Operation::Load => Color::Cyan,
        Operation::Create => Color::Green,
        Operation::Update => Color::Yellow,
        Operation::Delete => Color::LightRed,
    }
}

/// Color of a status-line notification
pub fn get_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::LightYellow,
        _ => Color::LightGreen,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("error sending request") {
        return "Backend unreachable".to_string();
    }
    msg.to_string()
}

/// Truncates to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// A rectangle of the given percentage size centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-03-14 09:26:53"), "03-14 09:26");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("Ao molho", 20), "Ao molho");
        assert_eq!(truncate("Macarrão com vegetais", 6), "Macar…");
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert!((58..=62).contains(&popup.width));
        assert!(popup.right() <= area.right() && popup.bottom() <= area.bottom());
        assert!(popup.x > 0 && popup.y > 0);
    }
}
