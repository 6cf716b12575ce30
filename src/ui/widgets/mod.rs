pub mod confirmed;
pub mod genre_popup;
pub mod landing;
pub mod loading;
pub mod playlist;
pub mod popups;

use crate::theme::Theme;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// `[ key ] Label` styled as a button.
pub fn button(theme: &Theme, key: String, label: &str, accent: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.base)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {label} "),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
    ]
}
