use crate::app::App;
use crate::notify::Severity;
use crate::ui::utils::display_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const SLIDE_MS: f32 = 300.0;

/// Horizontal offset of the toast for the slide-in/out animation.
fn slide_offset(width: u16, since_start_ms: u128, until_deadline_ms: u128) -> u16 {
    if since_start_ms < SLIDE_MS as u128 {
        // Entrance: slide left, cubic out
        let t = since_start_ms as f32 / SLIDE_MS;
        let ease = 1.0 - (1.0 - t).powi(3);
        (width as f32 * (1.0 - ease)) as u16
    } else if until_deadline_ms < SLIDE_MS as u128 {
        // Exit: slide right, cubic in
        let t = (SLIDE_MS - until_deadline_ms as f32) / SLIDE_MS;
        (width as f32 * t.powi(3)) as u16
    } else {
        0
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let Some(toast) = app.toasts.current() else {
        return;
    };
    let theme = &app.theme;
    let now = Instant::now();

    // Auto-dismiss handled in App::on_tick()
    let (icon, accent) = match toast.notice.severity {
        Severity::Info => ("ℹ", theme.severity(Severity::Info)),
        Severity::Error => ("✖", theme.severity(Severity::Error)),
    };
    let message = format!("{icon} {}", toast.notice.message);

    let screen = f.area();
    let width = (display_width(&message) + 6).min(screen.width.saturating_sub(4));
    let height = 3;
    let target_x = screen.width.saturating_sub(width + 1); // Top-right fixed

    let x = target_x
        + slide_offset(
            width,
            now.duration_since(toast.start_time).as_millis(),
            toast.deadline.saturating_duration_since(now).as_millis(),
        );

    // Don't render if off-screen (start/end)
    if x >= screen.width {
        return;
    }
    let visible_area = Rect::new(x, 1, width, height).intersection(screen);
    if visible_area.is_empty() {
        return;
    }

    f.render_widget(Clear, visible_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Reset));

    let style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let text = Paragraph::new(Line::from(vec![Span::styled(message, style)]))
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(text, visible_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_offsets() {
        assert_eq!(slide_offset(40, 0, 3000), 40);
        assert_eq!(slide_offset(40, 1500, 1500), 0);
        assert_eq!(slide_offset(40, 2999, 0), 40);
        assert!(slide_offset(40, 150, 2850) < 40);
    }
}
