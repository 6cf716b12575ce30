use super::button;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let keys = &app.keys;

    let start = button(theme, keys.display(&keys.start), "Start Creating", theme.magenta);

    let mut account = button(theme, keys.display(&keys.sign_up), "Sign Up", theme.blue);
    account.push(Span::raw("   "));
    account.extend(button(theme, keys.display(&keys.sign_in), "Sign In", theme.cyan));

    let mut lines = vec![Line::from(""); usize::from(area.height.saturating_sub(9) / 2)];
    lines.extend([
        Line::from(Span::styled(
            "🎧  Your Vibe, Your Playlist",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pick a genre and we'll build a playlist around it.",
            Style::default().fg(theme.overlay),
        )),
        Line::from(""),
        Line::from(start),
        Line::from(""),
        Line::from(account),
    ]);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
