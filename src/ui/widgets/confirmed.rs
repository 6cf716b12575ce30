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

    let message = app.widget.confirmation_message().unwrap_or_default();

    let mut account = button(theme, keys.display(&keys.sign_up), "Sign Up", theme.blue);
    account.push(Span::raw("   "));
    account.extend(button(theme, keys.display(&keys.sign_in), "Sign In", theme.cyan));

    let mut lines = vec![Line::from(""); usize::from(area.height.saturating_sub(7) / 2)];
    lines.extend([
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(theme.yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(button(
            theme,
            keys.display(&keys.generate),
            "Generate Playlist",
            theme.green,
        )),
        Line::from(""),
        Line::from(account),
    ]);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
