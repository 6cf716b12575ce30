use crate::app::App;
use crate::ui::utils::display_width;
use crate::widget::Phase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// (key, icon, description) rows for the current phase.
fn phase_keys(app: &App) -> (&'static str, Vec<(String, &'static str, &'static str)>) {
    let k = &app.keys;
    let nav = format!("{}/{}", k.display(&k.nav_down), k.display(&k.nav_up));

    match app.phase() {
        Phase::Idle => (
            "Welcome",
            vec![
                (
                    format!("{}/{}", k.display(&k.start), k.display(&k.start_alt)),
                    "🎶",
                    "Start creating",
                ),
                (k.display(&k.sign_up), "📝", "Sign up"),
                (k.display(&k.sign_in), "🔑", "Sign in"),
            ],
        ),
        Phase::GenreSelection => (
            "Genres",
            vec![
                (nav, "↕", "Move"),
                (k.display(&k.select), "✔", "Pick genre"),
                ("1-9,0".to_string(), "🔢", "Pick by number"),
                (k.display(&k.close), "✖", "Close"),
            ],
        ),
        Phase::GenreConfirmed => (
            "Genre",
            vec![
                (
                    format!("{}/{}", k.display(&k.generate), k.display(&k.generate_alt)),
                    "⚡",
                    "Generate playlist",
                ),
                (k.display(&k.sign_up), "📝", "Sign up"),
                (k.display(&k.sign_in), "🔑", "Sign in"),
            ],
        ),
        Phase::Loading => ("Generating", Vec::new()),
        Phase::PlaylistShown => (
            "Playlist",
            vec![
                (nav, "↕", "Scroll"),
                (k.display(&k.close_playlist), "✖", "Close"),
            ],
        ),
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    // 🎹 WhichKey-style floating popup
    let (title, keys) = phase_keys(app);
    let global_keys = [
        (app.keys.display(&app.keys.toggle_keyhints), "❓", "Toggle keys"),
        (app.keys.display(&app.keys.quit), "🚪", "Quit"),
    ];

    let row = |key: &str, icon: &'static str, desc: &'static str, color: Color| {
        Line::from(vec![
            Span::styled(
                format!(" {:<7} ", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::raw(format!("{} ", icon)),
            Span::styled(desc, Style::default().fg(theme.text)),
        ])
    };

    let mut lines: Vec<Line> = keys
        .iter()
        .map(|(key, icon, desc)| row(key.as_str(), *icon, *desc, theme.yellow))
        .collect();
    if !keys.is_empty() {
        lines.push(Line::from(""));
    }

    // Global section
    lines.push(Line::from(Span::styled(
        "────── Global ──────",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.extend(
        global_keys
            .iter()
            .map(|(key, icon, desc)| row(key.as_str(), *icon, *desc, theme.green)),
    );

    // Fit content exactly 📏
    let content_width = keys
        .iter()
        .chain(global_keys.iter())
        .map(|(k, _i, d)| 2 + usize::from(display_width(k)).max(7) + 3 + 3 + d.len())
        .max()
        .unwrap_or(20)
        .max(22);

    let area = f.area();
    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_width = (content_width as u16 + 4).min(area.width.saturating_sub(2));

    // Position at bottom-right
    let popup_x = area.width.saturating_sub(popup_width + 1);
    let popup_y = area.height.saturating_sub(popup_height + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}
