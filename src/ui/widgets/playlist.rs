use crate::app::App;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// Title, blank line, blank line, hint
const CHROME_ROWS: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let keys = &app.keys;
    let state = app.widget.state();
    let playlist = state.playlist();

    let mut lines = Vec::new();

    // ━━━ CENTERED TITLE ━━━
    let title = match state.selected_genre() {
        Some(genre) => format!(
            "  {}  {} PLAYLIST  ·  {} songs  ",
            genre.emoji,
            genre.name.to_uppercase(),
            playlist.len()
        ),
        None => format!("  PLAYLIST  ·  {} songs  ", playlist.len()),
    };
    lines.push(
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    // ━━━ CONTENT ━━━
    let content_h = usize::from(area.height.saturating_sub(CHROME_ROWS));
    if playlist.is_empty() {
        lines.push(
            Line::from(Span::styled(
                "The generator returned no songs",
                Style::default().fg(theme.overlay),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        let num_width = playlist.len().to_string().len();
        let text_width = usize::from(area.width).saturating_sub(num_width + 8);
        // Same bound as App::handle_action, so every scroll step moves the view
        let start_idx = app.playlist_scroll.min(playlist.len() - 1);

        for (offset, item) in playlist.iter().skip(start_idx).take(content_h).enumerate() {
            let num = start_idx + offset + 1;
            let title_w = text_width * 3 / 5;
            let artist_w = text_width.saturating_sub(title_w);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {num:>num_width$}.  "),
                    Style::default().fg(theme.overlay),
                ),
                Span::styled(
                    truncate(&item.title, title_w),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" — ", Style::default().fg(theme.surface)),
                Span::styled(truncate(&item.artist, artist_w), Style::default().fg(theme.cyan)),
            ]));
        }
    }

    // ━━━ HINT ━━━
    let used = lines.len();
    let filler = usize::from(area.height).saturating_sub(used + 1);
    lines.extend(std::iter::repeat(Line::from("")).take(filler));
    lines.push(
        Line::from(Span::styled(
            format!(
                "{}/{} scroll · {} close",
                keys.display(&keys.nav_down),
                keys.display(&keys.nav_up),
                keys.display(&keys.close_playlist)
            ),
            Style::default().fg(theme.overlay),
        ))
        .alignment(Alignment::Center),
    );

    f.render_widget(Paragraph::new(lines), area);
}
