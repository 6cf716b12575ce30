use crate::app::App;
use crate::genre::catalog;
use crate::ui::layout::centered;
use ratatui::{
    layout::Alignment,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let keys = &app.keys;
    let genres = catalog();

    // Rows + blank + hint + borders
    let height = genres.len() as u16 + 4;
    let popup = centered(area, 40, height);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = genres
        .iter()
        .enumerate()
        .map(|(i, genre)| {
            let is_sel = i == app.genre_cursor;
            // 1..9 then 0
            let shortcut = (i + 1) % 10;
            let marker = if is_sel { "▶" } else { " " };
            let style = if is_sel {
                Style::default()
                    .fg(theme.base)
                    .bg(theme.magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(theme.magenta)),
                Span::styled(format!("{shortcut} "), Style::default().fg(theme.overlay)),
                Span::styled(format!(" {}  {} ", genre.emoji, genre.name), style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!(
                "{} select · {} close",
                keys.display(&keys.select),
                keys.display(&keys.close)
            ),
            Style::default().fg(theme.overlay),
        ))
        .alignment(Alignment::Center),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.magenta))
        .title(" Choose a Genre ")
        .title_alignment(Alignment::Center);

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
