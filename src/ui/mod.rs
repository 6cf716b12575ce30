pub mod layout;
pub mod utils;
pub mod widgets;

use crate::app::App;
use crate::widget::Phase;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Draws the whole screen. Only reads from `app`.
pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = &app.theme;

    // 1. Layout
    let main_layout = layout::get_main_layout(area);

    // 2. Frame
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.surface))
        .title(Span::styled(
            " vibelist ",
            Style::default()
                .fg(theme.magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let body = block.inner(main_layout.body_area);
    f.render_widget(block, main_layout.body_area);

    // 3. Phase panel
    match app.phase() {
        Phase::Idle => widgets::landing::render(f, body, app),
        Phase::GenreSelection => {
            widgets::landing::render(f, body, app);
            widgets::genre_popup::render(f, body, app);
        }
        Phase::GenreConfirmed => widgets::confirmed::render(f, body, app),
        Phase::Loading => widgets::loading::render(f, body, app),
        Phase::PlaylistShown => widgets::playlist::render(f, body, app),
    }

    // 4. Footer Hint (if no popup active)
    if !app.show_keyhints {
        let hint = Line::from(vec![
            Span::styled(
                format!(" {} ", app.keys.display(&app.keys.toggle_keyhints)),
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys", Style::default().fg(theme.overlay)),
        ]);
        let footer = Paragraph::new(hint).alignment(Alignment::Right);
        f.render_widget(footer, main_layout.footer_area);
    }

    // 5. Popups (Overlays)
    widgets::popups::render(f, app);
}
