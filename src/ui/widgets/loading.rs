use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
    Frame,
};

use crate::ui::utils::display_width;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
// 16 ms ticks, so a frame lasts roughly 100 ms
const TICKS_PER_FRAME: u64 = 6;

pub struct Spinner {
    frame: usize,
    style: Style,
    label: Option<String>,
}

impl Spinner {
    pub fn new(ticks: u64) -> Self {
        Self {
            frame: ((ticks / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize,
            style: Style::default(),
            label: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let symbol = SPINNER_FRAMES[self.frame];
        let text = match self.label {
            Some(label) => format!("{symbol} {label}"),
            None => symbol.to_string(),
        };

        let x = area.x + area.width.saturating_sub(display_width(&text)) / 2;
        let y = area.y + area.height / 2;
        buf.set_stringn(x, y, text, usize::from(area.width), self.style);
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let label = match app.widget.state().selected_genre() {
        Some(genre) => format!("Generating your {} playlist…", genre.name),
        None => "Generating your playlist…".to_string(),
    };

    let spinner = Spinner::new(app.ticks)
        .with_style(
            Style::default()
                .fg(theme.magenta)
                .add_modifier(Modifier::BOLD),
        )
        .with_label(label);
    f.render_widget(spinner, area);
}
