use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct MainLayout {
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Footer needs 1 line at the bottom always.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        footer_area: chunks[1],
    }
}

/// A `width` x `height` box centred in `area`, clamped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered(area, 40, 12);
        assert_eq!((popup.width, popup.height), (40, 12));
        assert_eq!((popup.x, popup.y), (20, 6));

        let clamped = centered(Rect::new(0, 0, 10, 5), 40, 12);
        assert_eq!((clamped.width, clamped.height), (10, 5));
    }

    #[test]
    fn test_footer_is_last_line() {
        let layout = get_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.footer_area, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.body_area.height, 23);
    }
}
