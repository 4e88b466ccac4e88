use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer bands of the screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Editor on the left, preview on the right. `preview_percent` is the
/// preview's share of the width.
pub fn split_builder(body: Rect, preview_percent: u16) -> (Rect, Rect) {
    let preview_percent = preview_percent.min(100);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - preview_percent),
            Constraint::Percentage(preview_percent),
        ])
        .split(body);
    (chunks[0], chunks[1])
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.y, 21);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn builder_split_honors_percent() {
        let (editor, preview) = split_builder(Rect::new(0, 0, 100, 10), 40);
        assert_eq!(editor.width, 60);
        assert_eq!(preview.width, 40);
        assert_eq!(preview.x, 60);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 40, 20), 50, 10);
        assert_eq!(rect, Rect::new(0, 5, 40, 10));
    }
}
