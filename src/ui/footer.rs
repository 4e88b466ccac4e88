use crate::ui::app::{StatusLevel, StatusMessage};
use crate::ui::session::View;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    view: View,
    status: Option<&'a StatusMessage>,
}

impl<'a> Footer<'a> {
    pub fn new(view: View, status: Option<&'a StatusMessage>) -> Self {
        Self { view, status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match self.status {
            Some(status) => {
                let color = match status.level {
                    StatusLevel::Info => STATUS_OK,
                    StatusLevel::Error => STATUS_ERROR,
                };
                (format!(" {}", status.text), Style::default().fg(color))
            }
            None => (hints(self.view).to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain box-drawing characters.
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints(view: View) -> &'static str {
    match view {
        View::Home => " Enter: Start │ L: Log in │ S: Sign up │ B: Builder │ Ctrl+Q: Quit",
        View::Auth => " Tab: Next │ Enter: Submit │ Ctrl+T: Login/Sign up │ Esc: Back │ Ctrl+Q: Quit",
        View::Builder => {
            " Tab/↑↓: Move │ Enter: Add │ Ctrl+D: Remove │ Ctrl+E: Export │ Ctrl+R: Reset │ Ctrl+L: Log out │ Ctrl+Q: Quit"
        }
    }
}
