use crate::ui::session::SessionState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    session: &'a SessionState,
}

impl<'a> Header<'a> {
    pub fn new(session: &'a SessionState) -> Self {
        Self { session }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let user = match &self.session.current_user {
            Some(user) => Span::styled(user.name.clone(), text_style),
            None => Span::styled("Guest", Style::default().fg(MUTED_TEXT)),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "ARSIM",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.session.current_view.title(), text_style),
            Span::styled("  │  ", separator_style),
            user,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
