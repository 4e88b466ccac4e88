//! Right-hand live preview, laid out to the panel width.

use crate::projection::{layout, LineKind, Preview, PreviewLine};
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, TAG_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

fn style_for(kind: LineKind) -> Style {
    let base = Style::default().fg(HEADER_TEXT);
    match kind {
        LineKind::Name => base.fg(ACCENT).add_modifier(Modifier::BOLD),
        LineKind::Title => base.add_modifier(Modifier::ITALIC),
        LineKind::Contact | LineKind::EntrySub => base.fg(MUTED_TEXT),
        LineKind::Heading => base
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineKind::Tags => base.fg(TAG_TEXT),
        LineKind::EntryHead => base.add_modifier(Modifier::BOLD),
        LineKind::Body | LineKind::Blank => base,
    }
}

fn styled(line: PreviewLine) -> Line<'static> {
    let style = style_for(line.kind);
    Line::styled(line.text, style)
}

pub fn preview_lines(preview: &Preview, columns: usize) -> Vec<Line<'static>> {
    layout(preview, columns).into_iter().map(styled).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ResumeDocument;

    #[test]
    fn empty_document_shows_placeholders() {
        let lines = preview_lines(&Preview::project(&ResumeDocument::default()), 60);
        assert_eq!(lines[0].to_string(), "Your Name");
        assert_eq!(lines[0].style, style_for(LineKind::Name));
    }
}
