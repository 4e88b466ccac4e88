//! Left-hand form: personal fields, summary, skills and the two entry lists.
//!
//! Items are drawn in focus-ring order so the focused line can be found
//! while building.

use crate::document::{ListKind, ScalarField};
use crate::projection::layout::display_safe;
use crate::projection::{EditorRow, EditorView};
use crate::ui::focus::FocusTarget;
use crate::ui::resume::ResumeState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, TAG_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const CURSOR: &str = "▏";

pub struct EditorLines {
    pub lines: Vec<Line<'static>>,
    /// First line of the focused item.
    pub focus_line: usize,
}

struct Builder {
    focus: FocusTarget,
    lines: Vec<Line<'static>>,
    focus_line: usize,
}

impl Builder {
    fn heading(&mut self, text: &'static str) {
        if !self.lines.is_empty() {
            self.lines.push(Line::from(""));
        }
        self.lines.push(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    }

    fn input(&mut self, target: FocusTarget, indent: usize, label: &str, value: &str) {
        let focused = self.mark(target);
        let pad = " ".repeat(indent);
        let label_style = Style::default().fg(MUTED_TEXT);
        let value_style = Style::default().fg(HEADER_TEXT);

        let value = display_safe(value);
        let rows: Vec<&str> = value.split('\n').collect();
        let last = rows.len() - 1;
        let continuation = " ".repeat(indent + label.chars().count() + 2);

        for (i, row) in rows.into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(format!("{pad}{label}: "), label_style)
            } else {
                Span::raw(continuation.clone())
            };
            let mut spans = vec![lead, Span::styled(row.to_string(), value_style)];
            if focused && i == last {
                spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT)));
            }
            self.push(Line::from(spans), focused);
        }
    }

    fn tag(&mut self, target: FocusTarget, label: &str) {
        let focused = self.mark(target);
        let line = Line::from(vec![
            Span::raw("   • "),
            Span::styled(display_safe(label).into_owned(), Style::default().fg(TAG_TEXT)),
            Span::styled("  ✕", Style::default().fg(MUTED_TEXT)),
        ]);
        self.push(line, focused);
    }

    fn button(&mut self, target: FocusTarget, text: String) {
        let focused = self.mark(target);
        let line = Line::from(Span::styled(
            format!("  [+ {text}]"),
            Style::default().fg(ACCENT),
        ));
        self.push(line, focused);
    }

    fn entry(&mut self, list: ListKind, row: &EditorRow) {
        let title = match list {
            ListKind::Education => "Education",
            _ => "Experience",
        };
        self.lines.push(Line::from(Span::styled(
            format!("  {title} #{}", row.index + 1),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )));
        for control in &row.controls {
            let target = FocusTarget::EntryControl {
                row: row.row,
                field: control.field,
            };
            self.input(target, 4, control.label, &control.value);
        }
    }

    fn mark(&mut self, target: FocusTarget) -> bool {
        let focused = self.focus == target;
        if focused {
            self.focus_line = self.lines.len();
        }
        focused
    }

    fn push(&mut self, line: Line<'static>, focused: bool) {
        let line = if focused {
            line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            line
        };
        self.lines.push(line);
    }
}

pub fn editor_lines(resume: &ResumeState, view: &EditorView, focus: FocusTarget) -> EditorLines {
    let doc = &resume.document;
    let mut out = Builder {
        focus,
        lines: Vec::new(),
        focus_line: 0,
    };

    out.heading("PERSONAL DETAILS");
    for field in ScalarField::ALL.into_iter().filter(|f| *f != ScalarField::Summary) {
        out.input(FocusTarget::Field(field), 2, field.label(), doc.field(field));
    }

    out.heading("PROFESSIONAL SUMMARY");
    out.input(
        FocusTarget::Field(ScalarField::Summary),
        2,
        "Summary",
        doc.field(ScalarField::Summary),
    );

    out.heading("SKILLS");
    out.input(FocusTarget::SkillInput, 2, "Add skill", &resume.staged_skill);
    for tag in &view.skills {
        out.tag(FocusTarget::SkillTag(tag.row), &tag.label);
    }

    for (list, heading, button) in [
        (ListKind::Education, "EDUCATION", "Add Education"),
        (ListKind::Experience, "EXPERIENCE", "Add Experience"),
    ] {
        out.heading(heading);
        out.button(FocusTarget::AddEntry(list), button.to_string());
        for row in view.rows(list) {
            out.entry(list, row);
        }
    }

    EditorLines {
        lines: out.lines,
        focus_line: out.focus_line,
    }
}

/// Vertical scroll that keeps `focus_line` on screen.
pub fn scroll_for(focus_line: usize, height: u16) -> u16 {
    let height = height.max(1) as usize;
    let keep_above = height / 2;
    focus_line.saturating_sub(keep_above).min(u16::MAX as usize) as u16
}
