//! Line layout of the preview.
//!
//! The same lines feed the on-screen preview panel and the export sink, so
//! what gets exported is exactly what was shown.

use std::borrow::Cow;

use serde::Serialize;

use crate::projection::preview::{EntryBlock, Preview};

pub const SUMMARY_HEADING: &str = "PROFESSIONAL SUMMARY";
pub const SKILLS_HEADING: &str = "SKILLS";
pub const EDUCATION_HEADING: &str = "EDUCATION";
pub const EXPERIENCE_HEADING: &str = "EXPERIENCE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Name,
    Title,
    Contact,
    Heading,
    Body,
    Tags,
    EntryHead,
    EntrySub,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLine {
    pub kind: LineKind,
    pub text: String,
}

impl PreviewLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// Lay the preview out for a surface `columns` characters wide.
pub fn layout(preview: &Preview, columns: usize) -> Vec<PreviewLine> {
    let columns = columns.max(1);
    let mut lines = Vec::new();

    push_wrapped(&mut lines, LineKind::Name, &preview.name, columns);
    push_wrapped(&mut lines, LineKind::Title, &preview.title, columns);
    let contact = format!("{} · {} · {}", preview.email, preview.phone, preview.location);
    push_wrapped(&mut lines, LineKind::Contact, &contact, columns);

    lines.push(PreviewLine::blank());
    lines.push(PreviewLine::new(LineKind::Heading, SUMMARY_HEADING));
    push_wrapped(&mut lines, LineKind::Body, &preview.summary, columns);

    lines.push(PreviewLine::blank());
    lines.push(PreviewLine::new(LineKind::Heading, SKILLS_HEADING));
    if !preview.skills.is_empty() {
        let tags = preview
            .skills
            .iter()
            .map(|skill| format!("[{skill}]"))
            .collect::<Vec<_>>()
            .join(" ");
        push_wrapped(&mut lines, LineKind::Tags, &tags, columns);
    }

    lines.push(PreviewLine::blank());
    lines.push(PreviewLine::new(LineKind::Heading, EDUCATION_HEADING));
    for block in &preview.education {
        push_entry(&mut lines, block, columns);
    }

    lines.push(PreviewLine::blank());
    lines.push(PreviewLine::new(LineKind::Heading, EXPERIENCE_HEADING));
    for block in &preview.experience {
        push_entry(&mut lines, block, columns);
    }

    lines
}

fn push_entry(lines: &mut Vec<PreviewLine>, block: &EntryBlock, columns: usize) {
    let title = display_safe(&block.title).replace('\n', " ");
    let date = display_safe(&block.date).replace('\n', " ");
    let used = title.chars().count() + date.chars().count();
    if used + 2 > columns {
        push_wrapped(lines, LineKind::EntryHead, &title, columns);
        push_wrapped(lines, LineKind::EntryHead, &date, columns);
    } else {
        let gap = columns - used;
        lines.push(PreviewLine::new(
            LineKind::EntryHead,
            format!("{title}{}{date}", " ".repeat(gap)),
        ));
    }
    push_wrapped(lines, LineKind::EntrySub, &block.sub, columns);
    if let Some(desc) = &block.desc {
        push_wrapped(lines, LineKind::Body, desc, columns);
    }
}

fn push_wrapped(lines: &mut Vec<PreviewLine>, kind: LineKind, text: &str, columns: usize) {
    let text = display_safe(text);
    for paragraph in text.split('\n') {
        for line in wrap(paragraph, columns) {
            lines.push(PreviewLine::new(kind, line));
        }
    }
}

/// Replace characters a terminal or text page could interpret: tabs become
/// spaces, other control characters become U+FFFD. Newlines are kept.
pub fn display_safe(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_control() && c != '\n') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '\n' => '\n',
                '\t' => ' ',
                c if c.is_control() => '\u{FFFD}',
                c => c,
            })
            .collect(),
    )
}

/// Word-wrap one paragraph to `columns` characters. Words longer than a
/// line are split. Leading spaces are kept on the first line. Always yields
/// at least one line.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    let body = text.trim_start_matches(' ');
    for _ in 0..text.len() - body.len() {
        if width == columns {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(' ');
        width += 1;
    }

    // Whether the current line holds a word yet; indent does not count.
    let mut has_word = false;
    for word in body.split(' ') {
        let word_width = word.chars().count();
        if has_word && width + 1 + word_width > columns {
            lines.push(std::mem::take(&mut current));
            width = 0;
            has_word = false;
        }
        if has_word {
            current.push(' ');
            width += 1;
        }
        for ch in word.chars() {
            if width == columns {
                lines.push(std::mem::take(&mut current));
                width = 0;
            }
            current.push(ch);
            width += 1;
        }
        has_word |= word_width > 0;
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{EducationField, EntryField, ResumeDocument};

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_empty_is_one_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn display_safe_borrows_clean_text() {
        assert!(matches!(display_safe("plain text"), Cow::Borrowed(_)));
        assert_eq!(display_safe("a\tb\x1b[2Jc"), "a b\u{FFFD}[2Jc");
    }

    #[test]
    fn entry_head_right_aligns_date() {
        let mut doc = ResumeDocument::default();
        doc.add_education();
        let lines = layout(&Preview::project(&doc), 20);
        let head = lines
            .iter()
            .find(|line| line.kind == LineKind::EntryHead)
            .unwrap();
        assert_eq!(head.text, format!("Degree{}Year", " ".repeat(10)));
    }

    #[test]
    fn wrap_keeps_leading_spaces() {
        assert_eq!(wrap("  Ada", 80), vec!["  Ada"]);
        assert_eq!(wrap(" ", 80), vec![" "]);
        assert_eq!(wrap("  aaa bbb", 6), vec!["  aaa", "bbb"]);
    }

    #[test]
    fn whitespace_values_render_verbatim() {
        let mut doc = ResumeDocument::default();
        doc.personal.name = "  Ada".to_string();
        doc.summary = " ".to_string();
        let lines = layout(&Preview::project(&doc), 80);

        assert_eq!(lines[0].kind, LineKind::Name);
        assert_eq!(lines[0].text, "  Ada");
        let summary: Vec<_> = lines
            .iter()
            .filter(|line| line.kind == LineKind::Body)
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(summary, vec![" "]);
    }

    #[test]
    fn wide_entry_head_wraps_within_columns() {
        let mut doc = ResumeDocument::default();
        doc.add_education();
        doc.update_entry_field(
            0,
            EntryField::Education(EducationField::Degree),
            "Master of Science in Computer Engineering",
        )
        .unwrap();
        let lines = layout(&Preview::project(&doc), 20);
        let heads: Vec<_> = lines
            .iter()
            .filter(|line| line.kind == LineKind::EntryHead)
            .map(|line| line.text.as_str())
            .collect();

        assert!(heads.len() > 2);
        assert!(heads.iter().all(|text| text.chars().count() <= 20));
        assert_eq!(heads[0], "Master of Science in");
        assert_eq!(heads.last(), Some(&"Year"));
    }

    #[test]
    fn skills_render_as_tags() {
        let mut doc = ResumeDocument::default();
        doc.add_skill("Go");
        doc.add_skill("Rust");
        let lines = layout(&Preview::project(&doc), 40);
        let tags: Vec<_> = lines.iter().filter(|l| l.kind == LineKind::Tags).collect();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].text, "[Go] [Rust]");
    }
}
