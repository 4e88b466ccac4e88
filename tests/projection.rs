mod common;

use arsim::document::{
    EducationField, EntryField, ExperienceField, ListKind, ResumeDocument, ScalarField,
};
use arsim::projection::preview::{COMPANY_PLACEHOLDER, DESC_PLACEHOLDER, SCHOOL_PLACEHOLDER};
use arsim::projection::{layout, EditorView, Preview, RenderedViews};

fn doc_with_education(degrees: &[&str]) -> ResumeDocument {
    let mut doc = ResumeDocument::default();
    for degree in degrees {
        doc.add_education();
        let index = doc.education.len() - 1;
        doc.update_entry_field(
            index,
            EntryField::Education(EducationField::Degree),
            *degree,
        )
        .unwrap();
    }
    doc
}

#[test]
fn remove_k_of_n_keeps_remaining_order_in_both_views() {
    for k in 0..4 {
        let mut doc = doc_with_education(&["A", "B", "C", "D"]);
        doc.remove_entry(ListKind::Education, k).unwrap();
        let views = RenderedViews::render(&doc);

        let mut expected = vec!["A", "B", "C", "D"];
        expected.remove(k);

        let editor: Vec<_> = views
            .editor
            .education
            .iter()
            .map(|row| row.controls[0].value.as_str())
            .collect();
        let preview: Vec<_> = views
            .preview
            .education
            .iter()
            .map(|block| block.title.as_str())
            .collect();
        assert_eq!(editor, expected, "editor after removing {k}");
        assert_eq!(preview, expected, "preview after removing {k}");
        assert!(views
            .editor
            .education
            .iter()
            .enumerate()
            .all(|(i, row)| row.index == i));
    }
}

#[test]
fn placeholders_only_replace_empty_strings() {
    let mut doc = ResumeDocument::default();
    doc.set_field(ScalarField::PersonalPhone, " ");
    doc.add_education();
    doc.add_experience();

    let preview = Preview::project(&doc);
    assert_eq!(preview.phone, " ");
    assert_eq!(preview.name, "Your Name");
    assert_eq!(preview.education[0].sub, SCHOOL_PLACEHOLDER);
    assert_eq!(preview.experience[0].sub, COMPANY_PLACEHOLDER);
    assert_eq!(preview.experience[0].desc.as_deref(), Some(DESC_PLACEHOLDER));
}

#[test]
fn editor_controls_follow_declaration_order() {
    let mut doc = ResumeDocument::default();
    doc.add_experience();
    let view = EditorView::render(&doc);

    let labels: Vec<_> = view.experience[0]
        .controls
        .iter()
        .map(|control| control.label)
        .collect();
    assert_eq!(labels, vec!["Job Title", "Company", "Duration", "Description"]);
    assert!(view.experience[0]
        .control(EntryField::Experience(ExperienceField::Desc))
        .is_some_and(|control| control.multiline));
}

#[test]
fn control_characters_never_reach_the_layout() {
    let mut doc = ResumeDocument::default();
    doc.set_field(ScalarField::PersonalName, "Ada\u{1b}[31m");

    let lines = layout(&Preview::project(&doc), 80);
    assert_eq!(lines[0].text, "Ada\u{FFFD}[31m");
}
