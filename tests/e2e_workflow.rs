//! End-to-end workflow tests driven through `App` and key events.

mod common;

use arsim::document::{EntryField, ExperienceField, ListKind, ScalarField};
use arsim::projection::RowAction;
use arsim::ui::app::StatusLevel;
use arsim::ui::focus::FocusTarget;
use arsim::ui::input::handle_key;
use arsim::ui::session::View;
use common::{app_with_recorder, ctrl, key, type_text, RejectingSink};
use crossterm::event::KeyCode;

#[test]
fn edit_then_remove_experience() {
    let (mut app, _) = app_with_recorder();
    app.login("ada@example.com", "Ada");

    app.set_field(ScalarField::PersonalName, "Ada");
    app.add_entry(ListKind::Experience);
    let row = app.views().editor.experience[0].row;
    app.apply_row_action(RowAction::Update {
        row,
        field: EntryField::Experience(ExperienceField::Title),
        value: "Engineer".into(),
    });

    let views = app.views();
    assert_eq!(views.editor.experience.len(), 1);
    assert_eq!(views.editor.experience[0].controls[0].value, "Engineer");
    assert_eq!(views.preview.experience[0].title, "Engineer");
    assert_eq!(views.preview.experience[0].sub, "Company");

    app.apply_row_action(app.views().editor.experience[0].remove_action());
    assert!(app.views().editor.experience.is_empty());
    assert!(app.views().preview.experience.is_empty());
    assert_eq!(app.views().preview.name, "Ada");
}

#[test]
fn keyboard_session_builds_and_exports() {
    let (mut app, requests) = app_with_recorder();

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.session().current_view, View::Auth);
    type_text(&mut app, "ada@example.com");
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.session().current_view, View::Builder);
    assert_eq!(
        app.session().current_user.as_ref().map(|u| u.name.as_str()),
        Some("User")
    );

    type_text(&mut app, "Ada Lovelace");
    app.set_focus(FocusTarget::AddEntry(ListKind::Experience));
    handle_key(&mut app, key(KeyCode::Enter));
    type_text(&mut app, "Engineer");

    handle_key(&mut app, ctrl('e'));
    let requests = requests.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].filename, "Resume_Ada Lovelace.txt");
    assert!(requests[0]
        .lines
        .iter()
        .any(|line| line.text.starts_with("Engineer")));
}

#[test]
fn logout_clears_document_and_user() {
    let (mut app, _) = app_with_recorder();
    app.login("ada@example.com", "Ada");
    type_text(&mut app, "Ada");
    app.add_entry(ListKind::Education);

    handle_key(&mut app, ctrl('l'));
    assert_eq!(app.session().current_view, View::Home);
    assert!(app.session().current_user.is_none());
    assert!(app.resume().is_empty());
    assert!(app.views().editor.education.is_empty());
}

#[test]
fn reset_keeps_session() {
    let (mut app, _) = app_with_recorder();
    app.login("ada@example.com", "Ada");
    type_text(&mut app, "Ada");

    handle_key(&mut app, ctrl('r'));
    assert!(app.resume().is_empty());
    assert!(app.session().is_logged_in());
    assert_eq!(app.focus(), FocusTarget::Field(ScalarField::PersonalName));
}

#[test]
fn export_with_empty_name_uses_fallback() {
    let (mut app, requests) = app_with_recorder();
    app.navigate_to(View::Builder);
    assert!(app.generate_export());
    assert_eq!(requests.lock()[0].filename, "Resume_Arsim.txt");
}

#[test]
fn rejected_export_reports_error() {
    let mut app = arsim::ui::app::App::new(
        arsim::config::Config::default(),
        Box::new(RejectingSink),
    );
    assert!(!app.generate_export());
    assert_eq!(app.status().map(|s| s.level), Some(StatusLevel::Error));
    assert!(app.resume().is_empty());
}
