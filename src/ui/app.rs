use std::time::{Duration, Instant};

use crate::config::Config;
use crate::document::{EntryField, ListKind, Mutation, ResumeDocument, ScalarField};
use crate::export::{export_filename, ExportOptions, ExportOutcome, ExportRequest, ExportSink};
use crate::projection::{layout, RenderedViews, RowAction};
use crate::ui::auth::{AuthFormState, AuthIntent, AuthMode, AuthReducer};
use crate::ui::focus::{focus_ring, FocusState, FocusTarget};
use crate::ui::mvi::Reducer;
use crate::ui::resume::{ResumeIntent, ResumeReducer, ResumeState};
use crate::ui::session::{SessionIntent, SessionReducer, SessionState, View};

const STATUS_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    posted_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: Config,
    /// Signed-in user and current view (MVI pattern).
    session: SessionState,
    /// Login / signup inputs (MVI pattern).
    auth_form: AuthFormState,
    /// The document plus staged skill input (MVI pattern).
    resume: ResumeState,
    /// Editor rows and preview, rebuilt after every resume dispatch.
    views: RenderedViews,
    focus: FocusState,
    exporter: Box<dyn ExportSink>,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: Config, exporter: Box<dyn ExportSink>) -> Self {
        let resume = ResumeState::default();
        let views = RenderedViews::render(&resume.document);
        Self {
            should_quit: false,
            config,
            session: SessionState::default(),
            auth_form: AuthFormState::default(),
            resume,
            views,
            focus: FocusState::default(),
            exporter,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn auth_form(&self) -> &AuthFormState {
        &self.auth_form
    }

    pub fn resume(&self) -> &ResumeState {
        &self.resume
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.resume.document
    }

    pub fn views(&self) -> &RenderedViews {
        &self.views
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus.target()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn on_tick(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.posted_at.elapsed() >= STATUS_TTL)
        {
            self.status = None;
        }
    }

    // ── Session ────────────────────────────────────────────────

    pub fn navigate_to(&mut self, view: View) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::NavigateTo(view));
    }

    /// "Get started": the builder when signed in, otherwise the login form.
    pub fn handle_start(&mut self) {
        if self.session.is_logged_in() {
            self.navigate_to(View::Builder);
        } else {
            self.show_auth(AuthMode::Login);
        }
    }

    pub fn show_auth(&mut self, mode: AuthMode) {
        dispatch_mvi!(self, auth_form, AuthReducer, AuthIntent::SetMode(mode));
        self.navigate_to(View::Auth);
    }

    pub fn dispatch_auth(&mut self, intent: AuthIntent) {
        dispatch_mvi!(self, auth_form, AuthReducer, intent);
    }

    /// Sign in with whatever the auth form holds.
    pub fn submit_auth(&mut self) {
        let (email, name) = self.auth_form.credentials();
        self.login(email, name);
    }

    pub fn login(&mut self, email: impl Into<String>, name: impl Into<String>) {
        let email = email.into();
        let name = name.into();
        dispatch_mvi!(
            self,
            session,
            SessionReducer,
            SessionIntent::Login { email, name }
        );
        dispatch_mvi!(self, auth_form, AuthReducer, AuthIntent::Clear);
    }

    pub fn logout(&mut self) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::Logout);
        self.reset_form();
    }

    // ── Resume ─────────────────────────────────────────────────

    pub fn dispatch_resume(&mut self, intent: ResumeIntent) {
        dispatch_mvi!(self, resume, ResumeReducer, intent);
        self.views = RenderedViews::render(&self.resume.document);
        self.focus.reconcile(&focus_ring(&self.views.editor));
    }

    /// Empty document, cleared inputs, focus back on the first field.
    pub fn reset_form(&mut self) {
        self.dispatch_resume(ResumeIntent::Reset);
        dispatch_mvi!(self, auth_form, AuthReducer, AuthIntent::Clear);
        self.focus = FocusState::default();
    }

    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) {
        self.dispatch_resume(ResumeIntent::Mutate(Mutation::SetField {
            field,
            value: value.into(),
        }));
    }

    pub fn apply_row_action(&mut self, action: RowAction) {
        self.dispatch_resume(ResumeIntent::Row(action));
    }

    pub fn stage_skill(&mut self, value: impl Into<String>) {
        self.dispatch_resume(ResumeIntent::StageSkill {
            value: value.into(),
        });
    }

    pub fn add_skill(&mut self) {
        self.dispatch_resume(ResumeIntent::AddSkill);
    }

    pub fn add_entry(&mut self, list: ListKind) {
        let mutation = match list {
            ListKind::Education => Mutation::AddEducation,
            ListKind::Experience => Mutation::AddExperience,
            ListKind::Skills => return self.add_skill(),
        };
        self.dispatch_resume(ResumeIntent::Mutate(mutation));
    }

    // ── Export ─────────────────────────────────────────────────

    /// Hand the current preview to the export sink. Returns whether the
    /// sink accepted the request; completion arrives via
    /// [`App::on_export_outcome`].
    pub fn generate_export(&mut self) -> bool {
        let options = ExportOptions::from(&self.config.export);
        let request = ExportRequest {
            filename: export_filename(
                &self.resume.document.personal.name,
                self.config.export.format.extension(),
            ),
            lines: layout(&self.views.preview, options.geometry().columns),
            options,
        };
        let filename = request.filename.clone();

        match self.exporter.submit(request) {
            Ok(()) => {
                tracing::info!(%filename, "Export submitted");
                self.post_status(StatusLevel::Info, format!("Exporting {filename}…"));
                true
            }
            Err(err) => {
                tracing::error!(%filename, error = %err, "Export rejected");
                self.post_status(StatusLevel::Error, format!("Export failed: {err}"));
                false
            }
        }
    }

    pub fn on_export_outcome(&mut self, outcome: ExportOutcome) {
        match outcome {
            ExportOutcome::Written { path, pages } => self.post_status(
                StatusLevel::Info,
                format!("Saved {} ({pages} page(s))", path.display()),
            ),
            ExportOutcome::Failed { filename, message } => {
                self.post_status(StatusLevel::Error, format!("Export of {filename} failed: {message}"))
            }
        }
    }

    fn post_status(&mut self, level: StatusLevel, text: String) {
        self.status = Some(StatusMessage {
            level,
            text,
            posted_at: Instant::now(),
        });
    }

    // ── Focus & editing ────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focus.next(&focus_ring(&self.views.editor));
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev(&focus_ring(&self.views.editor));
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus.set(target, &focus_ring(&self.views.editor));
    }

    /// Text currently held by the focused input, if it is one.
    pub fn focused_value(&self) -> Option<&str> {
        match self.focus.target() {
            FocusTarget::Field(field) => Some(self.resume.document.field(field)),
            FocusTarget::SkillInput => Some(&self.resume.staged_skill),
            FocusTarget::EntryControl { row, field } => {
                self.resume.document.entry_value(row, field)
            }
            FocusTarget::SkillTag(_) | FocusTarget::AddEntry(_) => None,
        }
    }

    pub fn insert_text(&mut self, text: &str) {
        let Some(current) = self.focused_value() else {
            return;
        };
        let mut value = current.to_string();
        value.push_str(text);
        self.write_focused(value);
    }

    pub fn backspace(&mut self) {
        let Some(current) = self.focused_value() else {
            return;
        };
        let mut value = current.to_string();
        if value.pop().is_some() {
            self.write_focused(value);
        }
    }

    fn write_focused(&mut self, value: String) {
        match self.focus.target() {
            FocusTarget::Field(field) => self.set_field(field, value),
            FocusTarget::SkillInput => self.stage_skill(value),
            FocusTarget::EntryControl { row, field } => {
                self.apply_row_action(RowAction::Update { row, field, value })
            }
            FocusTarget::SkillTag(_) | FocusTarget::AddEntry(_) => {}
        }
    }

    /// Enter: submit the skill input, add an entry, break a line in a
    /// multiline input, or move on.
    pub fn activate(&mut self) {
        match self.focus.target() {
            FocusTarget::SkillInput => self.add_skill(),
            FocusTarget::AddEntry(list) => {
                self.add_entry(list);
                self.focus_first_control_of_last(list);
            }
            target if target.is_multiline() => self.insert_text("\n"),
            _ => self.focus_next(),
        }
    }

    /// Remove the skill tag or entry that holds focus.
    pub fn remove_focused(&mut self) {
        let action = match self.focus.target() {
            FocusTarget::SkillTag(row) => RowAction::Remove {
                list: ListKind::Skills,
                row,
            },
            FocusTarget::EntryControl { row, field } => RowAction::Remove {
                list: field.list(),
                row,
            },
            _ => return,
        };
        self.apply_row_action(action);
    }

    fn focus_first_control_of_last(&mut self, list: ListKind) {
        let target = self.views.editor.rows(list).last().and_then(|row| {
            row.controls.first().map(|control| FocusTarget::EntryControl {
                row: row.row,
                field: control.field,
            })
        });
        if let Some(target) = target {
            self.set_focus(target);
        }
    }

    /// Entry control currently focused, if any.
    pub fn focused_entry_field(&self) -> Option<EntryField> {
        match self.focus.target() {
            FocusTarget::EntryControl { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{EducationField, ExperienceField};
    use crate::export::ExportError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<ExportRequest>>>);

    impl ExportSink for Recorder {
        fn submit(&self, request: ExportRequest) -> Result<(), ExportError> {
            self.0.lock().push(request);
            Ok(())
        }
    }

    fn app() -> (App, Recorder) {
        let recorder = Recorder::default();
        (App::new(Config::default(), Box::new(recorder.clone())), recorder)
    }

    #[test]
    fn set_field_writes_each_scalar_field() {
        let (mut app, _) = app();
        for field in ScalarField::ALL {
            app.set_field(field, field.label());
        }
        for field in ScalarField::ALL {
            assert_eq!(app.document().field(field), field.label());
        }
        assert_eq!(app.views().preview.name, ScalarField::PersonalName.label());
    }

    #[test]
    fn start_without_user_opens_login() {
        let (mut app, _) = app();
        app.handle_start();
        assert_eq!(app.session().current_view, View::Auth);
        assert_eq!(app.auth_form().mode, AuthMode::Login);
    }

    #[test]
    fn start_with_user_opens_builder() {
        let (mut app, _) = app();
        app.login("ada@example.com", "Ada");
        app.navigate_to(View::Home);
        app.handle_start();
        assert_eq!(app.session().current_view, View::Builder);
    }

    #[test]
    fn logout_resets_document() {
        let (mut app, _) = app();
        app.login("ada@example.com", "Ada");
        app.set_field(ScalarField::PersonalName, "Ada");
        app.add_entry(ListKind::Education);
        app.logout();

        assert!(!app.session().is_logged_in());
        assert_eq!(app.session().current_view, View::Home);
        assert!(app.resume().is_empty());
        assert_eq!(
            app.views(),
            &RenderedViews::render(&ResumeDocument::default())
        );
    }

    #[test]
    fn views_track_every_dispatch() {
        let (mut app, _) = app();
        app.add_entry(ListKind::Experience);
        assert_eq!(app.views().editor.experience.len(), 1);
        assert_eq!(app.views().preview.experience.len(), 1);
    }

    #[test]
    fn typing_into_entry_control() {
        let (mut app, _) = app();
        app.set_focus(FocusTarget::AddEntry(ListKind::Education));
        app.activate();
        assert_eq!(
            app.focused_entry_field(),
            Some(EntryField::Education(EducationField::Degree))
        );

        app.insert_text("BSc");
        app.backspace();
        assert_eq!(app.document().education.values().next().map(|e| e.degree.as_str()), Some("BS"));
    }

    #[test]
    fn enter_in_description_breaks_line() {
        let (mut app, _) = app();
        app.add_entry(ListKind::Experience);
        let row = app.views().editor.experience[0].row;
        app.set_focus(FocusTarget::EntryControl {
            row,
            field: EntryField::Experience(ExperienceField::Desc),
        });
        app.insert_text("a");
        app.activate();
        app.insert_text("b");
        assert_eq!(app.focused_value(), Some("a\nb"));
    }

    #[test]
    fn remove_focused_entry_moves_focus() {
        let (mut app, _) = app();
        app.add_entry(ListKind::Education);
        let row = app.views().editor.education[0].row;
        app.set_focus(FocusTarget::EntryControl {
            row,
            field: EntryField::Education(EducationField::Year),
        });
        app.remove_focused();
        assert!(app.document().education.is_empty());
        assert_eq!(app.focus(), FocusTarget::AddEntry(ListKind::Experience));
    }

    #[test]
    fn export_uses_name_and_preview_snapshot() {
        let (mut app, recorder) = app();
        app.set_field(ScalarField::PersonalName, "Ada Lovelace");
        assert!(app.generate_export());

        let requests = recorder.0.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].filename, "Resume_Ada Lovelace.txt");
        assert_eq!(requests[0].lines[0].text, "Ada Lovelace");
        assert_eq!(app.status().map(|s| s.level), Some(StatusLevel::Info));
    }

    #[test]
    fn export_outcome_updates_status() {
        let (mut app, _) = app();
        app.on_export_outcome(ExportOutcome::Failed {
            filename: "Resume_Arsim.txt".into(),
            message: "disk full".into(),
        });
        let status = app.status().cloned();
        assert_eq!(status.as_ref().map(|s| s.level), Some(StatusLevel::Error));
        assert!(status.is_some_and(|s| s.text.contains("disk full")));
    }
}
