use crate::document::ResumeDocument;
use crate::ui::mvi::UiState;

/// Resume editor state: the document plus input that is staged but not
/// yet part of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResumeState {
    pub document: ResumeDocument,
    /// Skill input box contents, added on submit.
    pub staged_skill: String,
}

impl UiState for ResumeState {}

impl ResumeState {
    pub fn is_empty(&self) -> bool {
        self.document == ResumeDocument::default() && self.staged_skill.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(ResumeState::default().is_empty());
    }

    #[test]
    fn staged_input_is_not_empty() {
        let state = ResumeState {
            staged_skill: "Go".into(),
            ..ResumeState::default()
        };
        assert!(!state.is_empty());
    }
}
