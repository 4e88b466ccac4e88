//! Projections of the document into the two views.
//!
//! Both are pure functions of `&ResumeDocument` and are recomputed in full
//! after every mutation, so editor rows and preview rows always agree on
//! order and count.

pub mod editor;
pub mod layout;
pub mod preview;

pub use editor::{EditorControl, EditorRow, EditorView, RowAction, SkillTag};
pub use layout::{layout, LineKind, PreviewLine};
pub use preview::{EntryBlock, Preview};

use crate::document::ResumeDocument;

/// Editor rows and preview built from the same document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedViews {
    pub editor: EditorView,
    pub preview: Preview,
}

impl RenderedViews {
    pub fn render(doc: &ResumeDocument) -> Self {
        Self {
            editor: EditorView::render(doc),
            preview: Preview::project(doc),
        }
    }
}
