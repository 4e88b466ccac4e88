//! Editor rows: the interactive projection of each list.
//!
//! Rows are rebuilt in full from the document after every mutation. A row
//! carries its `RowId`; actions taken on it go through [`RowAction`], which
//! looks the index up again when the action fires.

use crate::document::{
    DocumentError, EntryField, EntryRecord, ListKind, Mutation, ResumeDocument, RowId, Rows,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTag {
    pub row: RowId,
    pub index: usize,
    pub label: String,
}

/// One input control bound to an entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorControl {
    pub field: EntryField,
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow {
    pub list: ListKind,
    pub row: RowId,
    /// Position at render time. Display only; actions use `row`.
    pub index: usize,
    pub controls: Vec<EditorControl>,
}

impl EditorRow {
    pub fn remove_action(&self) -> RowAction {
        RowAction::Remove {
            list: self.list,
            row: self.row,
        }
    }

    pub fn update_action(&self, field: EntryField, value: impl Into<String>) -> RowAction {
        RowAction::Update {
            row: self.row,
            field,
            value: value.into(),
        }
    }

    pub fn control(&self, field: EntryField) -> Option<&EditorControl> {
        self.controls.iter().find(|control| control.field == field)
    }
}

/// An action bound to a row by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Remove { list: ListKind, row: RowId },
    Update {
        row: RowId,
        field: EntryField,
        value: String,
    },
}

impl RowAction {
    /// Turn the action into an index-addressed mutation using the row's
    /// current position in `doc`.
    pub fn resolve(self, doc: &ResumeDocument) -> Result<Mutation, DocumentError> {
        match self {
            RowAction::Remove { list, row } => {
                let index = doc
                    .position(list, row)
                    .ok_or(DocumentError::StaleRow { list })?;
                Ok(Mutation::Remove { list, index })
            }
            RowAction::Update { row, field, value } => {
                let list = field.list();
                let index = doc
                    .position(list, row)
                    .ok_or(DocumentError::StaleRow { list })?;
                Ok(Mutation::UpdateEntry {
                    index,
                    field,
                    value,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorView {
    pub skills: Vec<SkillTag>,
    pub education: Vec<EditorRow>,
    pub experience: Vec<EditorRow>,
}

impl EditorView {
    pub fn render(doc: &ResumeDocument) -> Self {
        Self {
            skills: skill_tags(&doc.skills),
            education: editor_rows(&doc.education),
            experience: editor_rows(&doc.experience),
        }
    }

    pub fn rows(&self, list: ListKind) -> &[EditorRow] {
        match list {
            ListKind::Education => &self.education,
            ListKind::Experience => &self.experience,
            ListKind::Skills => &[],
        }
    }
}

fn skill_tags(skills: &Rows<String>) -> Vec<SkillTag> {
    skills
        .iter()
        .enumerate()
        .map(|(index, row)| SkillTag {
            row: row.id,
            index,
            label: row.value.clone(),
        })
        .collect()
}

fn editor_rows<E: EntryRecord>(rows: &Rows<E>) -> Vec<EditorRow> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| EditorRow {
            list: E::LIST,
            row: row.id,
            index,
            controls: E::fields()
                .into_iter()
                .map(|field| EditorControl {
                    field,
                    label: field.label(),
                    value: row.value.get(field).unwrap_or_default().to_string(),
                    multiline: field.is_multiline(),
                })
                .collect(),
        })
        .collect()
}
