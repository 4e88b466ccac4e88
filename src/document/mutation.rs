//! Mutation operations: the only write path into [`ResumeDocument`].

use crate::document::{
    DocumentError, EducationEntry, EntryField, EntryRecord, ExperienceEntry, ListKind, RowId,
    Rows, ScalarField, ResumeDocument,
};

/// A single update command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetField { field: ScalarField, value: String },
    /// Appends the trimmed value; whitespace-only values are ignored.
    AddSkill { value: String },
    AddEducation,
    AddExperience,
    Remove { list: ListKind, index: usize },
    UpdateEntry {
        index: usize,
        field: EntryField,
        value: String,
    },
}

impl ResumeDocument {
    /// Apply one mutation. On error the document is unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), DocumentError> {
        match mutation {
            Mutation::SetField { field, value } => {
                self.set_field(field, value);
                Ok(())
            }
            Mutation::AddSkill { value } => {
                self.add_skill(&value);
                Ok(())
            }
            Mutation::AddEducation => {
                self.add_education();
                Ok(())
            }
            Mutation::AddExperience => {
                self.add_experience();
                Ok(())
            }
            Mutation::Remove { list, index } => self.remove_entry(list, index),
            Mutation::UpdateEntry {
                index,
                field,
                value,
            } => self.update_entry_field(index, field, value),
        }
    }

    /// Overwrite one scalar field. Every other field is left as is.
    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Same as [`set_field`](Self::set_field), addressed by a path such as
    /// `personal.email` or `summary`.
    pub fn set_field_path(&mut self, path: &str, value: impl Into<String>) -> Result<(), DocumentError> {
        let field = ScalarField::from_path(path)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Append `value` trimmed. Returns `None` (and adds nothing) when the
    /// trimmed value is empty.
    pub fn add_skill(&mut self, value: &str) -> Option<RowId> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.skills.push(trimmed.to_string()))
    }

    pub fn add_education(&mut self) -> RowId {
        self.education.push(EducationEntry::default())
    }

    pub fn add_experience(&mut self) -> RowId {
        self.experience.push(ExperienceEntry::default())
    }

    pub fn remove_entry(&mut self, list: ListKind, index: usize) -> Result<(), DocumentError> {
        let len = self.list_len(list);
        let removed = match list {
            ListKind::Skills => self.skills.remove(index).is_some(),
            ListKind::Education => self.education.remove(index).is_some(),
            ListKind::Experience => self.experience.remove(index).is_some(),
        };
        if removed {
            Ok(())
        } else {
            Err(DocumentError::IndexOutOfRange { list, index, len })
        }
    }

    pub fn update_entry_field(
        &mut self,
        index: usize,
        field: EntryField,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        match field.list() {
            ListKind::Education => update_in(&mut self.education, index, field, value.into()),
            ListKind::Experience => update_in(&mut self.experience, index, field, value.into()),
            ListKind::Skills => Err(DocumentError::UnknownEntryField {
                list: ListKind::Skills,
                key: field.key().to_string(),
            }),
        }
    }
}

fn update_in<E: EntryRecord>(
    rows: &mut Rows<E>,
    index: usize,
    field: EntryField,
    value: String,
) -> Result<(), DocumentError> {
    let len = rows.len();
    let row = rows.get_mut(index).ok_or(DocumentError::IndexOutOfRange {
        list: E::LIST,
        index,
        len,
    })?;
    let slot = row
        .value
        .get_mut(field)
        .ok_or_else(|| DocumentError::UnknownEntryField {
            list: E::LIST,
            key: field.key().to_string(),
        })?;
    *slot = value;
    Ok(())
}
