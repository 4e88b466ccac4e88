//! The resume document model.
//!
//! `ResumeDocument` is the single source of truth. Editor rows and the
//! preview are projections of it (see `crate::projection`); nothing writes
//! to the document except the operations in [`mutation`].

mod error;
mod field;
pub mod mutation;
mod rows;

pub use error::DocumentError;
pub use field::{EducationField, EntryField, ExperienceField, ListKind, ScalarField};
pub use mutation::Mutation;
pub use rows::{Row, RowId, Rows};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub date: String,
    pub desc: String,
}

/// A composite list entry with a fixed set of string fields.
pub trait EntryRecord: Default {
    const LIST: ListKind;

    /// Declared fields, in display order.
    fn fields() -> Vec<EntryField>;

    /// Value of `field`, or `None` if it belongs to the other entry type.
    fn get(&self, field: EntryField) -> Option<&str>;

    fn get_mut(&mut self, field: EntryField) -> Option<&mut String>;
}

impl EntryRecord for EducationEntry {
    const LIST: ListKind = ListKind::Education;

    fn fields() -> Vec<EntryField> {
        EducationField::ALL
            .into_iter()
            .map(EntryField::Education)
            .collect()
    }

    fn get(&self, field: EntryField) -> Option<&str> {
        match field {
            EntryField::Education(EducationField::Degree) => Some(&self.degree),
            EntryField::Education(EducationField::School) => Some(&self.school),
            EntryField::Education(EducationField::Year) => Some(&self.year),
            EntryField::Experience(_) => None,
        }
    }

    fn get_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Education(EducationField::Degree) => Some(&mut self.degree),
            EntryField::Education(EducationField::School) => Some(&mut self.school),
            EntryField::Education(EducationField::Year) => Some(&mut self.year),
            EntryField::Experience(_) => None,
        }
    }
}

impl EntryRecord for ExperienceEntry {
    const LIST: ListKind = ListKind::Experience;

    fn fields() -> Vec<EntryField> {
        ExperienceField::ALL
            .into_iter()
            .map(EntryField::Experience)
            .collect()
    }

    fn get(&self, field: EntryField) -> Option<&str> {
        match field {
            EntryField::Experience(ExperienceField::Title) => Some(&self.title),
            EntryField::Experience(ExperienceField::Company) => Some(&self.company),
            EntryField::Experience(ExperienceField::Date) => Some(&self.date),
            EntryField::Experience(ExperienceField::Desc) => Some(&self.desc),
            EntryField::Education(_) => None,
        }
    }

    fn get_mut(&mut self, field: EntryField) -> Option<&mut String> {
        match field {
            EntryField::Experience(ExperienceField::Title) => Some(&mut self.title),
            EntryField::Experience(ExperienceField::Company) => Some(&mut self.company),
            EntryField::Experience(ExperienceField::Date) => Some(&mut self.date),
            EntryField::Experience(ExperienceField::Desc) => Some(&mut self.desc),
            EntryField::Education(_) => None,
        }
    }
}

/// The whole resume. `Default` is the empty document used at startup and
/// on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: String,
    pub skills: Rows<String>,
    pub education: Rows<EducationEntry>,
    pub experience: Rows<ExperienceEntry>,
}

impl ResumeDocument {
    pub fn field(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::PersonalName => &self.personal.name,
            ScalarField::PersonalTitle => &self.personal.title,
            ScalarField::PersonalEmail => &self.personal.email,
            ScalarField::PersonalPhone => &self.personal.phone,
            ScalarField::PersonalLocation => &self.personal.location,
            ScalarField::Summary => &self.summary,
        }
    }

    fn field_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::PersonalName => &mut self.personal.name,
            ScalarField::PersonalTitle => &mut self.personal.title,
            ScalarField::PersonalEmail => &mut self.personal.email,
            ScalarField::PersonalPhone => &mut self.personal.phone,
            ScalarField::PersonalLocation => &mut self.personal.location,
            ScalarField::Summary => &mut self.summary,
        }
    }

    /// Number of entries in `list`.
    pub fn list_len(&self, list: ListKind) -> usize {
        match list {
            ListKind::Skills => self.skills.len(),
            ListKind::Education => self.education.len(),
            ListKind::Experience => self.experience.len(),
        }
    }

    /// Current index of `row` in `list`.
    pub fn position(&self, list: ListKind, row: RowId) -> Option<usize> {
        match list {
            ListKind::Skills => self.skills.position(row),
            ListKind::Education => self.education.position(row),
            ListKind::Experience => self.experience.position(row),
        }
    }

    /// Value of an entry field, looked up by row identity.
    pub fn entry_value(&self, row: RowId, field: EntryField) -> Option<&str> {
        match field.list() {
            ListKind::Education => {
                let index = self.education.position(row)?;
                self.education.get(index)?.value.get(field)
            }
            ListKind::Experience => {
                let index = self.experience.position(row)?;
                self.experience.get(index)?.value.get(field)
            }
            ListKind::Skills => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_empty() {
        let doc = ResumeDocument::default();
        for field in ScalarField::ALL {
            assert_eq!(doc.field(field), "");
        }
        assert!(doc.skills.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.experience.is_empty());
    }

    #[test]
    fn entry_fields_are_in_declaration_order() {
        let keys: Vec<_> = ExperienceEntry::fields().into_iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["title", "company", "date", "desc"]);
        let keys: Vec<_> = EducationEntry::fields().into_iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["degree", "school", "year"]);
    }

    #[test]
    fn entry_get_rejects_foreign_field() {
        let entry = EducationEntry::default();
        assert!(entry
            .get(EntryField::Experience(ExperienceField::Company))
            .is_none());
    }
}
