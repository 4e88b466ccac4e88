//! Read-only preview of the document.

use serde::Serialize;

use crate::document::{ResumeDocument, RowId, ScalarField};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const TITLE_PLACEHOLDER: &str = "Job Title";
pub const EMAIL_PLACEHOLDER: &str = "email@example.com";
pub const PHONE_PLACEHOLDER: &str = "Phone";
pub const LOCATION_PLACEHOLDER: &str = "Location";
pub const SUMMARY_PLACEHOLDER: &str = "Your professional summary...";

pub const DEGREE_PLACEHOLDER: &str = "Degree";
pub const YEAR_PLACEHOLDER: &str = "Year";
pub const SCHOOL_PLACEHOLDER: &str = "University";

pub const JOB_TITLE_PLACEHOLDER: &str = "Job Title";
pub const DATES_PLACEHOLDER: &str = "Dates";
pub const COMPANY_PLACEHOLDER: &str = "Company";
pub const DESC_PLACEHOLDER: &str = "Responsibilities...";

/// Placeholder shown for an empty scalar field.
pub fn placeholder(field: ScalarField) -> &'static str {
    match field {
        ScalarField::PersonalName => NAME_PLACEHOLDER,
        ScalarField::PersonalTitle => TITLE_PLACEHOLDER,
        ScalarField::PersonalEmail => EMAIL_PLACEHOLDER,
        ScalarField::PersonalPhone => PHONE_PLACEHOLDER,
        ScalarField::PersonalLocation => LOCATION_PLACEHOLDER,
        ScalarField::Summary => SUMMARY_PLACEHOLDER,
    }
}

/// `value` unless it is the empty string. Whitespace counts as content.
pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Summary block for one education or experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryBlock {
    #[serde(skip)]
    pub row: RowId,
    pub title: String,
    pub date: String,
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub education: Vec<EntryBlock>,
    pub experience: Vec<EntryBlock>,
}

impl Preview {
    pub fn project(doc: &ResumeDocument) -> Self {
        let scalar = |field| or_placeholder(doc.field(field), placeholder(field));

        Self {
            name: scalar(ScalarField::PersonalName),
            title: scalar(ScalarField::PersonalTitle),
            email: scalar(ScalarField::PersonalEmail),
            phone: scalar(ScalarField::PersonalPhone),
            location: scalar(ScalarField::PersonalLocation),
            summary: scalar(ScalarField::Summary),
            skills: doc.skills.values().cloned().collect(),
            education: doc
                .education
                .iter()
                .map(|row| EntryBlock {
                    row: row.id,
                    title: or_placeholder(&row.value.degree, DEGREE_PLACEHOLDER),
                    date: or_placeholder(&row.value.year, YEAR_PLACEHOLDER),
                    sub: or_placeholder(&row.value.school, SCHOOL_PLACEHOLDER),
                    desc: None,
                })
                .collect(),
            experience: doc
                .experience
                .iter()
                .map(|row| EntryBlock {
                    row: row.id,
                    title: or_placeholder(&row.value.title, JOB_TITLE_PLACEHOLDER),
                    date: or_placeholder(&row.value.date, DATES_PLACEHOLDER),
                    sub: or_placeholder(&row.value.company, COMPANY_PLACEHOLDER),
                    desc: Some(or_placeholder(&row.value.desc, DESC_PLACEHOLDER)),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_shows_every_placeholder() {
        let preview = Preview::project(&ResumeDocument::default());
        assert_eq!(preview.name, "Your Name");
        assert_eq!(preview.title, "Job Title");
        assert_eq!(preview.email, "email@example.com");
        assert_eq!(preview.phone, "Phone");
        assert_eq!(preview.location, "Location");
        assert_eq!(preview.summary, "Your professional summary...");
        assert!(preview.skills.is_empty());
    }

    #[test]
    fn whitespace_is_not_empty() {
        let mut doc = ResumeDocument::default();
        doc.set_field(ScalarField::PersonalPhone, " ");
        assert_eq!(Preview::project(&doc).phone, " ");
    }

    #[test]
    fn entry_blocks_fall_back_per_field() {
        let mut doc = ResumeDocument::default();
        doc.add_education();
        doc.add_experience();
        let preview = Preview::project(&doc);

        let edu = &preview.education[0];
        assert_eq!((edu.title.as_str(), edu.date.as_str(), edu.sub.as_str()), ("Degree", "Year", "University"));
        assert_eq!(edu.desc, None);

        let exp = &preview.experience[0];
        assert_eq!(exp.title, "Job Title");
        assert_eq!(exp.date, "Dates");
        assert_eq!(exp.sub, "Company");
        assert_eq!(exp.desc.as_deref(), Some("Responsibilities..."));
    }
}
