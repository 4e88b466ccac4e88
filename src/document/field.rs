//! Typed addresses into the document.
//!
//! Every writable location has an enum variant. The string keys used by
//! input bindings resolve through the tables below, so an unknown key is
//! a lookup failure rather than a silently created field.

use std::fmt;

use crate::document::error::DocumentError;

/// Scalar (non-list) fields of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    PersonalName,
    PersonalTitle,
    PersonalEmail,
    PersonalPhone,
    PersonalLocation,
    Summary,
}

const FIELD_PATHS: &[(&str, ScalarField)] = &[
    ("personal.name", ScalarField::PersonalName),
    ("personal.title", ScalarField::PersonalTitle),
    ("personal.email", ScalarField::PersonalEmail),
    ("personal.phone", ScalarField::PersonalPhone),
    ("personal.location", ScalarField::PersonalLocation),
    ("summary", ScalarField::Summary),
];

impl ScalarField {
    pub const ALL: [ScalarField; 6] = [
        ScalarField::PersonalName,
        ScalarField::PersonalTitle,
        ScalarField::PersonalEmail,
        ScalarField::PersonalPhone,
        ScalarField::PersonalLocation,
        ScalarField::Summary,
    ];

    /// Resolve a field path such as `personal.email` or `summary`.
    pub fn from_path(path: &str) -> Result<Self, DocumentError> {
        FIELD_PATHS
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, field)| *field)
            .ok_or_else(|| DocumentError::UnknownFieldPath {
                path: path.to_string(),
            })
    }

    pub fn path(self) -> &'static str {
        FIELD_PATHS
            .iter()
            .find(|(_, field)| *field == self)
            .map(|(path, _)| *path)
            .unwrap_or("")
    }

    pub fn label(self) -> &'static str {
        match self {
            ScalarField::PersonalName => "Full Name",
            ScalarField::PersonalTitle => "Job Title",
            ScalarField::PersonalEmail => "Email",
            ScalarField::PersonalPhone => "Phone",
            ScalarField::PersonalLocation => "Location",
            ScalarField::Summary => "Professional Summary",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ScalarField::Summary)
    }
}

/// The three ordered collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Skills,
    Education,
    Experience,
}

impl ListKind {
    pub fn key(self) -> &'static str {
        match self {
            ListKind::Skills => "skills",
            ListKind::Education => "education",
            ListKind::Experience => "experience",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    Degree,
    School,
    Year,
}

impl EducationField {
    pub const ALL: [EducationField; 3] = [
        EducationField::Degree,
        EducationField::School,
        EducationField::Year,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EducationField::Degree => "degree",
            EducationField::School => "school",
            EducationField::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationField::Degree => "Degree",
            EducationField::School => "School",
            EducationField::Year => "Year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceField {
    Title,
    Company,
    Date,
    Desc,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 4] = [
        ExperienceField::Title,
        ExperienceField::Company,
        ExperienceField::Date,
        ExperienceField::Desc,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ExperienceField::Title => "title",
            ExperienceField::Company => "company",
            ExperienceField::Date => "date",
            ExperienceField::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceField::Title => "Job Title",
            ExperienceField::Company => "Company",
            ExperienceField::Date => "Duration",
            ExperienceField::Desc => "Description",
        }
    }
}

/// A declared field of an education or experience entry.
///
/// The list is implied by the variant, so an update can never name a
/// field the target entry does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Education(EducationField),
    Experience(ExperienceField),
}

impl EntryField {
    /// Resolve a string key for the given list (`"degree"`, `"desc"`, ...).
    pub fn from_key(list: ListKind, key: &str) -> Result<Self, DocumentError> {
        let found = match list {
            ListKind::Education => EducationField::ALL
                .into_iter()
                .find(|field| field.key() == key)
                .map(EntryField::Education),
            ListKind::Experience => ExperienceField::ALL
                .into_iter()
                .find(|field| field.key() == key)
                .map(EntryField::Experience),
            ListKind::Skills => None,
        };
        found.ok_or_else(|| DocumentError::UnknownEntryField {
            list,
            key: key.to_string(),
        })
    }

    pub fn list(self) -> ListKind {
        match self {
            EntryField::Education(_) => ListKind::Education,
            EntryField::Experience(_) => ListKind::Experience,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            EntryField::Education(field) => field.key(),
            EntryField::Experience(field) => field.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryField::Education(field) => field.label(),
            EntryField::Experience(field) => field.label(),
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, EntryField::Experience(ExperienceField::Desc))
    }
}
