//! Intents for the resume editor.

use crate::document::Mutation;
use crate::projection::RowAction;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeIntent {
    /// Apply an index-addressed mutation.
    Mutate(Mutation),
    /// Apply an action bound to an editor row. The row's index is looked
    /// up against the document at reduce time.
    Row(RowAction),
    /// Set a scalar field by path (`personal.email`, `summary`).
    SetFieldPath { path: String, value: String },
    /// Replace the staged skill input.
    StageSkill { value: String },
    /// Move the staged skill into the list if it is not blank.
    AddSkill,
    /// Back to the empty document with cleared inputs.
    Reset,
}

impl Intent for ResumeIntent {}
