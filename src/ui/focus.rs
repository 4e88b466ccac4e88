//! Keyboard focus in the builder view.
//!
//! The focus ring is derived from the current editor rows every time it is
//! needed. Targets name rows by `RowId`, so focus follows a row when rows
//! above it are removed.

use crate::document::{EntryField, ListKind, RowId, ScalarField};
use crate::projection::EditorView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(ScalarField),
    SkillInput,
    SkillTag(RowId),
    AddEntry(ListKind),
    EntryControl { row: RowId, field: EntryField },
}

impl FocusTarget {
    pub fn is_multiline(self) -> bool {
        match self {
            FocusTarget::Field(field) => field.is_multiline(),
            FocusTarget::EntryControl { field, .. } => field.is_multiline(),
            _ => false,
        }
    }
}

/// All focusable targets, in the order the editor panel draws them.
pub fn focus_ring(view: &EditorView) -> Vec<FocusTarget> {
    let mut ring: Vec<FocusTarget> = ScalarField::ALL.into_iter().map(FocusTarget::Field).collect();
    ring.push(FocusTarget::SkillInput);
    ring.extend(view.skills.iter().map(|tag| FocusTarget::SkillTag(tag.row)));

    for list in [ListKind::Education, ListKind::Experience] {
        ring.push(FocusTarget::AddEntry(list));
        for row in view.rows(list) {
            ring.extend(row.controls.iter().map(|control| FocusTarget::EntryControl {
                row: row.row,
                field: control.field,
            }));
        }
    }
    ring
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusState {
    target: FocusTarget,
    /// Last known position in the ring, used when the target disappears.
    ordinal: usize,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            target: FocusTarget::Field(ScalarField::PersonalName),
            ordinal: 0,
        }
    }
}

impl FocusState {
    pub fn target(&self) -> FocusTarget {
        self.target
    }

    pub fn set(&mut self, target: FocusTarget, ring: &[FocusTarget]) {
        if let Some(ordinal) = ring.iter().position(|t| *t == target) {
            self.target = target;
            self.ordinal = ordinal;
        }
    }

    pub fn next(&mut self, ring: &[FocusTarget]) {
        self.step(ring, 1);
    }

    pub fn prev(&mut self, ring: &[FocusTarget]) {
        self.step(ring, -1);
    }

    /// Re-anchor after the ring changed. A vanished target falls back to
    /// the same ordinal, clamped to the ring.
    pub fn reconcile(&mut self, ring: &[FocusTarget]) {
        if ring.is_empty() {
            return;
        }
        match ring.iter().position(|t| *t == self.target) {
            Some(ordinal) => self.ordinal = ordinal,
            None => {
                self.ordinal = self.ordinal.min(ring.len() - 1);
                self.target = ring[self.ordinal];
            }
        }
    }

    fn step(&mut self, ring: &[FocusTarget], direction: isize) {
        if ring.is_empty() {
            return;
        }
        self.reconcile(ring);
        let len = ring.len() as isize;
        let next = (self.ordinal as isize + direction).rem_euclid(len) as usize;
        self.ordinal = next;
        self.target = ring[next];
    }
}
