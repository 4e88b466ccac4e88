//! Reducer for the resume editor.
//!
//! Rejected mutations (stale rows, out-of-range indices) leave the state
//! as it was and are logged; nothing propagates past this point.

use crate::document::{DocumentError, Mutation, ScalarField};
use crate::ui::mvi::Reducer;

use super::intent::ResumeIntent;
use super::state::ResumeState;

pub struct ResumeReducer;

impl Reducer for ResumeReducer {
    type State = ResumeState;
    type Intent = ResumeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResumeIntent::Mutate(mutation) => apply(&mut state, mutation),

            ResumeIntent::Row(action) => match action.resolve(&state.document) {
                Ok(mutation) => apply(&mut state, mutation),
                Err(err) => reject(&err),
            },

            ResumeIntent::SetFieldPath { path, value } => match ScalarField::from_path(&path) {
                Ok(field) => apply(&mut state, Mutation::SetField { field, value }),
                Err(err) => {
                    // Bindings are static; an unknown path is a wiring bug.
                    debug_assert!(false, "{err}");
                    reject(&err);
                }
            },

            ResumeIntent::StageSkill { value } => state.staged_skill = value,

            ResumeIntent::AddSkill => {
                if let Some(row) = state.document.add_skill(&state.staged_skill) {
                    tracing::debug!(%row, "Skill added");
                    state.staged_skill.clear();
                }
            }

            ResumeIntent::Reset => {
                tracing::info!("Resume form reset");
                return ResumeState::default();
            }
        }
        state
    }
}

fn apply(state: &mut ResumeState, mutation: Mutation) {
    tracing::debug!(?mutation, "Applying mutation");
    if let Err(err) = state.document.apply(mutation) {
        reject(&err);
    }
}

fn reject(err: &DocumentError) {
    tracing::warn!(error = %err, "Mutation rejected");
}
