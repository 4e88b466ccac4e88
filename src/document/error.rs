use thiserror::Error;

use crate::document::field::ListKind;

/// Errors raised by document mutations.
///
/// The model is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("{list} index {index} out of range (len {len})")]
    IndexOutOfRange {
        list: ListKind,
        index: usize,
        len: usize,
    },

    #[error("{list} row no longer exists")]
    StaleRow { list: ListKind },

    #[error("unknown field path '{path}'")]
    UnknownFieldPath { path: String },

    #[error("{list} entries have no field '{key}'")]
    UnknownEntryField { list: ListKind, key: String },
}
