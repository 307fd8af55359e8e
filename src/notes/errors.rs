use thiserror::Error;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("User has no notes.")]
    UserHasNoNotes,

    #[error("Invalid note index.")]
    InvalidIndex,

    #[error("Note storage is unavailable: {0}")]
    Storage(#[from] StorageError),
}
