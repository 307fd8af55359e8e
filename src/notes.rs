mod errors;

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info};
use crate::data::{Note, NotesByUser};
use crate::storage::{StoreImpl, StoreIo};

pub use errors::NoteError;

/// Per-user notes, addressed by position in the owner's list.
#[async_trait]
pub trait NoteService: Send + Sync {
    async fn list_notes(&self, username: &str) -> Vec<Note>;

    async fn add_note(
        &self,
        username: &str,
        title: &str,
        content: &str,
    ) -> Result<String, NoteError>;

    /// Replaces the note at `index` wholesale.
    async fn edit_note(
        &self,
        username: &str,
        index: i64,
        title: &str,
        content: &str,
    ) -> Result<String, NoteError>;

    /// Later notes shift down by one.
    async fn delete_note(
        &self,
        username: &str,
        index: i64,
    ) -> Result<String, NoteError>;
}

pub struct NoteServiceImpl<Io: StoreIo> {
    store: Arc<StoreImpl<Io>>,
}

impl<Io: StoreIo> NoteServiceImpl<Io> {
    pub fn new(store: Arc<StoreImpl<Io>>) -> Self {
        NoteServiceImpl { store }
    }
}

#[async_trait]
impl<Io: StoreIo> NoteService for NoteServiceImpl<Io> {
    async fn list_notes(&self, username: &str) -> Vec<Note> {
        self.store
            .load_notes()
            .await
            .remove(username)
            .unwrap_or_default()
    }

    async fn add_note(
        &self,
        username: &str,
        title: &str,
        content: &str,
    ) -> Result<String, NoteError> {
        let count = self.store
            .modify_notes(|notes| {
                let list = notes.entry(username.to_owned()).or_default();
                list.push(Note::new(title, content));
                Ok::<_, NoteError>(list.len())
            })
            .await?;
        info!("added note for \"{username}\", now {count}");
        Ok("Note added.".into())
    }

    async fn edit_note(
        &self,
        username: &str,
        index: i64,
        title: &str,
        content: &str,
    ) -> Result<String, NoteError> {
        self.store
            .modify_notes(|notes| {
                let note = user_note_at(notes, username, index)?;
                *note = Note::new(title, content);
                Ok::<_, NoteError>(())
            })
            .await?;
        info!("edited note {index} of \"{username}\"");
        Ok("Note updated.".into())
    }

    async fn delete_note(
        &self,
        username: &str,
        index: i64,
    ) -> Result<String, NoteError> {
        self.store
            .modify_notes(|notes| {
                let list = notes
                    .get_mut(username)
                    .ok_or(NoteError::UserHasNoNotes)?;
                let index = check_index(list, index)?;
                list.remove(index);
                Ok::<_, NoteError>(())
            })
            .await?;
        info!("deleted note {index} of \"{username}\"");
        Ok("Note deleted.".into())
    }
}

fn user_note_at<'a>(
    notes: &'a mut NotesByUser,
    username: &str,
    index: i64,
) -> Result<&'a mut Note, NoteError> {
    let list = notes
        .get_mut(username)
        .ok_or(NoteError::UserHasNoNotes)?;
    let index = check_index(list, index)?;
    Ok(&mut list[index])
}

fn check_index(list: &[Note], index: i64) -> Result<usize, NoteError> {
    usize::try_from(index)
        .ok()
        .filter(|i| *i < list.len())
        .ok_or_else(|| {
            debug!("note index {index} out of 0..{}", list.len());
            NoteError::InvalidIndex
        })
}
