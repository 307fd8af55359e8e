#[cfg(test)] mod tests;

use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use crate::data::{Account, NotesByUser};
use crate::storage::{StoreImpl, StoreIo};
use crate::user_db::{UserDb, UserDbError};

/// Read-through views over both collections for the administrator.
///
/// Callers are expected to have authenticated the administrator already.
#[async_trait]
pub trait AdminQueries: Send + Sync {
    async fn list_all_accounts(&self) -> Vec<Account>;

    async fn list_all_notes(&self) -> NotesByUser;

    async fn reset_user_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<String, UserDbError>;
}

pub struct AdminQueriesImpl<Io: StoreIo, U: UserDb + ?Sized> {
    store: Arc<StoreImpl<Io>>,
    user_db: Arc<U>,
}

impl<Io: StoreIo, U: UserDb + ?Sized> AdminQueriesImpl<Io, U> {
    pub fn new(store: Arc<StoreImpl<Io>>, user_db: Arc<U>) -> Self {
        AdminQueriesImpl { store, user_db }
    }
}

#[async_trait]
impl<Io: StoreIo, U: UserDb + ?Sized> AdminQueries for AdminQueriesImpl<Io, U> {
    async fn list_all_accounts(&self) -> Vec<Account> {
        let accounts = self.store.load_accounts().await;
        debug!("listing {} accounts", accounts.len());
        accounts
    }

    async fn list_all_notes(&self) -> NotesByUser {
        let notes = self.store.load_notes().await;
        debug!("listing notes of {} users", notes.len());
        notes
    }

    async fn reset_user_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<String, UserDbError> {
        self.user_db.reset_password(username, new_password).await
    }
}
