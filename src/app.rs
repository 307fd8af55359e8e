
use std::fmt::Display;
use std::sync::Arc;
use log::{error, info};
use thiserror::Error;
use crate::admin::{AdminQueries, AdminQueriesImpl};
use crate::config::app_config::AppConfig;
use crate::data::{Account, Note, NotesByUser, Role};
use crate::hasher::{make_policy, CredentialPolicy, HasherError};
use crate::notes::{NoteService, NoteServiceImpl};
use crate::storage::{Store, StoreImpl, StoreIo, StorageError};
use crate::user_db::{AdminPrincipal, UserDb, UserDbImpl};

/// What the front-end shows after a mutating operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
}

impl Outcome {
    pub fn accepted(message: impl Into<String>) -> Self {
        Outcome {
            ok: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Outcome {
            ok: false,
            message: message.into(),
        }
    }
}

impl<E: Display> From<Result<String, E>> for Outcome {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(message) => Outcome::accepted(message),
            Err(e) => Outcome::rejected(e.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to open the data directory: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to set up password hashing: {0}")]
    Hashing(#[from] HasherError),
}

/// The operations a user interface needs, flattened to `(ok, message)`
/// results. Administrator-only calls are not re-authorized here.
pub struct NotesApp {
    user_db: Arc<dyn UserDb>,
    notes: Arc<dyn NoteService>,
    admin: Arc<dyn AdminQueries>,
}

impl NotesApp {
    pub fn new(
        user_db: Arc<dyn UserDb>,
        notes: Arc<dyn NoteService>,
        admin: Arc<dyn AdminQueries>,
    ) -> Self {
        NotesApp {
            user_db,
            notes,
            admin,
        }
    }

    pub fn with_store<Io: StoreIo + 'static>(
        store: Arc<StoreImpl<Io>>,
        policy: Arc<dyn CredentialPolicy>,
        admin_principal: AdminPrincipal,
    ) -> Self {
        let user_db: Arc<dyn UserDb> = Arc::new(
            UserDbImpl::new(policy, admin_principal, store.clone())
        );
        NotesApp::new(
            user_db.clone(),
            Arc::new(NoteServiceImpl::new(store.clone())),
            Arc::new(AdminQueriesImpl::new(store, user_db)),
        )
    }

    pub async fn from_config(app_config: &AppConfig) -> Result<Self, AppError> {
        let policy = make_policy(&app_config.hasher_config)?;
        let store = Store::open(&app_config.data_directory).await?;
        info!(
            "using data directory \"{}\"",
            app_config.data_directory.display(),
        );
        Ok(
            NotesApp::with_store(
                Arc::new(store),
                policy,
                AdminPrincipal::from_config(app_config),
            )
        )
    }

    pub async fn register(&self, username: &str, password: &str) -> Outcome {
        self.user_db.register(username, password).await.into()
    }

    /// Failures inside the credential check count as a rejected login.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> (bool, Option<Role>) {
        match self.user_db.login(username, password).await {
            Ok(role) => (role.is_some(), role),
            Err(e) => {
                error!("login of \"{username}\" failed: {e}");
                (false, None)
            },
        }
    }

    pub async fn list_notes(&self, username: &str) -> Vec<Note> {
        self.notes.list_notes(username).await
    }

    pub async fn add_note(
        &self,
        username: &str,
        title: &str,
        content: &str,
    ) -> Outcome {
        self.notes.add_note(username, title, content).await.into()
    }

    pub async fn edit_note(
        &self,
        username: &str,
        index: i64,
        title: &str,
        content: &str,
    ) -> Outcome {
        self.notes.edit_note(username, index, title, content).await.into()
    }

    pub async fn delete_note(&self, username: &str, index: i64) -> Outcome {
        self.notes.delete_note(username, index).await.into()
    }

    pub async fn list_all_accounts(&self) -> Vec<Account> {
        self.admin.list_all_accounts().await
    }

    pub async fn list_all_notes(&self) -> NotesByUser {
        self.admin.list_all_notes().await
    }

    pub async fn reset_user_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Outcome {
        self.admin.reset_user_password(username, new_password).await.into()
    }
}
