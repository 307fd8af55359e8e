use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, error, info, trace, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io;
use tokio::sync::Mutex;

use crate::data::{Account, NotesByUser};
use crate::lib_constants::{ACCOUNTS_FILE_NAME, NOTES_FILE_NAME};
use crate::storage::errors::StorageError;
use data::{AccountsData, NotesData};
use io_trait::{ProductionStoreIo, StoreIo};

mod data;
pub(super) mod io_trait;

const TMP_FILENAME_INFIX: &str = ".tmp.";

/// Result of reading one collection file.
///
/// `Corrupt` covers both unreadable and unparseable files.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Absent,
    Corrupt(StorageError),
}

impl<T> LoadOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        match self {
            LoadOutcome::Loaded(data) => LoadOutcome::Loaded(f(data)),
            LoadOutcome::Absent => LoadOutcome::Absent,
            LoadOutcome::Corrupt(e) => LoadOutcome::Corrupt(e),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

impl<T: Default> LoadOutcome<T> {
    pub fn into_data_or_default(self) -> T {
        match self {
            LoadOutcome::Loaded(data) => data,
            LoadOutcome::Absent | LoadOutcome::Corrupt(_) => T::default(),
        }
    }
}

pub type Store = StoreImpl<ProductionStoreIo>;

/// File-backed accounts and notes collections.
///
/// Every collection is read and written whole. Writes go to a temporary
/// file that is then renamed over the target. Each collection has its own
/// lock, held for the whole load-mutate-store cycle of `modify_*`.
pub struct StoreImpl<Io: StoreIo> {
    io: Io,
    basedir: PathBuf,
    accounts_lock: Mutex<()>,
    notes_lock: Mutex<()>,
}

impl Store {
    pub async fn open(
        data_directory: impl Into<PathBuf>,
    ) -> Result<Store, StorageError> {
        Self::open_with_io(data_directory.into(), ProductionStoreIo::new()).await
    }
}

impl<Io: StoreIo> StoreImpl<Io> {
    pub async fn open_with_io(
        basedir: PathBuf,
        io: Io,
    ) -> Result<StoreImpl<Io>, StorageError> {
        debug!("opening store at \"{}\"", basedir.display());
        let store = StoreImpl {
            io,
            basedir,
            accounts_lock: Mutex::new(()),
            notes_lock: Mutex::new(()),
        };
        store.initialize().await?;
        Ok(store)
    }

    pub fn accounts_path(&self) -> PathBuf {
        self.basedir.join(ACCOUNTS_FILE_NAME)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.basedir.join(NOTES_FILE_NAME)
    }

    #[cfg(test)]
    pub(crate) fn io(&self) -> &Io {
        &self.io
    }

    /// Creates the data directory and empty collections where missing.
    /// Existing files are left untouched.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        trace!("initializing store at \"{}\"", self.basedir.display());
        if self.io.exists(&self.basedir).await? {
            if !self.io.is_dir(&self.basedir).await? {
                return Err(StorageError::DataDirNotInitialized);
            }
        } else {
            info!("creating data directory \"{}\"", self.basedir.display());
            self.io.create_dir_all(&self.basedir).await?;
        }

        let _accounts_guard = self.accounts_lock.lock().await;
        let accounts_path = self.accounts_path();
        if !self.io.exists(&accounts_path).await? {
            debug!("creating empty accounts at \"{}\"", accounts_path.display());
            self.write_collection(&accounts_path, &AccountsData::default()).await?;
        }

        let _notes_guard = self.notes_lock.lock().await;
        let notes_path = self.notes_path();
        if !self.io.exists(&notes_path).await? {
            debug!("creating empty notes at \"{}\"", notes_path.display());
            self.write_collection(&notes_path, &NotesData::default()).await?;
        }
        Ok(())
    }

    pub async fn load_accounts_checked(&self) -> LoadOutcome<Vec<Account>> {
        let _guard = self.accounts_lock.lock().await;
        self.read_accounts().await
    }

    pub async fn load_accounts(&self) -> Vec<Account> {
        let outcome = self.load_accounts_checked().await;
        degrade_to_default(outcome, &self.accounts_path())
    }

    pub async fn save_accounts(
        &self,
        accounts: &[Account],
    ) -> Result<(), StorageError> {
        let _guard = self.accounts_lock.lock().await;
        self.write_accounts(accounts).await
    }

    /// Runs `f` over the accounts inside the accounts critical section.
    /// The collection is written back only if `f` succeeds.
    pub async fn modify_accounts<R, E>(
        &self,
        f: impl FnOnce(&mut Vec<Account>) -> Result<R, E> + Send,
    ) -> Result<R, E>
    where
        R: Send,
        E: From<StorageError> + Send,
    {
        let _guard = self.accounts_lock.lock().await;
        let mut accounts = degrade_to_default(
            self.read_accounts().await,
            &self.accounts_path(),
        );
        let result = f(&mut accounts)?;
        self.write_accounts(&accounts).await?;
        Ok(result)
    }

    pub async fn load_notes_checked(&self) -> LoadOutcome<NotesByUser> {
        let _guard = self.notes_lock.lock().await;
        self.read_notes().await
    }

    pub async fn load_notes(&self) -> NotesByUser {
        let outcome = self.load_notes_checked().await;
        degrade_to_default(outcome, &self.notes_path())
    }

    pub async fn save_notes(
        &self,
        notes: &NotesByUser,
    ) -> Result<(), StorageError> {
        let _guard = self.notes_lock.lock().await;
        self.write_notes(notes).await
    }

    /// Same as `modify_accounts`, for the notes mapping.
    pub async fn modify_notes<R, E>(
        &self,
        f: impl FnOnce(&mut NotesByUser) -> Result<R, E> + Send,
    ) -> Result<R, E>
    where
        R: Send,
        E: From<StorageError> + Send,
    {
        let _guard = self.notes_lock.lock().await;
        let mut notes = degrade_to_default(
            self.read_notes().await,
            &self.notes_path(),
        );
        let result = f(&mut notes)?;
        self.write_notes(&notes).await?;
        Ok(result)
    }

    async fn read_accounts(&self) -> LoadOutcome<Vec<Account>> {
        self.read_collection::<AccountsData>(&self.accounts_path())
            .await
            .map(Vec::from)
    }

    async fn write_accounts(
        &self,
        accounts: &[Account],
    ) -> Result<(), StorageError> {
        self.write_collection(
            &self.accounts_path(),
            &AccountsData::from(accounts),
        ).await
    }

    async fn read_notes(&self) -> LoadOutcome<NotesByUser> {
        self.read_collection::<NotesData>(&self.notes_path())
            .await
            .map(NotesByUser::from)
    }

    async fn write_notes(
        &self,
        notes: &NotesByUser,
    ) -> Result<(), StorageError> {
        self.write_collection(&self.notes_path(), &NotesData::from(notes)).await
    }

    async fn read_collection<D: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> LoadOutcome<D> {
        trace!("reading collection at \"{}\"", path.display());
        let bytes = match self.io.read_file(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::Absent,
            Err(e) => return LoadOutcome::Corrupt(e.into()),
        };
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => return LoadOutcome::Corrupt(
                io::Error::new(ErrorKind::InvalidData, e).into()
            ),
        };
        match toml::from_str::<D>(&text) {
            Ok(data) => LoadOutcome::Loaded(data),
            Err(e) => LoadOutcome::Corrupt(e.into()),
        }
    }

    async fn write_collection<D: Serialize + Sync>(
        &self,
        path: &Path,
        data: &D,
    ) -> Result<(), StorageError> {
        let serialized = toml::to_string(data)?;
        let tmp_path = self.get_tmp_path(path);
        trace!(
            "writing collection \"{}\" through \"{}\"",
            path.display(),
            tmp_path.display(),
        );
        if let Err(e) = self.io.write_file(&tmp_path, serialized.into_bytes()).await {
            error!("failed to write tmp file \"{}\": {e}", tmp_path.display());
            self.remove_tmp_file(&tmp_path).await;
            return Err(e.into());
        }
        if let Err(e) = self.io.rename_file(&tmp_path, path).await {
            error!(
                "failed to rename tmp file \"{}\" to \"{}\": {e}",
                tmp_path.display(),
                path.display(),
            );
            self.remove_tmp_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn remove_tmp_file(&self, tmp_path: &Path) {
        match self.io.remove_file(tmp_path).await {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => error!(
                "failed to remove tmp file \"{}\": {e}",
                tmp_path.display(),
            ),
        }
    }

    fn get_tmp_path(&self, path: &Path) -> PathBuf {
        let mut filename = path.file_name()
            .map(OsString::from)
            .unwrap_or_default();
        filename.push(TMP_FILENAME_INFIX);
        filename.push(self.io.generate_uuid().hyphenated().to_string());
        path.with_file_name(filename)
    }
}

fn degrade_to_default<T: Default>(outcome: LoadOutcome<T>, path: &Path) -> T {
    match &outcome {
        LoadOutcome::Loaded(_) => {},
        LoadOutcome::Absent => debug!(
            "collection at \"{}\" is absent, using empty",
            path.display(),
        ),
        LoadOutcome::Corrupt(e) => warn!(
            "collection at \"{}\" is unreadable, using empty: {e}",
            path.display(),
        ),
    }
    outcome.into_data_or_default()
}
