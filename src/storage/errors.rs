use thiserror::Error;
use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("data directory is not initialized properly")]
    DataDirNotInitialized,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid collection file contents: {0}")]
    Parsing(#[from] toml::de::Error),

    #[error("serializing the collection failed: {0}")]
    Serializing(#[from] toml::ser::Error),
}
