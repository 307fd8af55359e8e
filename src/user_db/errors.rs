use thiserror::Error;
use crate::hasher::HasherError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum UserDbError {
    #[error("Username and password cannot be empty.")]
    InvalidInput,

    #[error("Username already exists.")]
    DuplicateUser,

    #[error("Username is reserved.")]
    ReservedUsername,

    #[error("User not found.")]
    UserNotFound,

    #[error("Admin password cannot be changed here.")]
    AdminPasswordImmutable,

    #[error("Account storage is unavailable: {0}")]
    Storage(#[from] StorageError),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] HasherError),
}
