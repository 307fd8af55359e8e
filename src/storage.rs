mod errors;
mod internal;

pub use errors::StorageError;
pub use internal::{LoadOutcome, Store, StoreImpl};
pub use internal::io_trait::{ProductionStoreIo, StoreIo};
