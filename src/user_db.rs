mod errors;
mod internal;

use async_trait::async_trait;
use crate::data::{Account, Role};

pub use errors::UserDbError;
pub use internal::{AdminPrincipal, UserDbImpl};

#[async_trait]
pub trait UserDb: Send + Sync {
    /// Returns the confirmation message on success.
    async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, UserDbError>;

    /// `None` means the credentials were rejected.
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Role>, UserDbError>;

    async fn reset_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<String, UserDbError>;

    async fn get_user(&self, username: &str) -> Option<Account>;

    async fn does_user_exist(&self, username: &str) -> bool {
        self.get_user(username).await.is_some()
    }
}
