use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info, trace};
use tokio::task::spawn_blocking;
use crate::data::{Account, Role};
use crate::hasher::{CredentialPolicy, HasherError};
use crate::storage::{StoreImpl, StoreIo};
use crate::user_db::{UserDb, UserDbError};
use crate::username_string::UsernameString;

pub use admin_principal::AdminPrincipal;

mod admin_principal;

pub struct UserDbImpl<P: CredentialPolicy + ?Sized + 'static, Io: StoreIo> {
    policy: Arc<P>,
    admin: AdminPrincipal,
    store: Arc<StoreImpl<Io>>,
}

impl<P: CredentialPolicy + ?Sized + 'static, Io: StoreIo> UserDbImpl<P, Io> {
    pub fn new(
        policy: Arc<P>,
        admin: AdminPrincipal,
        store: Arc<StoreImpl<Io>>,
    ) -> Self {
        UserDbImpl {
            policy,
            admin,
            store,
        }
    }

    async fn generate_hash(
        &self,
        password: &str,
    ) -> Result<String, HasherError> {
        let policy = self.policy.clone();
        let password = password.to_owned();
        spawn_blocking(move || policy.generate_hash(&password)).await?
    }

    async fn check_hash(
        &self,
        hash: String,
        password: &str,
    ) -> Result<bool, HasherError> {
        let policy = self.policy.clone();
        let password = password.to_owned();
        spawn_blocking(move || policy.check_hash(&hash, &password)).await?
    }
}

#[async_trait]
impl<P: CredentialPolicy + ?Sized + 'static, Io: StoreIo> UserDb for UserDbImpl<P, Io> {
    async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, UserDbError> {
        let username = UsernameString::from_str(username)
            .map_err(|_| UserDbError::InvalidInput)?;
        if password.is_empty() {
            return Err(UserDbError::InvalidInput);
        }
        if self.admin.is_reserved(&username) {
            debug!("refusing to register reserved username \"{username}\"");
            return Err(UserDbError::ReservedUsername);
        }

        let password_hash = self.generate_hash(password).await?;
        let plain_password = self.policy.retained_plaintext(password);
        self.store
            .modify_accounts(|accounts| {
                if accounts.iter().any(|a| a.username == username) {
                    return Err(UserDbError::DuplicateUser);
                }
                accounts.push(
                    Account {
                        username: username.clone(),
                        password_hash,
                        plain_password,
                        role: Role::User,
                    }
                );
                Ok(())
            })
            .await?;
        info!("registered user \"{username}\"");
        Ok("User registered successfully.".into())
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Role>, UserDbError> {
        trace!("checking credentials for \"{username}\"");
        if self.admin.is_reserved(username) {
            let ok = self.admin.check_password(password);
            debug!("administrator login, accepted: {ok}");
            return Ok(ok.then_some(Role::Admin));
        }

        let user = match self.get_user(username).await {
            Some(user) => user,
            None => {
                debug!("user \"{username}\" not found");
                return Ok(None);
            },
        };
        let ok = self.check_hash(user.password_hash, password).await?;
        debug!("user \"{username}\" login, accepted: {ok}");
        // a stored role never grants more than `user`
        Ok(ok.then_some(Role::User))
    }

    async fn reset_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<String, UserDbError> {
        if self.admin.is_reserved(username) {
            return Err(UserDbError::AdminPasswordImmutable);
        }

        let password_hash = self.generate_hash(new_password).await?;
        let plain_password = self.policy.retained_plaintext(new_password);
        self.store
            .modify_accounts(|accounts| {
                let account = accounts
                    .iter_mut()
                    .find(|a| a.username == *username)
                    .ok_or(UserDbError::UserNotFound)?;
                account.password_hash = password_hash;
                account.plain_password = plain_password;
                Ok::<_, UserDbError>(())
            })
            .await?;
        info!("password reset for user \"{username}\"");
        Ok(format!("Password for '{username}' has been updated."))
    }

    async fn get_user(&self, username: &str) -> Option<Account> {
        self.store
            .load_accounts()
            .await
            .into_iter()
            .find(|a| a.username == *username)
    }
}
