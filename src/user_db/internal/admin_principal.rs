use std::fmt;
use crate::config::app_config::AppConfig;
use crate::lib_constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

/// The single administrator. Lives outside the account store and is
/// checked before any account lookup.
#[derive(Clone, Eq, PartialEq)]
pub struct AdminPrincipal {
    username: String,
    password: String,
}

impl AdminPrincipal {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        AdminPrincipal {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(app_config: &AppConfig) -> Self {
        Self::new(&app_config.admin_username, &app_config.admin_password)
    }

    pub fn is_reserved(&self, username: &str) -> bool {
        self.username == username
    }

    // plaintext on purpose, the admin credential is never hashed
    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}

impl Default for AdminPrincipal {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

impl fmt::Debug for AdminPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminPrincipal")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
