
use std::error::Error;
use std::sync::Arc;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use sha2::{Digest, Sha256};
use thiserror::Error;
use crate::config::hasher_config::{CredentialPolicyKind, HasherConfigData};

/// How passwords are turned into stored credentials.
///
/// Register, login and reset only ever go through this trait, so the
/// stored format can change without touching them.
pub trait CredentialPolicy: Send + Sync {
    fn generate_hash(&self, password: &str) -> Result<String, HasherError>;

    fn check_hash(
        &self,
        hash: &str,
        password: &str,
    ) -> Result<bool, HasherError>;

    /// What goes into `plain_password` alongside the hash.
    fn retained_plaintext(&self, password: &str) -> String;
}

/// Single unsalted SHA-256 over the UTF-8 bytes, hex encoded.
/// Retains the plaintext. Intentionally insecure.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeakSha256Policy;

pub fn weak_hash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

impl CredentialPolicy for WeakSha256Policy {
    fn generate_hash(&self, password: &str) -> Result<String, HasherError> {
        Ok(weak_hash(password))
    }

    fn check_hash(
        &self,
        hash: &str,
        password: &str,
    ) -> Result<bool, HasherError> {
        Ok(weak_hash(password) == hash)
    }

    fn retained_plaintext(&self, password: &str) -> String {
        password.to_owned()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Argon2PolicyConfig {
    pub argon2_params: argon2::Params,
}

/// Salted Argon2id PHC strings, no plaintext kept.
pub struct Argon2Policy {
    argon2_params: argon2::Params,
}

impl Argon2Policy {
    pub fn new(config: Argon2PolicyConfig) -> Self {
        Argon2Policy {
            argon2_params: config.argon2_params,
        }
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.argon2_params.clone(),
        )
    }
}

impl CredentialPolicy for Argon2Policy {
    fn generate_hash(&self, password: &str) -> Result<String, HasherError> {
        let salt = SaltString::generate(&mut OsRng);
        self.get_hasher()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| HasherError::Hash(Box::new(e)))
    }

    fn check_hash(
        &self,
        hash: &str,
        password: &str,
    ) -> Result<bool, HasherError> {
        let hash = PasswordHash::new(hash)
            .map_err(|e| HasherError::Hash(Box::new(e)))?;
        self.get_hasher()
            .verify_password(password.as_bytes(), &hash)
            .map(|_| true)
            .or_else(|e|
                if let argon2::password_hash::Error::Password = e {
                    Ok(false)
                } else {
                    Err(HasherError::Hash(Box::new(e)))
                }
            )
    }

    fn retained_plaintext(&self, _password: &str) -> String {
        String::new()
    }
}

pub fn make_policy(
    config: &HasherConfigData,
) -> Result<Arc<dyn CredentialPolicy>, HasherError> {
    Ok(
        match config.policy {
            CredentialPolicyKind::WeakSha256 => Arc::new(WeakSha256Policy),
            CredentialPolicyKind::Argon2 => Arc::new(
                Argon2Policy::new(
                    Argon2PolicyConfig {
                        argon2_params: config
                            .make_params()
                            .map_err(|e|
                                HasherError::Initialization(Box::new(e))
                            )?,
                    }
                )
            ),
        }
    )
}

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("failed to initialize password hasher: {0}")]
    Initialization(Box<dyn Error + Send + Sync>),

    #[error("failed to hash password: {0}")]
    Hash(Box<dyn Error + Send + Sync>),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
