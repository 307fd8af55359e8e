use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::username_string::UsernameString;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Account {
    pub username: UsernameString,
    pub password_hash: String,
    // kept in the clear for the admin panel, see CredentialPolicy
    pub plain_password: String,
    pub role: Role,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Note {
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Note {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Notes keyed by owner; an owner's list exists only after their first note.
pub type NotesByUser = BTreeMap<String, Vec<Note>>;
