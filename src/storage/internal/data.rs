use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::data::{Account, Note, NotesByUser, Role};
use crate::username_string::UsernameString;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccountData {
    pub username: UsernameString,
    pub password_hash: String,

    // missing in accounts written before plaintext retention existed
    #[serde(default)]
    pub plain_password: String,

    pub role: Role,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccountsData {
    #[serde(default, rename = "account")]
    pub accounts: Vec<AccountData>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NoteData {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotesData {
    #[serde(default)]
    pub notes: BTreeMap<String, Vec<NoteData>>,
}

impl From<AccountData> for Account {
    fn from(value: AccountData) -> Self {
        Account {
            username: value.username,
            password_hash: value.password_hash,
            plain_password: value.plain_password,
            role: value.role,
        }
    }
}

impl From<&Account> for AccountData {
    fn from(value: &Account) -> Self {
        AccountData {
            username: value.username.clone(),
            password_hash: value.password_hash.clone(),
            plain_password: value.plain_password.clone(),
            role: value.role,
        }
    }
}

impl From<NoteData> for Note {
    fn from(value: NoteData) -> Self {
        Note {
            title: value.title,
            content: value.content,
        }
    }
}

impl From<&Note> for NoteData {
    fn from(value: &Note) -> Self {
        NoteData {
            title: value.title.clone(),
            content: value.content.clone(),
        }
    }
}

impl From<AccountsData> for Vec<Account> {
    fn from(value: AccountsData) -> Self {
        value.accounts
            .into_iter()
            .map(Account::from)
            .collect()
    }
}

impl From<&[Account]> for AccountsData {
    fn from(value: &[Account]) -> Self {
        AccountsData {
            accounts: value.iter().map(AccountData::from).collect(),
        }
    }
}

impl From<NotesData> for NotesByUser {
    fn from(value: NotesData) -> Self {
        value.notes
            .into_iter()
            .map(|(username, notes)|
                (username, notes.into_iter().map(Note::from).collect())
            )
            .collect()
    }
}

impl From<&NotesByUser> for NotesData {
    fn from(value: &NotesByUser) -> Self {
        NotesData {
            notes: value
                .iter()
                .map(|(username, notes)|
                    (
                        username.clone(),
                        notes.iter().map(NoteData::from).collect(),
                    )
                )
                .collect(),
        }
    }
}
