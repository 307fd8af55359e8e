use std::borrow::Borrow;
use std::fmt;
use std::fmt::Formatter;
use std::ops::Deref;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::de::Unexpected::Str;
use thiserror::Error;

/// A non-empty, case-sensitive account name.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UsernameString(String);

#[derive(Debug, Error, Eq, PartialEq)]
#[error("username cannot be empty")]
pub struct UsernameParseError;

impl FromStr for UsernameString {
    type Err = UsernameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UsernameParseError);
        }
        Ok(UsernameString(s.to_owned()))
    }
}

impl Deref for UsernameString {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl Borrow<str> for UsernameString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UsernameString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UsernameString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for UsernameString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UsernameString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for UsernameString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UsernameString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = UsernameString;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a non-empty username")
            }

            fn visit_str<E>(self, v: &str) -> Result<UsernameString, E>
            where
                E: Error
            {
                UsernameString::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_username_rejected() {
        assert_eq!(UsernameString::from_str(""), Err(UsernameParseError));
    }

    #[test]
    fn username_is_case_sensitive() {
        let lower = UsernameString::from_str("alice").unwrap();
        let upper = UsernameString::from_str("Alice").unwrap();
        assert_ne!(lower, upper);
        assert_eq!(lower, "alice");
    }

    #[test]
    fn deserialize_rejects_empty() {
        assert!(serde_json::from_str::<UsernameString>(r#""""#).is_err());
        assert_eq!(
            serde_json::from_str::<UsernameString>(r#""bob""#).unwrap(),
            "bob",
        );
    }
}
