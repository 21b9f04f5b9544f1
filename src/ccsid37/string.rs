use super::encode::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref, str::FromStr};

/// Text made only of characters CCSID 37 can represent.
///
/// The guarantee belongs to the constructors: [`Ccsid37String::new`], the `TryFrom` and `FromStr`
/// impls, deserialization and [`decode`](super::decode()) all check it. [`Ccsid37String::new_unchecked`]
/// does not, so the type alone is not proof once that constructor is in play.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ccsid37String(String);

impl Ccsid37String {
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        match super::Encoder::default().first_unsupported(&value) {
            Some((index, character)) => Err(Error::UnsupportedCharacter { character, index }),
            None => Ok(Self(value)),
        }
    }

    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        super::encode(&self.0)
    }

    pub fn valid(&self) -> bool {
        super::valid(&self.0)
    }
}

impl Deref for Ccsid37String {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Ccsid37String {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ccsid37String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ccsid37String {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Ccsid37String {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Ccsid37String {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Error> {
        Self::new(value)
    }
}

impl From<Ccsid37String> for String {
    fn from(value: Ccsid37String) -> Self {
        value.0
    }
}

impl PartialEq<str> for Ccsid37String {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ccsid37String {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
