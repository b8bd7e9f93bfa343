use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The declared type of a generated field.
///
/// The token is opaque: it is emitted verbatim and never type-checked, so
/// `int`, `string`, `List<Order>` and `decimal?` are all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataType(String);

impl DataType {
    /// Creates a new `DataType`, rejecting empty or whitespace-only tokens
    /// and tokens containing line breaks or other control characters.
    pub fn new(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if s.trim().is_empty() || s.chars().any(char::is_control) {
            return Err(DomainError::InvalidDataType(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DataType> for String {
    fn from(t: DataType) -> String {
        t.0
    }
}

impl TryFrom<String> for DataType {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
