use std::fmt;

use serde::{Deserialize, Serialize};

/// Free text describing an enterprise. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Creates a description, trimming surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Description {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Description> for String {
    fn from(d: Description) -> String {
        d.0
    }
}
