use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Characters that may never appear in a name, whatever the rule says,
/// because names end up as path segments of generated files.
const PATH_RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '.'];

/// The character class a [`NameType`] is validated against.
///
/// The default rule accepts `[A-Za-z_][A-Za-z0-9_]*`. Extra characters can
/// be allowed (for example `-` for file-friendly titles) but path separators,
/// whitespace and control characters are always rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameRule {
    extra_chars: Vec<char>,
    allow_leading_digit: bool,
}

impl NameRule {
    /// Allows `chars` anywhere after the first character.
    pub fn with_extra_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.extra_chars.extend(
            chars
                .into_iter()
                .filter(|c| !PATH_RESERVED.contains(c) && !c.is_whitespace() && !c.is_control()),
        );
        self
    }

    /// Allows names that start with an ASCII digit.
    pub fn allow_leading_digit(mut self) -> Self {
        self.allow_leading_digit = true;
        self
    }

    /// Returns true when `s` satisfies this rule.
    pub fn accepts(&self, s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(c) if self.allow_leading_digit && c.is_ascii_digit() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || self.extra_chars.contains(&c))
    }
}

/// A validated identifier or title.
///
/// Used for entity, key, field and enterprise title names; every value is
/// safe to emit as a source identifier and as a file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameType(String);

impl NameType {
    /// Creates a new `NameType` using the default [`NameRule`].
    pub fn new(s: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_rule(s, &NameRule::default())
    }

    /// Creates a new `NameType` validated against `rule`.
    pub fn with_rule(s: impl Into<String>, rule: &NameRule) -> Result<Self, DomainError> {
        let s = s.into();
        if !rule.accepts(&s) {
            return Err(DomainError::InvalidName(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NameType> for String {
    fn from(n: NameType) -> String {
        n.0
    }
}

impl TryFrom<String> for NameType {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for NameType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
