use std::fmt;

/// Errors that occur when constructing or validating domain model types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    /// A name was empty or contained characters outside its rule.
    InvalidName(String),
    /// A data type token was empty, whitespace only, or held a control character.
    InvalidDataType(String),
    /// A file version was not formatted as `<major>.<minor>`.
    InvalidFileVersion(String),
    /// Two fields in the same entity or key share a name.
    DuplicateFieldName { owner: String, field: String },
    /// Two entities in the same enterprise share a name.
    DuplicateEntityName(String),
    /// Two entity keys in the same enterprise share a name.
    DuplicateKeyName(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(s) => {
                write!(
                    f,
                    "invalid name '{s}': must be non-empty and contain only identifier characters"
                )
            }
            Self::InvalidDataType(s) => {
                write!(
                    f,
                    "invalid data type '{s}': must be non-empty and free of control characters"
                )
            }
            Self::InvalidFileVersion(s) => {
                write!(
                    f,
                    "invalid file version '{s}': must be formatted as <major>.<minor>"
                )
            }
            Self::DuplicateFieldName { owner, field } => {
                write!(f, "duplicate field name '{field}' in '{owner}'")
            }
            Self::DuplicateEntityName(n) => write!(f, "duplicate entity name '{n}'"),
            Self::DuplicateKeyName(n) => write!(f, "duplicate entity key name '{n}'"),
        }
    }
}

impl std::error::Error for DomainError {}
