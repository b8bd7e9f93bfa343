use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::data_type::DataType;
use super::name_type::NameType;

/// A named, typed attribute of an entity or entity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: NameType,
    pub data_type: DataType,
}

impl Field {
    pub fn new(name: NameType, data_type: DataType) -> Self {
        Self { name, data_type }
    }

    /// Validates both parts from raw strings.
    pub fn parse(name: &str, data_type: &str) -> Result<Self, DomainError> {
        Ok(Self::new(NameType::new(name)?, DataType::new(data_type)?))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)
    }
}

/// Rejects a field list in which two fields share a name.
pub(crate) fn ensure_unique_fields(owner: &NameType, fields: &[Field]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(DomainError::DuplicateFieldName {
                owner: owner.to_string(),
                field: field.name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validates_both_parts() {
        let field = Field::parse("Id", "int").unwrap();
        assert_eq!(field.name.as_str(), "Id");
        assert_eq!(field.data_type.as_str(), "int");
        assert!(Field::parse("", "int").is_err());
        assert!(Field::parse("Id", "").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Field::parse("Name", "string").unwrap().to_string(), "Name: string");
    }

    #[test]
    fn duplicate_detection() {
        let owner = NameType::new("Customer").unwrap();
        let fields = vec![
            Field::parse("Id", "int").unwrap(),
            Field::parse("Id", "string").unwrap(),
        ];
        assert_eq!(
            ensure_unique_fields(&owner, &fields),
            Err(DomainError::DuplicateFieldName {
                owner: "Customer".into(),
                field: "Id".into(),
            })
        );
    }
}
