use serde::Serialize;

use crate::error::DomainError;

use super::field::{ensure_unique_fields, Field};
use super::name_type::NameType;

/// Structural description of a generated class: one read/write property
/// per field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    name: NameType,
    fields: Vec<Field>,
}

impl Entity {
    /// Creates a new `Entity`, rejecting duplicate field names.
    pub fn new(name: NameType, fields: Vec<Field>) -> Result<Self, DomainError> {
        ensure_unique_fields(&name, &fields)?;
        Ok(Self { name, fields })
    }

    pub fn name(&self) -> &NameType {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "entity {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        write!(f, "}}")
    }
}
