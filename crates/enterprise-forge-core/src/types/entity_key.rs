use serde::Serialize;

use crate::error::DomainError;

use super::field::{ensure_unique_fields, Field};
use super::name_type::NameType;

/// Structural description of a generated immutable key record: one
/// constructor parameter per field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityKey {
    name: NameType,
    fields: Vec<Field>,
}

impl EntityKey {
    /// Creates a new `EntityKey`, rejecting duplicate field names.
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
}

impl std::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params: Vec<String> = self.fields.iter().map(ToString::to_string).collect();
        write!(f, "key {}({})", self.name, params.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_key() {
        let key = EntityKey::new(
            NameType::new("OrderKey").unwrap(),
            vec![
                Field::parse("CustomerId", "int").unwrap(),
                Field::parse("OrderNo", "long").unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(key.name().as_str(), "OrderKey");
        assert_eq!(key.fields().len(), 2);
        assert_eq!(key.to_string(), "key OrderKey(CustomerId: int, OrderNo: long)");
    }

    #[test]
    fn rejects_duplicate_fields() {
        let result = EntityKey::new(
            NameType::new("OrderKey").unwrap(),
            vec![
                Field::parse("Id", "int").unwrap(),
                Field::parse("Id", "int").unwrap(),
            ],
        );
        assert_eq!(
            result,
            Err(DomainError::DuplicateFieldName {
                owner: "OrderKey".into(),
                field: "Id".into(),
            })
        );
    }
}
