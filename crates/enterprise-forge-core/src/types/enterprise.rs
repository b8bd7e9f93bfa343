use std::collections::HashSet;

use serde::Serialize;

use crate::error::DomainError;

use super::description::Description;
use super::entity::Entity;
use super::entity_key::EntityKey;
use super::name_type::NameType;

/// The root value a definition produces: one business domain with its
/// entities and entity keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enterprise {
    name: String,
    title: NameType,
    description: Description,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    entities: Vec<Entity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keys: Vec<EntityKey>,
}

impl Enterprise {
    /// Creates an enterprise with no entities or keys.
    pub fn new(name: impl Into<String>, title: NameType, description: Description) -> Self {
        Self {
            name: name.into(),
            title,
            description,
            entities: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Creates an enterprise with its entities and keys, validating:
    /// - no two entities share a name
    /// - no two keys share a name
    pub fn with_members(
        name: impl Into<String>,
        title: NameType,
        description: Description,
        entities: Vec<Entity>,
        keys: Vec<EntityKey>,
    ) -> Result<Self, DomainError> {
        let mut entity_names = HashSet::with_capacity(entities.len());
        for e in &entities {
            if !entity_names.insert(e.name().as_str()) {
                return Err(DomainError::DuplicateEntityName(e.name().to_string()));
            }
        }

        let mut key_names = HashSet::with_capacity(keys.len());
        for k in &keys {
            if !key_names.insert(k.name().as_str()) {
                return Err(DomainError::DuplicateKeyName(k.name().to_string()));
            }
        }

        Ok(Self {
            name: name.into(),
            title,
            description,
            entities,
            keys,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &NameType {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn keys(&self) -> &[EntityKey] {
        &self.keys
    }

    /// Looks up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name().as_str() == name)
    }

    /// Looks up an entity key by name.
    pub fn key(&self, name: &str) -> Option<&EntityKey> {
        self.keys.iter().find(|k| k.name().as_str() == name)
    }
}

impl std::fmt::Display for Enterprise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    fn entity(name: &str) -> Entity {
        Entity::new(
            NameType::new(name).unwrap(),
            vec![Field::parse("Id", "int").unwrap()],
        )
        .unwrap()
    }

    fn key(name: &str) -> EntityKey {
        EntityKey::new(
            NameType::new(name).unwrap(),
            vec![Field::parse("Id", "int").unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn bare_enterprise() {
        let ent = Enterprise::new(
            "crm",
            NameType::new("Crm").unwrap(),
            Description::new("Customer relations"),
        );
        assert_eq!(ent.name(), "crm");
        assert_eq!(ent.title().as_str(), "Crm");
        assert_eq!(ent.description().as_str(), "Customer relations");
        assert!(ent.entities().is_empty());
        assert!(ent.keys().is_empty());
        assert_eq!(ent.to_string(), "Crm (crm)");
    }

    #[test]
    fn with_members_and_lookup() {
        let ent = Enterprise::with_members(
            "crm",
            NameType::new("Crm").unwrap(),
            Description::default(),
            vec![entity("Customer"), entity("Order")],
            vec![key("CustomerKey")],
        )
        .unwrap();
        assert!(ent.entity("Order").is_some());
        assert!(ent.entity("Invoice").is_none());
        assert!(ent.key("CustomerKey").is_some());
    }

    #[test]
    fn rejects_duplicate_entities() {
        let result = Enterprise::with_members(
            "crm",
            NameType::new("Crm").unwrap(),
            Description::default(),
            vec![entity("Customer"), entity("Customer")],
            Vec::new(),
        );
        assert_eq!(
            result,
            Err(DomainError::DuplicateEntityName("Customer".into()))
        );
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = Enterprise::with_members(
            "crm",
            NameType::new("Crm").unwrap(),
            Description::default(),
            Vec::new(),
            vec![key("CustomerKey"), key("CustomerKey")],
        );
        assert_eq!(result, Err(DomainError::DuplicateKeyName("CustomerKey".into())));
    }

    #[test]
    fn serializes_members() {
        let ent = Enterprise::with_members(
            "crm",
            NameType::new("Crm").unwrap(),
            Description::new("desc"),
            vec![entity("Customer")],
            Vec::new(),
        )
        .unwrap();
        let json = serde_json::to_value(&ent).unwrap();
        assert_eq!(json["title"], "Crm");
        assert_eq!(json["entities"][0]["name"], "Customer");
        assert_eq!(json["entities"][0]["fields"][0]["data_type"], "int");
        assert!(json.get("keys").is_none());
    }
}
