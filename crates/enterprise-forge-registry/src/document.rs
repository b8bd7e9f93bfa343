//! The built-in `document` entry point.
//!
//! Reads the enterprise from the unit's own `enterprise` member:
//!
//! ```text
//! "enterprise": {
//!   "name": "crm", "title": "Crm", "description": "...",
//!   "entities": [ { "name": "Customer", "fields": [ { "name": "Id", "type": "int" } ] } ],
//!   "keys": [ { "name": "CustomerKey", "fields": [ { "name": "Id", "type": "int" } ] } ]
//! }
//! ```
//!
//! `description`, `entities` and `keys` are optional. Every failure names
//! the offending member with a locator such as
//! `enterprise.entities[0].fields[1].type`.

use std::fmt;
use std::sync::Arc;

use enterprise_forge_core::types::{
    DataType, Description, Enterprise, Entity, EntityKey, Field, NameType,
};
use enterprise_forge_dsl::Json;

use crate::definition::{Definition, DefinitionFactory};
use crate::unit::DefinitionUnit;

/// Entry-point name of [`DocumentFactory`].
pub const DOCUMENT_ENTRY_POINT: &str = "document";

/// A document member that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretError {
    /// Path of the member, e.g. `enterprise.keys[2].name`.
    pub locator: String,
    pub reason: String,
}

impl InterpretError {
    fn new(locator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.locator, self.reason)
    }
}

impl std::error::Error for InterpretError {}

/// A definition whose enterprise was read from its unit's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefinition {
    enterprise: Enterprise,
}

impl DocumentDefinition {
    /// Interprets the `enterprise` member of a unit document.
    pub fn from_document(document: &Json) -> Result<Self, InterpretError> {
        let value = required(document, "enterprise", "")?;
        Ok(Self {
            enterprise: enterprise(value, "enterprise")?,
        })
    }

    pub fn enterprise(&self) -> &Enterprise {
        &self.enterprise
    }
}

impl Definition for DocumentDefinition {
    fn create(&self) -> Enterprise {
        self.enterprise.clone()
    }
}

/// Factory for the `document` entry point. Ignores its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentFactory;

impl DefinitionFactory for DocumentFactory {
    fn instantiate(
        &self,
        unit: &DefinitionUnit,
        _args: &[String],
    ) -> Result<Arc<dyn Definition>, String> {
        let definition = DocumentDefinition::from_document(unit.document())
            .map_err(|e| e.to_string())?;
        Ok(Arc::new(definition))
    }
}

fn enterprise(value: &Json, at: &str) -> Result<Enterprise, InterpretError> {
    object(value, at)?;
    let name = string(required(value, "name", at)?, &member_at(at, "name"))?;
    if name.trim().is_empty() {
        return Err(InterpretError::new(member_at(at, "name"), "must not be empty"));
    }
    let title_at = member_at(at, "title");
    let title = NameType::new(string(required(value, "title", at)?, &title_at)?)
        .map_err(|e| InterpretError::new(&title_at, e.to_string()))?;
    let description = match value.get("description") {
        Some(d) => Description::new(string(d, &member_at(at, "description"))?),
        None => Description::default(),
    };

    let entities = elements(value, "entities", at)?
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let (name, fields) = member_type(e, &format!("{at}.entities[{i}]"))?;
            Entity::new(name, fields).map_err(|err| {
                InterpretError::new(format!("{at}.entities[{i}]"), err.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let keys = elements(value, "keys", at)?
        .iter()
        .enumerate()
        .map(|(i, k)| {
            let (name, fields) = member_type(k, &format!("{at}.keys[{i}]"))?;
            EntityKey::new(name, fields)
                .map_err(|err| InterpretError::new(format!("{at}.keys[{i}]"), err.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Enterprise::with_members(name, title, description, entities, keys)
        .map_err(|e| InterpretError::new(at, e.to_string()))
}

/// Shared shape of entities and keys: `{ "name": ..., "fields": [...] }`.
fn member_type(value: &Json, at: &str) -> Result<(NameType, Vec<Field>), InterpretError> {
    object(value, at)?;
    let name_at = member_at(at, "name");
    let name = NameType::new(string(required(value, "name", at)?, &name_at)?)
        .map_err(|e| InterpretError::new(&name_at, e.to_string()))?;
    let fields = elements(value, "fields", at)?
        .iter()
        .enumerate()
        .map(|(i, f)| field(f, &format!("{at}.fields[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((name, fields))
}

fn field(value: &Json, at: &str) -> Result<Field, InterpretError> {
    object(value, at)?;
    let name_at = member_at(at, "name");
    let name = NameType::new(string(required(value, "name", at)?, &name_at)?)
        .map_err(|e| InterpretError::new(&name_at, e.to_string()))?;
    let type_at = member_at(at, "type");
    let data_type = DataType::new(string(required(value, "type", at)?, &type_at)?)
        .map_err(|e| InterpretError::new(&type_at, e.to_string()))?;
    Ok(Field::new(name, data_type))
}

fn member_at(at: &str, key: &str) -> String {
    if at.is_empty() {
        key.to_string()
    } else {
        format!("{at}.{key}")
    }
}

fn object(value: &Json, at: &str) -> Result<(), InterpretError> {
    match value {
        Json::Object(_) => Ok(()),
        other => Err(InterpretError::new(
            at,
            format!("expected an object, found {}", other.kind()),
        )),
    }
}

fn required<'j>(value: &'j Json, key: &str, at: &str) -> Result<&'j Json, InterpretError> {
    value.get(key).ok_or_else(|| {
        let owner = if at.is_empty() { "document" } else { at };
        InterpretError::new(owner, format!("missing member '{key}'"))
    })
}

fn string<'j>(value: &'j Json, at: &str) -> Result<&'j str, InterpretError> {
    value.as_str().ok_or_else(|| {
        InterpretError::new(at, format!("expected a string, found {}", value.kind()))
    })
}

/// An optional array member; absent means empty.
fn elements<'j>(value: &'j Json, key: &str, at: &str) -> Result<&'j [Json], InterpretError> {
    match value.get(key) {
        None => Ok(&[]),
        Some(Json::Array(items)) => Ok(items),
        Some(other) => Err(InterpretError::new(
            member_at(at, key),
            format!("expected an array, found {}", other.kind()),
        )),
    }
}
