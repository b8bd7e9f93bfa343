//! Pure functions from domain model types to C# source text.
//!
//! No I/O. No side effects.

use enterprise_forge_core::types::{Entity, EntityKey, Field, NameType};
use enterprise_forge_core::DomainError;

use crate::normalize::normalize_whitespace;
use crate::render::render;
use crate::syntax::{
    Accessor, ClassDecl, CompilationUnit, Modifier, NamespaceDecl, Parameter, PropertyDecl,
    RecordDecl, TypeDecl,
};

pub const DEFAULT_NAMESPACE: &str = "Domain";

/// Options shared by every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Dotted namespace wrapping each generated type.
    pub namespace: String,
}

impl GeneratorOptions {
    /// Options with a validated namespace: dot-separated identifiers.
    pub fn new(namespace: impl Into<String>) -> Result<Self, DomainError> {
        let namespace = namespace.into();
        for segment in namespace.split('.') {
            if NameType::new(segment).is_err() {
                return Err(DomainError::InvalidName(namespace));
            }
        }
        Ok(Self { namespace })
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// `public class <Name>` with one get/set auto-property per field, in
/// field order.
pub fn generate_entity(entity: &Entity, options: &GeneratorOptions) -> String {
    emit(options, TypeDecl::Class(entity_class(entity)))
}

/// `public sealed record <Name>(<Type> <Field>, ...);` with parameters in
/// field order.
pub fn generate_entity_key(key: &EntityKey, options: &GeneratorOptions) -> String {
    emit(options, TypeDecl::Record(key_record(key)))
}

pub fn entity_class(entity: &Entity) -> ClassDecl {
    ClassDecl {
        modifiers: vec![Modifier::Public],
        name: entity.name().to_string(),
        properties: entity.fields().iter().map(property).collect(),
    }
}

pub fn key_record(key: &EntityKey) -> RecordDecl {
    RecordDecl {
        modifiers: vec![Modifier::Public, Modifier::Sealed],
        name: key.name().to_string(),
        parameters: key.fields().iter().map(parameter).collect(),
    }
}

fn property(field: &Field) -> PropertyDecl {
    PropertyDecl {
        modifiers: vec![Modifier::Public],
        type_name: field.data_type.to_string(),
        name: field.name.to_string(),
        accessors: vec![Accessor::Get, Accessor::Set],
    }
}

fn parameter(field: &Field) -> Parameter {
    Parameter {
        type_name: field.data_type.to_string(),
        name: field.name.to_string(),
    }
}

fn emit(options: &GeneratorOptions, decl: TypeDecl) -> String {
    let unit = CompilationUnit {
        namespace: NamespaceDecl {
            name: options.namespace.clone(),
            types: vec![decl],
        },
    };
    normalize_whitespace(&render(&unit))
}
