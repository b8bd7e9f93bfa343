mod data_type;
mod definition_metadata;
mod description;
mod enterprise;
mod entity;
mod entity_key;
mod field;
mod file_version;
mod name_type;

pub use data_type::DataType;
pub use definition_metadata::DefinitionMetadata;
pub use description::Description;
pub use enterprise::Enterprise;
pub use entity::Entity;
pub use entity_key::EntityKey;
pub use field::Field;
pub use file_version::FileVersion;
pub use name_type::{NameRule, NameType};
