//! # enterprise-forge-registry
//!
//! Discovers enterprise definitions by name and turns them into callable
//! [`Definition`] instances.
//!
//! A definition unit is a `*.definition` file holding one structured
//! document. Its `definition` member declares the unit's name, version,
//! description and entry point; the entry point names a
//! [`DefinitionFactory`] registered with the [`Registry`]. The built-in
//! `document` entry point reads the enterprise straight from the unit's
//! `enterprise` member.
//!
//! Every load reads and parses its unit afresh, so loads of different
//! definitions never share state.

pub mod definition;
pub mod document;
pub mod error;
pub mod fs;
pub mod item;
pub mod registry;
pub mod unit;

pub use definition::{Definition, DefinitionFactory};
pub use document::{DocumentDefinition, DocumentFactory, InterpretError, DOCUMENT_ENTRY_POINT};
pub use error::RegistryError;
pub use fs::{FileSystem, StdFileSystem};
pub use item::DefinitionItem;
pub use registry::{Listing, NameMatch, Registry, DEFINITION_EXTENSION};
pub use unit::DefinitionUnit;
