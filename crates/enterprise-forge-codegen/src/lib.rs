//! # enterprise-forge-codegen
//!
//! Turns an [`Enterprise`](enterprise_forge_core::types::Enterprise) into
//! C# source: one class per entity and one sealed record per entity key.
//!
//! Generation goes through a small syntax tree ([`syntax`]) that is
//! rendered to text ([`render`]) and then normalized
//! ([`normalize_whitespace`]), so equal inputs always give byte-identical
//! output. The [`compiler`] module runs the whole pipeline from a
//! definition name to written artifacts.

pub mod compiler;
pub mod csharp;
pub mod normalize;
pub mod render;
pub mod syntax;

pub use compiler::{
    compile, generate_artifacts, Artifact, ArtifactWriter, CompileError, CompileReport, Settings,
    Target,
};
pub use csharp::{generate_entity, generate_entity_key, GeneratorOptions, DEFAULT_NAMESPACE};
pub use normalize::normalize_whitespace;
