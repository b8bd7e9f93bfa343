//! # enterprise-forge-core
//!
//! The domain model populated by enterprise definitions: the `Enterprise`
//! root value, its entities and entity keys, their typed fields, and the
//! metadata descriptor every definition unit carries.
//!
//! All values are validated on construction and immutable afterwards.

pub mod error;
pub mod types;

pub use error::DomainError;
