//! # enterprise-forge-dsl
//!
//! Combinator-based front end for enterprise definition documents.
//!
//! This crate provides:
//! - Labelled primitives on top of `nom` ([`combinator`]) whose errors
//!   report the furthest position reached and the tokens expected there
//! - Comment skippers for line, block and nested block comments
//! - A parser for the minimal JSON-like document notation (arrays,
//!   objects and strings only) producing immutable [`Json`] trees
//! - A canonical renderer: `parse_json(&json.render())` yields `json`
//!
//! # Example
//!
//! ```
//! use enterprise_forge_dsl::{parse_json, Json};
//!
//! let doc = parse_json(r#"{"a":"1","b":["x","y"]}"#).expect("parse failed");
//! assert_eq!(doc.get("a"), Some(&Json::String("1".into())));
//! assert_eq!(doc.render(), r#"{"a":"1","b":["x","y"]}"#);
//! ```

pub mod combinator;
pub mod comment;
pub mod error;
pub mod json;
pub mod parser;

pub use comment::{skip_block_comment, skip_line_comment, skip_nested_block_comment, skip_trivia};
pub use error::{GrammarError, ParseError, Position};
pub use json::Json;
pub use parser::{document, parse_json, parse_source};
