//! # Jsondraft Model
//!
//! Field node model for the Jsondraft sample-document builder.
//!
//! A draft document is an ordered tree of typed fields. Each field carries
//! a stable id, a user-editable key, and a value variant: a string
//! placeholder, a number placeholder, or a nested object with its own
//! ordered children. The editor crate mutates the tree; the compiler
//! crates project it into output documents.

pub mod field;
pub mod id_generator;

pub use field::{Field, FieldKind, FieldValue};
pub use id_generator::{get_document_id, IdGenerator};
