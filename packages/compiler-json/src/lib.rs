//! # Jsondraft JSON Compiler
//!
//! Projects a field tree into a sample JSON document. Leaf fields compile
//! to fixed placeholder values, object fields recurse into their children.
//! The projection is pure and recomputed on demand; the field tree stays
//! the source of truth.

mod compiler;


pub use compiler::{
    compile_to_json, serialize_fields, CompileError, CompileOptions, NUMBER_PLACEHOLDER,
    STRING_PLACEHOLDER,
};
