//! # Jsondraft Editor
//!
//! Core tree-editing engine for Jsondraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Field tree + id allocation           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Index-path addressing at any depth       │
//! │  - Apply mutations with validation          │
//! │  - Copy-on-write sequence replacement       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-json: Field tree → sample document │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Field tree is source of truth**: serialized documents are derived views
//! 2. **Structural editing**: field-level operations addressed by index path
//! 3. **Replace, never alias**: an edit at depth *d* rebuilds the sibling
//!    sequences at depths *d-1 .. 0*; the previous tree stays intact until
//!    the new one is swapped in
//! 4. **Stable identity**: field ids survive renames, retypes, and sibling
//!    deletion, and are never reused
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jsondraft_editor::{Document, Mutation};
//! use jsondraft_model::FieldKind;
//!
//! let mut doc = Document::new("sample");
//!
//! // Add a root field, then rename it
//! doc.apply(Mutation::AddField { parent: vec![], kind: FieldKind::String })?;
//! doc.apply(Mutation::RenameField { path: vec![0], key: "title".into() })?;
//!
//! // Re-render from the authoritative sequence
//! let fields = doc.fields();
//! ```

mod document;
mod errors;
mod mutations;
mod path;
mod tree;

pub use document::{Document, MutationResult};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use path::{field_at, format_path, FieldPath};
pub use tree::{append_field, remove_field, replace_field};

// Re-export common types for convenience
pub use jsondraft_model::{Field, FieldKind, FieldValue, IdGenerator};
