//! # Document Handle
//!
//! A Document owns the authoritative root field sequence for one editing
//! session, together with the id allocator seeded from the document name.
//!
//! All edits go through [`Document::apply`]: the mutation is validated and
//! applied to a copy, and only on success is the new sequence swapped in
//! and the version bumped. A failed mutation leaves the document exactly
//! as it was.
//!
//! ## Lifecycle
//!
//! ```text
//! New → Edit* → Compile
//!  ↓      ↓        ↓
//! seed  Mutations  sample document
//! ```

use jsondraft_model::{Field, IdGenerator};

use crate::{EditorError, Mutation};

/// Editable Jsondraft document
#[derive(Debug)]
pub struct Document {
    /// Document name (seeds field ids)
    pub name: String,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// Authoritative root field sequence
    roots: Vec<Field>,

    ids: IdGenerator,
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// New version number
    pub version: u64,
}

impl Document {
    /// Create an empty document
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: 0,
            roots: vec![],
            ids: IdGenerator::new(name),
        }
    }

    /// Current root field sequence
    pub fn fields(&self) -> &[Field] {
        &self.roots
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let next = mutation.apply(&self.roots, &mut self.ids)?;

        self.roots = next;
        self.version += 1;

        tracing::debug!(
            document = %self.name,
            version = self.version,
            ?mutation,
            "applied mutation"
        );

        Ok(MutationResult {
            version: self.version,
        })
    }
}
