//! # Tree Mutations
//!
//! High-level semantic operations on Jsondraft field trees.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one editor gesture
//! 2. **Validated**: All mutations validate structural constraints before
//!    touching the tree
//! 3. **Pure**: `apply` takes the current root sequence and returns a new
//!    one; the input is never mutated
//! 4. **All-or-nothing**: on error the caller's sequence is still the
//!    authoritative tree
//!
//! ## Mutation Semantics
//!
//! ### AddField
//! - Appends a fresh field (empty key, kind's default value) to the root
//!   sequence or to an object's children
//! - Fails if the parent path resolves to a primitive or nothing
//!
//! ### SetFieldKind
//! - Resets the field's value to the new kind's default
//! - An object retyped to object loses its children (reset, not preserve)
//!
//! ### RenameField
//! - Keys are trimmed; an empty or whitespace-only key is silently ignored
//!   and the field keeps its previous key
//! - Duplicate keys among siblings are allowed
//!
//! ### RemoveField
//! - Removes the field and all descendants; sibling ids are untouched

use jsondraft_model::{Field, FieldKind, IdGenerator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::{edit_siblings_at, field_at, format_path, FieldPath};
use crate::tree::{append_field, remove_field, replace_field};

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a fresh field under a parent (empty path = root sequence)
    AddField {
        parent: FieldPath,
        kind: FieldKind,
    },

    /// Change a field's type, resetting its value to the kind's default
    SetFieldKind {
        path: FieldPath,
        kind: FieldKind,
    },

    /// Rename a field (trimmed; empty keys are ignored, see module docs)
    RenameField {
        path: FieldPath,
        key: String,
    },

    /// Flip the collapse hint on an object field
    ToggleCollapse {
        path: FieldPath,
    },

    /// Remove a field and its descendants from the tree
    RemoveField {
        path: FieldPath,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Field not found at path: {0}")]
    FieldNotFound(String),

    #[error("Parent not found at path: {0}")]
    ParentNotFound(String),

    #[error("Field is not an object: {0}")]
    NotAnObject(String),

    #[error("Path does not address a field")]
    EmptyPath,
}

impl Mutation {
    /// Apply mutation with validation, returning the new root sequence
    pub fn apply(
        &self,
        roots: &[Field],
        ids: &mut IdGenerator,
    ) -> Result<Vec<Field>, MutationError> {
        // Validate first
        self.validate(roots)?;

        // Apply based on mutation type
        match self {
            Mutation::AddField { parent, kind } => {
                edit_siblings_at(roots, parent, |siblings| {
                    Ok(append_field(siblings, Field::new(*kind, ids)))
                })
            }

            Mutation::SetFieldKind { path, kind } => {
                Self::replace_at(roots, path, |field| field.retype(*kind))
            }

            Mutation::RenameField { path, key } => {
                Self::replace_at(roots, path, |field| field.with_key(key))
            }

            Mutation::ToggleCollapse { path } => {
                Self::replace_at(roots, path, |field| field.toggle_collapsed())
            }

            Mutation::RemoveField { path } => {
                let (parent, index) = Self::split_leaf(path)?;
                edit_siblings_at(roots, parent, |siblings| {
                    if index >= siblings.len() {
                        return Err(MutationError::FieldNotFound(format_path(path)));
                    }
                    Ok(remove_field(siblings, index))
                })
            }
        }
    }

    /// Validate without applying
    pub fn validate(&self, roots: &[Field]) -> Result<(), MutationError> {
        match self {
            Mutation::AddField { parent, kind: _ } => {
                // Empty parent path addresses the root sequence itself
                if parent.is_empty() {
                    return Ok(());
                }

                let field = field_at(roots, parent)
                    .ok_or_else(|| MutationError::ParentNotFound(format_path(parent)))?;

                if !field.is_object() {
                    return Err(MutationError::NotAnObject(field.id.clone()));
                }

                Ok(())
            }

            Mutation::SetFieldKind { path, .. }
            | Mutation::RenameField { path, .. }
            | Mutation::RemoveField { path } => {
                Self::require_field(roots, path)?;
                Ok(())
            }

            Mutation::ToggleCollapse { path } => {
                let field = Self::require_field(roots, path)?;

                if !field.is_object() {
                    return Err(MutationError::NotAnObject(field.id.clone()));
                }

                Ok(())
            }
        }
    }

    fn require_field<'a>(
        roots: &'a [Field],
        path: &[usize],
    ) -> Result<&'a Field, MutationError> {
        if path.is_empty() {
            return Err(MutationError::EmptyPath);
        }
        field_at(roots, path).ok_or_else(|| MutationError::FieldNotFound(format_path(path)))
    }

    fn split_leaf(path: &[usize]) -> Result<(&[usize], usize), MutationError> {
        match path.split_last() {
            Some((&index, parent)) => Ok((parent, index)),
            None => Err(MutationError::EmptyPath),
        }
    }

    /// Replace the addressed field with `update(field)`, rebuilding the
    /// ancestor spine
    fn replace_at(
        roots: &[Field],
        path: &[usize],
        update: impl FnOnce(&Field) -> Field,
    ) -> Result<Vec<Field>, MutationError> {
        let (parent, index) = Self::split_leaf(path)?;
        edit_siblings_at(roots, parent, |siblings| {
            let field = siblings
                .get(index)
                .ok_or_else(|| MutationError::FieldNotFound(format_path(path)))?;
            Ok(replace_field(siblings, index, update(field)))
        })
    }
}
