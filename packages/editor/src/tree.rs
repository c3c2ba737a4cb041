//! Pure sibling-sequence operations
//!
//! Each operation returns a fresh vector and leaves the input untouched.
//! Out-of-range indices are contract violations (callers validate paths
//! first) and panic rather than corrupt the sequence.

use jsondraft_model::Field;

/// Append a field to the end of a sibling sequence
pub fn append_field(siblings: &[Field], field: Field) -> Vec<Field> {
    let mut next = siblings.to_vec();
    next.push(field);
    next
}

/// Replace the field at `index`, preserving order and identity of the rest
pub fn replace_field(siblings: &[Field], index: usize, field: Field) -> Vec<Field> {
    let mut next = siblings.to_vec();
    next[index] = field;
    next
}

/// Remove the field at `index`; later fields shift down, ids are untouched
pub fn remove_field(siblings: &[Field], index: usize) -> Vec<Field> {
    let mut next = siblings.to_vec();
    next.remove(index);
    next
}
