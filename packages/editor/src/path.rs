//! Index-path addressing into the field tree
//!
//! A path is the sequence of sibling indices from the root: `[1, 0]` is the
//! first child of the second root field. Paths address positions, not
//! identities: a path captured before an edit may point at a different
//! field afterwards, which is why mutations validate before applying.

use jsondraft_model::{Field, FieldValue};

use crate::mutations::MutationError;
use crate::tree::replace_field;

/// Sibling indices from the root, outermost first
pub type FieldPath = Vec<usize>;

/// Render a path for error messages ("1.0.2"; "<root>" for the empty path)
pub fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }
    path.iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Resolve a path to a field. The empty path addresses the root sequence
/// itself, not a field, and resolves to `None`.
pub fn field_at<'a>(roots: &'a [Field], path: &[usize]) -> Option<&'a Field> {
    let (&first, rest) = path.split_first()?;
    let mut current = roots.get(first)?;
    for &index in rest {
        current = current.children()?.get(index)?;
    }
    Some(current)
}

/// Rebuild the tree with `edit` applied to the sibling sequence addressed
/// by `path` (the root sequence for the empty path, otherwise the children
/// of the addressed object field).
///
/// Every ancestor along the path is replaced with a new field carrying the
/// rebuilt children, so the returned root sequence shares no sibling
/// vector with the input.
pub fn edit_siblings_at<F>(
    siblings: &[Field],
    path: &[usize],
    edit: F,
) -> Result<Vec<Field>, MutationError>
where
    F: FnOnce(&[Field]) -> Result<Vec<Field>, MutationError>,
{
    let Some((&index, rest)) = path.split_first() else {
        return edit(siblings);
    };

    let field = siblings
        .get(index)
        .ok_or_else(|| MutationError::FieldNotFound(format_path(path)))?;

    let FieldValue::Object {
        children,
        collapsed,
    } = &field.value
    else {
        return Err(MutationError::NotAnObject(field.id.clone()));
    };

    let new_children = edit_siblings_at(children, rest, edit)?;
    let replaced = Field {
        id: field.id.clone(),
        key: field.key.clone(),
        value: FieldValue::Object {
            children: new_children,
            collapsed: *collapsed,
        },
    };

    Ok(replace_field(siblings, index, replaced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::append_field;
    use jsondraft_model::{FieldKind, IdGenerator};

    fn sample_tree(ids: &mut IdGenerator) -> Vec<Field> {
        let mut parent = Field::new(FieldKind::Object, ids).with_key("user");
        parent
            .children_mut()
            .unwrap()
            .push(Field::new(FieldKind::String, ids).with_key("name"));
        vec![parent, Field::new(FieldKind::Number, ids).with_key("count")]
    }

    #[test]
    fn test_field_at_resolves_nested_paths() {
        let mut ids = IdGenerator::from_seed("test".to_string());
        let roots = sample_tree(&mut ids);

        assert_eq!(field_at(&roots, &[0]).unwrap().key, "user");
        assert_eq!(field_at(&roots, &[0, 0]).unwrap().key, "name");
        assert_eq!(field_at(&roots, &[1]).unwrap().key, "count");

        assert!(field_at(&roots, &[]).is_none());
        assert!(field_at(&roots, &[2]).is_none());
        assert!(field_at(&roots, &[1, 0]).is_none()); // primitive has no children
    }

    #[test]
    fn test_edit_at_depth_replaces_ancestors_only() {
        let mut ids = IdGenerator::from_seed("test".to_string());
        let roots = sample_tree(&mut ids);

        let edited = edit_siblings_at(&roots, &[0], |siblings| {
            Ok(append_field(
                siblings,
                Field::new(FieldKind::Number, &mut ids).with_key("age"),
            ))
        })
        .unwrap();

        // New child landed under the object
        assert_eq!(edited[0].children().unwrap().len(), 2);
        assert_eq!(edited[0].children().unwrap()[1].key, "age");

        // Ancestor identity preserved, untouched sibling value-equal
        assert_eq!(edited[0].id, roots[0].id);
        assert_eq!(edited[1], roots[1]);

        // Input sequence untouched
        assert_eq!(roots[0].children().unwrap().len(), 1);
    }

    #[test]
    fn test_edit_through_primitive_is_rejected() {
        let mut ids = IdGenerator::from_seed("test".to_string());
        let roots = sample_tree(&mut ids);

        let err = edit_siblings_at(&roots, &[1], |siblings| Ok(siblings.to_vec()))
            .unwrap_err();
        assert!(matches!(err, MutationError::NotAnObject(_)));

        let err = edit_siblings_at(&roots, &[5], |siblings| Ok(siblings.to_vec()))
            .unwrap_err();
        assert!(matches!(err, MutationError::FieldNotFound(_)));
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "<root>");
        assert_eq!(format_path(&[0]), "0");
        assert_eq!(format_path(&[1, 0, 2]), "1.0.2");
    }
}
