use serde::{Deserialize, Serialize};

use crate::id_generator::IdGenerator;

/// Field type discriminant, as selected in the builder UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    String,
    Number,
    Object,
}

/// New fields in the builder start out as strings
impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::String
    }
}

/// Value variant of a field node
///
/// `children` and `collapsed` exist only on `Object`, so a primitive field
/// can never carry stale children: switching variants replaces the whole
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldValue {
    /// String placeholder leaf
    String,

    /// Number placeholder leaf
    Number,

    /// Nested object with its own ordered fields
    Object {
        children: Vec<Field>,
        /// Presentation hint only; collapsed objects still serialize
        collapsed: bool,
    },
}

impl FieldValue {
    /// Fresh default value for a kind
    pub fn from_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => FieldValue::String,
            FieldKind::Number => FieldValue::Number,
            FieldKind::Object => FieldValue::Object {
                children: vec![],
                collapsed: false,
            },
        }
    }
}

/// Field node (draft document tree)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Stable identity, assigned once at creation and never reassigned
    pub id: String,
    /// User-editable label; may be empty or duplicate a sibling's key
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    /// Create a field with a fresh id, an empty key, and the kind's
    /// default value. New fields in the builder default to `String`.
    pub fn new(kind: FieldKind, ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.new_id(),
            key: String::new(),
            value: FieldValue::from_kind(kind),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self.value {
            FieldValue::String => FieldKind::String,
            FieldValue::Number => FieldKind::Number,
            FieldValue::Object { .. } => FieldKind::Object,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.value, FieldValue::Object { .. })
    }

    /// Children of an object field, `None` for primitives
    pub fn children(&self) -> Option<&[Field]> {
        match &self.value {
            FieldValue::Object { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Field>> {
        match &mut self.value {
            FieldValue::Object { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Replace the field's type, keeping id and key.
    ///
    /// The value is always reset to the new kind's default: retyping an
    /// object to `Object` discards its children and clears `collapsed`.
    /// Retyping a primitive to its own kind yields a field equal to the
    /// original.
    pub fn retype(&self, kind: FieldKind) -> Field {
        Field {
            id: self.id.clone(),
            key: self.key.clone(),
            value: FieldValue::from_kind(kind),
        }
    }

    /// Rename the field. The key is trimmed; a rename to an empty or
    /// whitespace-only key is ignored and the previous key is kept.
    pub fn with_key(&self, key: &str) -> Field {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return self.clone();
        }

        Field {
            id: self.id.clone(),
            key: trimmed.to_string(),
            value: self.value.clone(),
        }
    }

    /// Flip the collapse hint on an object field; no-op for primitives
    pub fn toggle_collapsed(&self) -> Field {
        match &self.value {
            FieldValue::Object {
                children,
                collapsed,
            } => Field {
                id: self.id.clone(),
                key: self.key.clone(),
                value: FieldValue::Object {
                    children: children.clone(),
                    collapsed: !collapsed,
                },
            },
            _ => self.clone(),
        }
    }

    pub fn collapsed(&self) -> bool {
        matches!(self.value, FieldValue::Object { collapsed: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> IdGenerator {
        IdGenerator::from_seed("test".to_string())
    }

    #[test]
    fn test_new_field_defaults() {
        let mut ids = ids();

        let field = Field::new(FieldKind::String, &mut ids);
        assert_eq!(field.key, "");
        assert_eq!(field.kind(), FieldKind::String);
        assert!(field.children().is_none());

        let object = Field::new(FieldKind::Object, &mut ids);
        assert_eq!(object.children().unwrap().len(), 0);
        assert!(!object.collapsed());
        assert_ne!(field.id, object.id);
    }

    #[test]
    fn test_retype_object_discards_children() {
        let mut ids = ids();

        let mut parent = Field::new(FieldKind::Object, &mut ids);
        parent
            .children_mut()
            .unwrap()
            .push(Field::new(FieldKind::Number, &mut ids));

        // Object -> Object resets, never preserves
        let retyped = parent.retype(FieldKind::Object);
        assert_eq!(retyped.children().unwrap().len(), 0);
        assert_eq!(retyped.id, parent.id);

        // Object -> primitive drops children entirely
        let retyped = parent.retype(FieldKind::Number);
        assert!(retyped.children().is_none());
        assert_eq!(retyped.kind(), FieldKind::Number);
    }

    #[test]
    fn test_retype_primitive_to_same_kind_is_identity() {
        let mut ids = ids();

        let field = Field::new(FieldKind::String, &mut ids).with_key("name");
        assert_eq!(field.retype(FieldKind::String), field);
    }

    #[test]
    fn test_retype_to_object_initializes_fresh_state() {
        let mut ids = ids();

        let field = Field::new(FieldKind::Number, &mut ids).with_key("count");
        let object = field.retype(FieldKind::Object);

        assert_eq!(object.kind(), FieldKind::Object);
        assert_eq!(object.children().unwrap().len(), 0);
        assert!(!object.collapsed());
        assert_eq!(object.key, "count");
    }

    #[test]
    fn test_rename_trims_and_rejects_empty() {
        let mut ids = ids();
        let field = Field::new(FieldKind::String, &mut ids).with_key("original");

        assert_eq!(field.with_key("").key, "original");
        assert_eq!(field.with_key("   ").key, "original");
        assert_eq!(field.with_key("  x ").key, "x");
    }

    #[test]
    fn test_toggle_collapsed() {
        let mut ids = ids();

        let object = Field::new(FieldKind::Object, &mut ids);
        let collapsed = object.toggle_collapsed();
        assert!(collapsed.collapsed());
        assert!(!collapsed.toggle_collapsed().collapsed());

        // No-op for primitives
        let leaf = Field::new(FieldKind::String, &mut ids);
        assert_eq!(leaf.toggle_collapsed(), leaf);
    }

    #[test]
    fn test_toggle_collapsed_keeps_children() {
        let mut ids = ids();

        let mut object = Field::new(FieldKind::Object, &mut ids);
        object
            .children_mut()
            .unwrap()
            .push(Field::new(FieldKind::String, &mut ids));

        let collapsed = object.toggle_collapsed();
        assert_eq!(collapsed.children().unwrap().len(), 1);
    }
}
