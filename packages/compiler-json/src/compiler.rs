use jsondraft_model::{Field, FieldValue};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Placeholder value emitted for string fields
pub const STRING_PLACEHOLDER: &str = "string";

/// Placeholder value emitted for number fields
pub const NUMBER_PLACEHOLDER: i64 = 42;

/// Errors that can occur during JSON compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Compilation error: {0}")]
    Generic(String),
}

/// Options for JSON compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print output
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// Project a field sequence into a JSON object.
///
/// Leaf fields map their key to the kind's placeholder; object fields
/// recurse into their children whether or not they are collapsed. When
/// sibling keys collide (duplicates are legal in the tree, including the
/// empty key) the later sibling wins.
pub fn serialize_fields(fields: &[Field]) -> Value {
    let mut object = Map::new();

    for field in fields {
        let value = match &field.value {
            FieldValue::String => Value::String(STRING_PLACEHOLDER.to_string()),
            FieldValue::Number => Value::from(NUMBER_PLACEHOLDER),
            FieldValue::Object { children, .. } => serialize_fields(children),
        };
        object.insert(field.key.clone(), value);
    }

    Value::Object(object)
}

/// Compile a field sequence to JSON text
pub fn compile_to_json(
    fields: &[Field],
    options: CompileOptions,
) -> Result<String, CompileError> {
    let document = serialize_fields(fields);

    if !options.pretty {
        return Ok(serde_json::to_string(&document)?);
    }

    let formatter = serde_json::ser::PrettyFormatter::with_indent(options.indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| CompileError::Generic(e.to_string()))
}
