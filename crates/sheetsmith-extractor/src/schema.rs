//! Response schema constraining the model's reply

use serde_json::{json, Value};
use sheetsmith_domain::Variant;

/// JSON schema (Gemini OpenAPI subset) for the extraction reply.
///
/// An object with exactly the three variant keys, each an array of tables of
/// rows of string cells.
pub fn response_schema() -> Value {
    let tables = json!({
        "type": "ARRAY",
        "items": {
            "type": "ARRAY",
            "items": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        }
    });

    let mut properties = serde_json::Map::new();
    for variant in Variant::ALL {
        properties.insert(variant.key().to_string(), tables.clone());
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": Variant::ALL.iter().map(|v| v.key()).collect::<Vec<_>>(),
        "propertyOrdering": Variant::ALL.iter().map(|v| v.key()).collect::<Vec<_>>(),
    })
}

/// [`response_schema`] serialized as JSON text
pub fn response_schema_text() -> String {
    response_schema().to_string()
}
