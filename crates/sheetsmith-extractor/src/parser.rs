//! Parse the model's reply into an extraction result

use crate::error::ExtractorError;
use serde_json::Value;
use sheetsmith_domain::{ExtractionResult, Row, Table, Variant};
use tracing::{debug, warn};

/// Parse the model's JSON reply.
///
/// A blank reply is treated as `{}`. Missing or `null` variants are empty.
/// Scalars inside cells are kept as their string form; `null` cells become "".
pub fn parse_model_response(response: &str) -> Result<ExtractionResult, ExtractorError> {
    let json_str = extract_json(response);
    if json_str.is_empty() {
        debug!("Empty model reply, treating as no tables");
        return Ok(ExtractionResult::default());
    }

    let json: Value = serde_json::from_str(json_str)?;

    let object = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    for key in object.keys() {
        if Variant::from_key(key).is_none() {
            warn!("Ignoring unexpected key '{}' in model reply", key);
        }
    }

    let mut result = ExtractionResult::default();
    for variant in Variant::ALL {
        match object.get(variant.key()) {
            None | Some(Value::Null) => {}
            Some(value) => {
                *result.tables_mut(variant) = parse_tables(value)
                    .map_err(|e| ExtractorError::InvalidFormat(format!("{}: {}", variant, e)))?;
            }
        }
    }

    Ok(result)
}

/// Extract JSON from response, handling markdown code blocks
///
/// The opening fence may carry a language tag and may share a line with the
/// JSON. Anything after the closing fence is dropped.
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Language tag, e.g. ```json
    let tag_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    let body = match body[tag_len..].chars().next() {
        Some(c) if c.is_whitespace() => &body[tag_len..],
        None => "",
        _ => body,
    };

    let body = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };
    body.trim()
}

fn parse_tables(value: &Value) -> Result<Vec<Table>, String> {
    let tables = value
        .as_array()
        .ok_or_else(|| "expected an array of tables".to_string())?;

    tables
        .iter()
        .enumerate()
        .map(|(t, table)| {
            let rows = table
                .as_array()
                .ok_or_else(|| format!("table {} is not an array of rows", t))?;
            rows.iter()
                .enumerate()
                .map(|(r, row)| parse_row(row).map_err(|e| format!("table {} row {}: {}", t, r, e)))
                .collect::<Result<Table, String>>()
        })
        .collect()
}

fn parse_row(value: &Value) -> Result<Row, String> {
    let cells = value
        .as_array()
        .ok_or_else(|| "row is not an array of cells".to_string())?;

    cells
        .iter()
        .enumerate()
        .map(|(c, cell)| match cell {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok(String::new()),
            _ => Err(format!("cell {} is not a scalar", c)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_reply() {
        let response = r#"{
            "best_effort": [[["A", "B"], ["1", "2"]]],
            "raw_data": [],
            "structured_view": []
        }"#;

        let result = parse_model_response(response).unwrap();
        assert_eq!(result.best_effort.len(), 1);
        assert_eq!(result.best_effort[0][0], vec!["A", "B"]);
        assert_eq!(result.best_effort[0][1], vec!["1", "2"]);
        assert!(result.raw_data.is_empty());
        assert!(result.structured_view.is_empty());
    }

    #[test]
    fn test_blank_reply_is_empty_object() {
        assert!(parse_model_response("").unwrap().is_empty());
        assert!(parse_model_response("   \n").unwrap().is_empty());
        assert!(parse_model_response("{}").unwrap().is_empty());
    }

    #[test]
    fn test_missing_and_null_variants() {
        let result = parse_model_response(r#"{"raw_data": [[["x"]]], "best_effort": null}"#).unwrap();
        assert!(result.best_effort.is_empty());
        assert!(result.structured_view.is_empty());
        assert_eq!(result.raw_data, vec![vec![vec!["x".to_string()]]]);
    }

    #[test]
    fn test_parse_reply_with_markdown_wrapper() {
        let response = r#"```json
{"structured_view": [[["h"], ["v"]]]}
```"#;
        let result = parse_model_response(response).unwrap();
        assert_eq!(result.structured_view[0].len(), 2);
    }

    #[test]
    fn test_scalar_cells_are_stringified() {
        let result = parse_model_response(r#"{"best_effort": [[[1, 2.5, true, null, "x"]]]}"#).unwrap();
        assert_eq!(result.best_effort[0][0], vec!["1", "2.5", "true", "", "x"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_model_response("This is not JSON");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_json_not_object() {
        let result = parse_model_response(r#"[[["a"]]]"#);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_wrong_nesting() {
        let result = parse_model_response(r#"{"best_effort": [["a", "b"]]}"#);
        match result {
            Err(ExtractorError::InvalidFormat(msg)) => {
                assert!(msg.contains("best_effort"));
                assert!(msg.contains("table 0 row 0"));
            }
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }

        let result = parse_model_response(r#"{"raw_data": "none"}"#);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));

        let result = parse_model_response(r#"{"raw_data": [[[{"v": 1}]]]}"#);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_unexpected_keys_are_ignored() {
        let result = parse_model_response(r#"{"notes": "n/a", "raw_data": []}"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_extract_json_from_plain_json() {
        let json = r#"{"key": "value"}"#;
        assert_eq!(extract_json(json), json);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(response), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_extract_json_unterminated_fence() {
        let response = "```json\n{\"key\": 1}";
        assert_eq!(extract_json(response), r#"{"key": 1}"#);
        assert_eq!(extract_json("```"), "");
        assert_eq!(extract_json("```json"), "");
    }

    #[test]
    fn test_extract_json_single_line_fence() {
        let response = "```json {\"best_effort\": [[[\"a\"]]]} ```";
        assert_eq!(extract_json(response), r#"{"best_effort": [[["a"]]]}"#);

        let result = parse_model_response(response).unwrap();
        assert_eq!(result.best_effort, vec![vec![vec!["a".to_string()]]]);

        assert_eq!(extract_json("```{\"key\": 1}```"), r#"{"key": 1}"#);
    }

    #[test]
    fn test_text_after_closing_fence_is_dropped() {
        let response = "```json\n{\"raw_data\": [[[\"r\"]]]}\n```\nDone.";
        let result = parse_model_response(response).unwrap();
        assert_eq!(result.raw_data, vec![vec![vec!["r".to_string()]]]);
    }

    #[test]
    fn test_empty_fence_is_no_tables() {
        let result = parse_model_response("```json\n```").unwrap();
        assert!(result.is_empty());
    }
}
