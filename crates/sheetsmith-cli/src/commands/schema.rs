//! Schema command implementation.

use crate::error::Result;

/// Render the response schema as pretty JSON.
pub fn render_schema() -> Result<String> {
    Ok(serde_json::to_string_pretty(
        &sheetsmith_extractor::response_schema(),
    )?)
}

/// Execute the schema command.
pub fn execute_schema() -> Result<()> {
    println!("{}", render_schema()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_schema() {
        let rendered = render_schema().unwrap();
        assert!(rendered.contains("\"best_effort\""));
        assert!(rendered.contains("\"STRING\""));
    }
}
