//! Response schema for structured script output.

use serde_json::{Value, json};

/// The JSON response schema the script call pins the model to.
///
/// `minItems`/`maxItems` are both set to the requested chapter count so the
/// model cannot under- or over-deliver (though the parser still tolerates a
/// mismatch with a warning).
pub fn script_response_schema(chapter_count: usize) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "chapters": {
                "type": "ARRAY",
                "minItems": chapter_count,
                "maxItems": chapter_count,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "content": { "type": "STRING" },
                        "imagePrompt": { "type": "STRING" }
                    },
                    "required": ["title", "content", "imagePrompt"]
                }
            }
        },
        "required": ["title", "summary", "chapters"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_pins_chapter_count() {
        let schema = script_response_schema(5);
        assert_eq!(schema["properties"]["chapters"]["minItems"], 5);
        assert_eq!(schema["properties"]["chapters"]["maxItems"], 5);
    }

    #[test]
    fn schema_requires_image_prompt_per_chapter() {
        let schema = script_response_schema(3);
        let required = &schema["properties"]["chapters"]["items"]["required"];
        assert!(
            required
                .as_array()
                .unwrap()
                .iter()
                .any(|v| v == "imagePrompt")
        );
    }
}
