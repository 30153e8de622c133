//! JSON extraction from model output.

use fable_error::{ScriptError, ScriptErrorKind, ScriptResult};
use regex::Regex;
use std::sync::OnceLock;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    // Matches opening ```json fences (with optional newline) and bare ```
    FENCE.get_or_init(|| Regex::new(r"```json\n?|```").unwrap_or_else(|_| unreachable!()))
}

/// Extract clean JSON from possibly markdown-wrapped model output.
///
/// If the text already parses as JSON it passes through untouched.
/// Otherwise the markdown code fences are stripped and the result trimmed;
/// the caller's parse decides whether what remains is valid.
///
/// # Errors
///
/// Returns [`ScriptErrorKind::JsonSyntax`] when even the cleaned text is
/// not valid JSON.
pub fn extract_json(text: &str) -> ScriptResult<String> {
    if serde_json::from_str::<serde_json::Value>(text).is_ok() {
        return Ok(text.to_string());
    }

    let cleaned = fence_regex().replace_all(text, "").trim().to_string();
    match serde_json::from_str::<serde_json::Value>(&cleaned) {
        Ok(_) => Ok(cleaned),
        Err(e) => Err(ScriptError::new(ScriptErrorKind::JsonSyntax(e.to_string()))),
    }
}
