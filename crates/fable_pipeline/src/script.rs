//! Typed story scripts and their validation.

use crate::extract_json;
use fable_error::{ScriptError, ScriptErrorKind, ScriptResult};
use serde::Deserialize;
use tracing::warn;

/// One chapter as the model wrote it, before id assignment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterScript {
    /// Chapter title
    #[serde(default)]
    pub title: String,
    /// Narrative content
    #[serde(default)]
    pub content: String,
    /// Prompt for this chapter's illustration
    #[serde(default)]
    pub image_prompt: String,
}

/// The whole script as the model wrote it.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryScript {
    /// Story title; blank is tolerated and defaulted later
    #[serde(default)]
    pub title: String,
    /// One-sentence hook; blank is tolerated and defaulted later
    #[serde(default)]
    pub summary: String,
    /// Chapters in narrative order
    #[serde(default)]
    pub chapters: Vec<ChapterScript>,
}

/// Parse raw model output into a validated [`StoryScript`].
///
/// Extraction strips markdown fences first; validation then demands at
/// least one chapter with non-blank content. A blank title or summary is
/// not an error (defaults are filled at story-assembly time).
///
/// # Errors
///
/// Returns [`ScriptErrorKind::JsonSyntax`] for unparseable text,
/// [`ScriptErrorKind::NoChapters`] for an empty chapter list, and
/// [`ScriptErrorKind::EmptyChapterContent`] for a blank chapter body.
pub fn parse_script(text: &str) -> ScriptResult<StoryScript> {
    let json = extract_json(text)?;
    let script: StoryScript = serde_json::from_str(&json)
        .map_err(|e| ScriptError::new(ScriptErrorKind::JsonSyntax(e.to_string())))?;
    validate_script(&script)?;
    Ok(script)
}

/// Validate an already-parsed script.
pub fn validate_script(script: &StoryScript) -> ScriptResult<()> {
    if script.chapters.is_empty() {
        return Err(ScriptError::new(ScriptErrorKind::NoChapters));
    }
    for (index, chapter) in script.chapters.iter().enumerate() {
        if chapter.content.trim().is_empty() {
            return Err(ScriptError::new(ScriptErrorKind::EmptyChapterContent(index)));
        }
    }
    Ok(())
}

/// Warn when the model delivered a different chapter count than requested.
///
/// The response schema pins the count, but the model occasionally strays;
/// the original kept whatever arrived, so a mismatch is warning-grade only.
pub fn check_chapter_count(script: &StoryScript, expected: usize) {
    let actual = script.chapters.len();
    if actual != expected {
        let mismatch = ScriptError::new(ScriptErrorKind::ChapterCount { expected, actual });
        warn!(%mismatch, "Script chapter count differs from request; keeping what arrived");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fable_error::ScriptErrorKind;

    const GOOD_SCRIPT: &str = r#"{
        "title": "The Obsidian Citadel",
        "summary": "A fortress of dark glass drifts among the stars.",
        "chapters": [
            {
                "title": "Arrival",
                "content": "The citadel loomed over the void.",
                "imagePrompt": "a dark glass fortress floating in a starfield"
            }
        ]
    }"#;

    #[test]
    fn parses_camel_case_image_prompt() {
        let script = parse_script(GOOD_SCRIPT).unwrap();
        assert_eq!(script.chapters.len(), 1);
        assert_eq!(
            script.chapters[0].image_prompt,
            "a dark glass fortress floating in a starfield"
        );
    }

    #[test]
    fn parses_fenced_script() {
        let fenced = format!("```json\n{}\n```", GOOD_SCRIPT);
        assert!(parse_script(&fenced).is_ok());
    }

    #[test]
    fn missing_title_is_tolerated() {
        let script = parse_script(
            r#"{"chapters": [{"title": "One", "content": "Text.", "imagePrompt": "p"}]}"#,
        )
        .unwrap();
        assert!(script.title.is_empty());
        assert!(script.summary.is_empty());
    }

    #[test]
    fn no_chapters_is_fatal() {
        let err = parse_script(r#"{"title": "Empty", "summary": "s", "chapters": []}"#).unwrap_err();
        assert_eq!(err.kind, ScriptErrorKind::NoChapters);
    }

    #[test]
    fn blank_chapter_content_is_fatal() {
        let err = parse_script(
            r#"{"chapters": [
                {"title": "One", "content": "Text.", "imagePrompt": "p"},
                {"title": "Two", "content": "   ", "imagePrompt": "p"}
            ]}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, ScriptErrorKind::EmptyChapterContent(1));
    }

    #[test]
    fn prose_is_rejected_as_syntax_error() {
        let err = parse_script("Chapter 1: it was a dark and stormy night").unwrap_err();
        assert!(matches!(err.kind, ScriptErrorKind::JsonSyntax(_)));
    }
}
