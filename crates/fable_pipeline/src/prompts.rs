//! Prompt assembly for the three generative calls.

use fable_core::{GenerationParams, ImageStyle};

/// The instruction text for script composition.
///
/// The structure example keeps weaker models honest about field names even
/// though the response schema already pins them.
pub fn script_prompt(params: &GenerationParams) -> String {
    format!(
        r#"Create an immersive, long-form {count}-chapter {genre} story with a {tone} tone based on: "{prompt}".
The output must be a valid JSON object.
Each chapter must be lengthy (at least 3-4 paragraphs) and highly descriptive.

Structure:
{{
  "title": "Epic Story Title",
  "summary": "Compelling one-sentence hook",
  "chapters": [
    {{
      "title": "Chapter Name",
      "content": "Extremely detailed and lengthy narrative content with rich world-building...",
      "imagePrompt": "A hyper-realistic cinematic photograph, shot on 35mm lens, 8k resolution, detailed textures, natural lighting..."
    }}
  ]
}}"#,
        count = params.chapter_count(),
        genre = params.genre(),
        tone = params.tone(),
        prompt = params.prompt(),
    )
}

/// Embellish a chapter's image prompt with the cinematic base and the
/// selected style clause.
pub fn illustration_prompt(base: &str, style: ImageStyle) -> String {
    format!(
        "Hyper-realistic, photorealistic cinematic masterpiece: {}. \
         Professional color grading, depth of field, sharp focus, 8k, highly detailed, {}.",
        base,
        style.prompt_clause()
    )
}

/// Prefix a passage for narration.
pub fn narration_prompt(text: &str) -> String {
    format!("Read this narratively with depth and character: {}", text)
}
