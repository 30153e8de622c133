//! Story and chapter records.

use crate::Genre;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An illustration attached to a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterImage {
    /// Image MIME type as reported by the endpoint
    pub mime: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

impl ChapterImage {
    /// Render the image as a `data:` URL, the form the forge displays.
    pub fn to_data_url(&self) -> String {
        let payload = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime, payload)
    }
}

/// Narration audio attached to a chapter: raw PCM s16le as returned by the
/// speech endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterNarration {
    /// Sample rate in Hz (24000 from the real endpoint)
    pub sample_rate: u32,
    /// Interleaved channel count (1 from the real endpoint)
    pub channels: u16,
    /// PCM s16le bytes
    pub data: Vec<u8>,
}

/// A single chapter of a forged story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter id, assigned by the pipeline
    pub id: Uuid,
    /// Chapter title
    pub title: String,
    /// Narrative content
    pub content: String,
    /// The prompt used to paint this chapter's illustration
    pub image_prompt: String,
    /// Illustration, if painting succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ChapterImage>,
    /// Narration, if synthesized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<ChapterNarration>,
}

/// A complete forged story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Story id
    pub id: Uuid,
    /// Story title
    pub title: String,
    /// One-sentence hook
    pub summary: String,
    /// Genre the story was forged with
    pub genre: Genre,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Chapters in narrative order; non-empty after validation
    pub chapters: Vec<Chapter>,
}

impl Story {
    /// Clone with every chapter's media cleared.
    ///
    /// History persistence stores text only; media payloads would blow past
    /// any reasonable cache budget.
    pub fn strip_media(&self) -> Story {
        let mut stripped = self.clone();
        for chapter in &mut stripped.chapters {
            chapter.image = None;
            chapter.narration = None;
        }
        stripped
    }

    /// Count of chapters carrying an illustration.
    pub fn illustrated_count(&self) -> usize {
        self.chapters.iter().filter(|c| c.image.is_some()).count()
    }
}
