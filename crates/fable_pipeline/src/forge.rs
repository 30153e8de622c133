//! The story forge executor.

use crate::script::{StoryScript, check_chapter_count, parse_script};
use chrono::Utc;
use fable_audio::{NarrationBuffer, decode_pcm16};
use fable_core::{
    Chapter, ChapterImage, ChapterNarration, ForgeStatus, GenerationParams, ImageStyle,
    NarrationVoice, Story,
};
use fable_error::FableResult;
use fable_interface::{
    AspectRatio, ForgeDriver, ForgeEvent, ImageRequest, NarrationRequest, ScriptRequest,
};
use fable_library::HistoryStore;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Fallback title for a script that arrived without one.
const DEFAULT_TITLE: &str = "Untitled Legend";
/// Fallback summary for a script that arrived without one.
const DEFAULT_SUMMARY: &str = "A journey begins...";

/// Presentation settings for a forge run.
#[derive(Debug, Clone, Default)]
pub struct ForgeSettings {
    /// Illustration style applied to every chapter
    pub image_style: ImageStyle,
    /// Frame shape for illustrations
    pub aspect_ratio: AspectRatio,
    /// Skip the illustration phase entirely
    pub skip_images: bool,
}

/// The outcome of a forge run.
#[derive(Debug)]
pub struct ForgeReport {
    /// The forged story, with whatever illustrations succeeded attached
    pub story: Story,
    /// Count of chapters carrying an illustration
    pub illustrated: usize,
    /// Indices of chapters whose illustration failed (or was skipped)
    pub failed_chapters: Vec<usize>,
    /// Whether the history archive write succeeded
    pub archived: bool,
    /// Final phase of the run
    pub status: ForgeStatus,
}

/// The sequential generation-and-stitching workflow.
///
/// Partial-failure semantics:
/// - Script composition is FATAL when it fails; nothing is displayable
///   without text.
/// - Per-chapter illustration failure is NON-FATAL; the error is logged,
///   the chapter keeps `image = None`, and the run continues so the text
///   remains usable.
/// - Archiving is best-effort; a failed write is a warning.
///
/// Illustrations are requested one chapter at a time, in order. Sequential
/// on purpose: ordered progress for the caller, and no burst against the
/// image quota.
pub struct StoryForge<D: ForgeDriver> {
    driver: D,
    events: Option<mpsc::Sender<ForgeEvent>>,
    history: Option<HistoryStore>,
    status: ForgeStatus,
}

impl<D: ForgeDriver> StoryForge<D> {
    /// Create a forge over a driver, with no progress sink or archive.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            events: None,
            history: None,
            status: ForgeStatus::Idle,
        }
    }

    /// The phase the current (or most recent) run is in.
    pub fn status(&self) -> ForgeStatus {
        self.status
    }

    /// Attach a progress event sink.
    pub fn with_events(mut self, sender: mpsc::Sender<ForgeEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Attach a history archive.
    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    /// Give the archive back, e.g. to list stories after a run.
    pub fn into_history(self) -> Option<HistoryStore> {
        self.history
    }

    async fn emit(&self, event: ForgeEvent) {
        if let Some(sender) = &self.events {
            // A dropped receiver only means nobody is watching progress.
            let _ = sender.send(event).await;
        }
    }

    /// Run the full pipeline: script, then illustrations, then archive.
    ///
    /// The story carried by the `ScriptReady` event (and by the returned
    /// report) is complete and usable the moment the script phase ends; no
    /// later illustration failure retracts it.
    ///
    /// # Errors
    ///
    /// Fails only for script-phase errors: the API call itself, an empty
    /// response, or an unparseable/invalid script.
    #[instrument(skip(self, params, settings), fields(provider = self.driver.provider_name()))]
    pub async fn forge(
        &mut self,
        params: &GenerationParams,
        settings: &ForgeSettings,
    ) -> FableResult<ForgeReport> {
        info!(
            genre = %params.genre(),
            tone = %params.tone(),
            chapters = params.chapter_count(),
            "Forging story"
        );

        self.status = ForgeStatus::GeneratingText;
        let story = match self.compose(params).await {
            Ok(story) => story,
            Err(e) => {
                self.status = ForgeStatus::Failed;
                return Err(e);
            }
        };
        self.emit(ForgeEvent::ScriptReady(story.clone())).await;

        self.status = ForgeStatus::GeneratingImages;
        let (story, failed_chapters) = if settings.skip_images {
            let failed: Vec<usize> = (0..story.chapters.len()).collect();
            for index in &failed {
                self.emit(ForgeEvent::IllustrationSkipped { index: *index })
                    .await;
            }
            (story, failed)
        } else {
            self.illustrate(story, settings).await
        };

        let archived = self.archive(&story);
        self.emit(ForgeEvent::Archived { persisted: archived }).await;

        let illustrated = story.illustrated_count();
        info!(
            illustrated,
            failed = failed_chapters.len(),
            "Forge run complete"
        );
        self.status = ForgeStatus::Completed;
        self.emit(ForgeEvent::Completed).await;

        Ok(ForgeReport {
            story,
            illustrated,
            failed_chapters,
            archived,
            status: self.status,
        })
    }

    /// Phase one: compose and validate the script, assemble the story.
    async fn compose(&self, params: &GenerationParams) -> FableResult<Story> {
        let request = ScriptRequest::builder()
            .prompt(params.prompt().clone())
            .genre(*params.genre())
            .tone(*params.tone())
            .chapter_count(*params.chapter_count())
            .build()
            .map_err(|e| fable_error::ConfigError::new(e.to_string()))?;

        let response = self.driver.compose_script(&request).await?;
        let script = parse_script(&response.text)?;
        check_chapter_count(&script, *params.chapter_count());

        Ok(assemble_story(script, params))
    }

    /// Phase two: one illustration per chapter, in order, failures skipped.
    async fn illustrate(
        &self,
        mut story: Story,
        settings: &ForgeSettings,
    ) -> (Story, Vec<usize>) {
        let mut failed_chapters = Vec::new();

        for index in 0..story.chapters.len() {
            let prompt =
                crate::prompts::illustration_prompt(&story.chapters[index].image_prompt, settings.image_style);
            let request = ImageRequest::builder()
                .prompt(prompt)
                .style(settings.image_style)
                .aspect_ratio(settings.aspect_ratio)
                .build();

            let request = match request {
                Ok(request) => request,
                Err(e) => {
                    error!(chapter = index, error = %e, "Illustration request invalid");
                    failed_chapters.push(index);
                    self.emit(ForgeEvent::IllustrationFailed {
                        index,
                        error: e.to_string(),
                    })
                    .await;
                    continue;
                }
            };

            match self.driver.paint_illustration(&request).await {
                Ok(response) => {
                    let image = ChapterImage {
                        mime: response.mime,
                        data: response.data,
                    };
                    story.chapters[index].image = Some(image.clone());
                    self.emit(ForgeEvent::ChapterIllustrated { index, image }).await;
                }
                Err(e) => {
                    // Keep going so the text remains visible.
                    error!(chapter = index, error = %e, "Image forge failed");
                    failed_chapters.push(index);
                    self.emit(ForgeEvent::IllustrationFailed {
                        index,
                        error: e.to_string(),
                    })
                    .await;
                }
            }
        }

        (story, failed_chapters)
    }

    /// Phase three: best-effort archive of the text-only story.
    fn archive(&mut self, story: &Story) -> bool {
        let Some(history) = &mut self.history else {
            return false;
        };
        match history.save(story) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Storage full or unwritable, history not persisted");
                false
            }
        }
    }

    /// Synthesize narration for one chapter, on demand.
    ///
    /// Narration is never part of the main pipeline; callers request it per
    /// chapter and decide what a failure means (usually: log and move on).
    /// On success the raw PCM is attached to the chapter and the decoded,
    /// playable buffer is returned.
    ///
    /// # Errors
    ///
    /// Propagates driver and decode failures; the chapter is left untouched
    /// when anything fails.
    #[instrument(skip(self, chapter), fields(chapter = %chapter.title))]
    pub async fn narrate_chapter(
        &self,
        chapter: &mut Chapter,
        voice: NarrationVoice,
    ) -> FableResult<NarrationBuffer> {
        let request = NarrationRequest::builder()
            .text(chapter.content.clone())
            .voice(voice)
            .build()
            .map_err(|e| fable_error::ConfigError::new(e.to_string()))?;

        let response = self.driver.narrate(&request).await?;
        let buffer = decode_pcm16(&response.data, response.sample_rate, response.channels)?;
        chapter.narration = Some(ChapterNarration {
            sample_rate: response.sample_rate,
            channels: response.channels,
            data: response.data,
        });
        info!(
            duration_ms = buffer.duration().as_millis() as u64,
            voice = %voice,
            "Narration ready"
        );
        Ok(buffer)
    }
}

/// Assemble a typed story from a validated script.
///
/// The model's chapters carry no ids; fresh v4 ids are assigned here.
/// Blank titles and summaries fall back to the forge's stock phrases.
fn assemble_story(script: StoryScript, params: &GenerationParams) -> Story {
    let title = if script.title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        script.title
    };
    let summary = if script.summary.trim().is_empty() {
        DEFAULT_SUMMARY.to_string()
    } else {
        script.summary
    };

    let chapters = script
        .chapters
        .into_iter()
        .map(|c| Chapter {
            id: Uuid::new_v4(),
            title: c.title,
            content: c.content,
            image_prompt: c.image_prompt,
            image: None,
            narration: None,
        })
        .collect();

    Story {
        id: Uuid::new_v4(),
        title,
        summary,
        genre: *params.genre(),
        created_at: Utc::now(),
        chapters,
    }
}
