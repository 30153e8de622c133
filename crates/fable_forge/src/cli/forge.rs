//! The forge command handler.

use crate::config::ForgeConfig;
use crate::render;
use fable_core::{GenerationParams, Genre, ImageStyle, NarrationVoice, Tone};
use fable_error::{ConfigError, FableResult};
use fable_gemini::{GeminiClient, GeminiConfig};
use fable_interface::AspectRatio;
use fable_library::{HistoryStore, LibraryConfig};
use fable_pipeline::{ForgeSettings, StoryForge};
use std::path::PathBuf;
use std::str::FromStr;
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Everything the forge command needs after flag/settings merging.
#[derive(Debug)]
pub struct ForgeInvocation {
    /// Generation parameters
    pub params: GenerationParams,
    /// Pipeline presentation settings
    pub settings: ForgeSettings,
    /// Synthesize narration after the run
    pub narrate: bool,
    /// Narration voice
    pub voice: NarrationVoice,
    /// Export directory
    pub out_dir: PathBuf,
}

fn parse_label<T: FromStr>(label: &str, what: &str) -> FableResult<T> {
    T::from_str(label).map_err(|_| ConfigError::new(format!("unknown {} '{}'", what, label)).into())
}

/// Merge CLI flags over persisted defaults into one invocation.
#[allow(clippy::too_many_arguments)]
pub fn build_invocation(
    config: &ForgeConfig,
    prompt: String,
    genre: Option<String>,
    tone: Option<String>,
    chapters: Option<usize>,
    style: Option<String>,
    no_images: bool,
    narrate: bool,
    voice: Option<String>,
    out: Option<PathBuf>,
) -> FableResult<ForgeInvocation> {
    let genre: Genre = match genre {
        Some(label) => parse_label(&label, "genre")?,
        None => Genre::default(),
    };
    let tone: Tone = match tone {
        Some(label) => parse_label(&label, "tone")?,
        None => Tone::default(),
    };
    let style: ImageStyle = match style {
        Some(label) => parse_label(&label, "image style")?,
        None => config.image_style,
    };
    let voice: NarrationVoice = match voice {
        Some(label) => parse_label(&label, "voice")?,
        None => config.voice,
    };

    let params = GenerationParams::builder()
        .prompt(prompt)
        .genre(genre)
        .tone(tone)
        .chapter_count(chapters.unwrap_or(config.chapter_count))
        .build()
        .map_err(|e| ConfigError::new(e.to_string()))?;

    let settings = ForgeSettings {
        image_style: style,
        aspect_ratio: AspectRatio::Widescreen,
        skip_images: no_images,
    };

    let out_dir = out
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("stories"));

    Ok(ForgeInvocation {
        params,
        settings,
        narrate,
        voice,
        out_dir,
    })
}

/// Handles the forge command: run the pipeline, stream progress, export.
pub async fn handle_forge_command(invocation: ForgeInvocation) -> FableResult<()> {
    let gemini_config = GeminiConfig::from_env()?;
    let client = GeminiClient::new(gemini_config);

    let history = match LibraryConfig::from_default_path() {
        Ok(config) => Some(HistoryStore::load(config)),
        Err(e) => {
            warn!(error = %e, "Archive unavailable; stories will not be saved");
            None
        }
    };

    let (tx, mut rx) = mpsc::channel(32);
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            render::print_event(&event);
        }
    });

    let mut forge = StoryForge::new(client).with_events(tx);
    if let Some(history) = history {
        forge = forge.with_history(history);
    }

    println!("Forging \"{}\"...", invocation.params.prompt());
    let mut report = forge.forge(&invocation.params, &invocation.settings).await?;

    let mut narrations = Vec::new();
    if invocation.narrate {
        for index in 0..report.story.chapters.len() {
            let chapter = &mut report.story.chapters[index];
            match forge.narrate_chapter(chapter, invocation.voice).await {
                Ok(buffer) => {
                    println!("  chapter {} narrated ({:.1}s)", index + 1, buffer.duration().as_secs_f32());
                    narrations.push((index, buffer));
                }
                Err(e) => {
                    // Non-fatal, same contract as illustrations.
                    error!(chapter = index, error = %e, "Narration failed");
                    println!("  chapter {} narration failed", index + 1);
                }
            }
        }
    }

    drop(forge);
    let _ = printer.await;

    if report.status.story_visible() {
        render::print_story(&report.story);
    }

    let exported = render::export_story(&invocation.out_dir, &report.story, &narrations)?;
    println!("Exported to {}", exported.display());

    if !report.failed_chapters.is_empty() {
        println!(
            "{} of {} chapters have no illustration.",
            report.failed_chapters.len(),
            report.story.chapters.len()
        );
    }

    #[cfg(feature = "playback")]
    for (index, buffer) in &narrations {
        println!("Playing chapter {} narration...", index + 1);
        if let Err(e) = fable_audio::play(buffer) {
            warn!(error = %e, "Playback failed");
            break;
        }
    }

    Ok(())
}
