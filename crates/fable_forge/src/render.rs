//! Terminal rendering and file export.
//!
//! Presentational glue only: nothing here alters story state.

use fable_audio::NarrationBuffer;
use fable_core::Story;
use fable_error::{ConfigError, FableResult};
use fable_interface::ForgeEvent;
use fable_library::id_prefix;
use std::path::{Path, PathBuf};
use tracing::info;

/// Print one forge progress event as it arrives.
pub fn print_event(event: &ForgeEvent) {
    match event {
        ForgeEvent::ScriptReady(story) => {
            println!();
            println!("  script ready: \"{}\" ({} chapters)", story.title, story.chapters.len());
        }
        ForgeEvent::ChapterIllustrated { index, .. } => {
            println!("  chapter {} illustrated", index + 1);
        }
        ForgeEvent::IllustrationFailed { index, error } => {
            println!("  chapter {} illustration failed: {}", index + 1, error);
        }
        ForgeEvent::IllustrationSkipped { index } => {
            println!("  chapter {} illustration skipped", index + 1);
        }
        ForgeEvent::Archived { persisted: true } => println!("  archived to library"),
        ForgeEvent::Archived { persisted: false } => println!("  not archived"),
        ForgeEvent::Completed => println!("  forge complete"),
    }
}

/// Print a story to the terminal: header, summary, chapters.
pub fn print_story(story: &Story) {
    println!();
    println!("═══ {} ═══", story.title);
    println!("[{}]  {}  {}", id_prefix(&story.id), story.genre, story.created_at.format("%Y-%m-%d"));
    println!();
    println!("{}", story.summary);
    for (index, chapter) in story.chapters.iter().enumerate() {
        println!();
        println!("── Chapter {}: {} ──", index + 1, chapter.title);
        match &chapter.image {
            Some(image) => println!("  [illustration: {}, {} bytes]", image.mime, image.data.len()),
            None => println!("  [no illustration]"),
        }
        println!();
        println!("{}", chapter.content);
    }
    println!();
}

/// One line per archived story, newest first.
pub fn print_library_entry(story: &Story) {
    println!(
        "{}  {}  {:20}  {} chapters",
        id_prefix(&story.id),
        story.created_at.format("%Y-%m-%d"),
        story.genre.to_string(),
        story.chapters.len()
    );
    println!("          {}", story.title);
}

/// Export a story to a directory: markdown plus per-chapter media files.
///
/// Returns the directory everything was written into.
///
/// # Errors
///
/// Fails on any filesystem error; export is all-or-nothing from the
/// caller's point of view but already-written files are left in place.
pub fn export_story(
    out_dir: &Path,
    story: &Story,
    narrations: &[(usize, NarrationBuffer)],
) -> FableResult<PathBuf> {
    let dir = out_dir.join(slug(&story.title));
    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::new(format!("could not create {}: {}", dir.display(), e)))?;

    let mut markdown = format!("# {}\n\n*{}*\n\n", story.title, story.summary);

    for (index, chapter) in story.chapters.iter().enumerate() {
        let number = index + 1;
        markdown.push_str(&format!("## Chapter {}: {}\n\n", number, chapter.title));

        if let Some(image) = &chapter.image {
            let file_name = format!("chapter_{:02}.{}", number, extension_for(&image.mime));
            std::fs::write(dir.join(&file_name), &image.data).map_err(|e| {
                ConfigError::new(format!("could not write {}: {}", file_name, e))
            })?;
            markdown.push_str(&format!("![{}]({})\n\n", chapter.title, file_name));
        }

        markdown.push_str(chapter.content.trim());
        markdown.push_str("\n\n");
    }

    for (index, buffer) in narrations {
        let file_name = format!("chapter_{:02}.wav", index + 1);
        fable_audio::write_wav(&dir.join(&file_name), buffer)?;
    }

    std::fs::write(dir.join("story.md"), markdown)
        .map_err(|e| ConfigError::new(format!("could not write story.md: {}", e)))?;

    info!(dir = %dir.display(), "Exported story");
    Ok(dir)
}

fn extension_for(mime: &str) -> &str {
    match mime {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        _ => "png",
    }
}

fn slug(title: &str) -> String {
    let mut slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "story".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fable_core::{Chapter, ChapterImage, Genre};
    use uuid::Uuid;

    fn story() -> Story {
        Story {
            id: Uuid::new_v4(),
            title: "The Obsidian Citadel!".to_string(),
            summary: "A hook.".to_string(),
            genre: Genre::HighFantasy,
            created_at: Utc::now(),
            chapters: vec![
                Chapter {
                    id: Uuid::new_v4(),
                    title: "Arrival".to_string(),
                    content: "The citadel loomed.".to_string(),
                    image_prompt: "p".to_string(),
                    image: Some(ChapterImage {
                        mime: "image/png".to_string(),
                        data: vec![1, 2, 3],
                    }),
                    narration: None,
                },
                Chapter {
                    id: Uuid::new_v4(),
                    title: "Descent".to_string(),
                    content: "Stairs of night.".to_string(),
                    image_prompt: "p".to_string(),
                    image: None,
                    narration: None,
                },
            ],
        }
    }

    #[test]
    fn slug_flattens_punctuation() {
        assert_eq!(slug("The Obsidian Citadel!"), "the-obsidian-citadel");
        assert_eq!(slug("???"), "story");
    }

    #[test]
    fn export_writes_markdown_and_images() {
        let dir = tempfile::tempdir().unwrap();
        let narration = NarrationBuffer {
            sample_rate: 24000,
            channels: 1,
            samples: vec![0.0; 100],
        };
        let out = export_story(dir.path(), &story(), &[(0, narration)]).unwrap();

        let markdown = std::fs::read_to_string(out.join("story.md")).unwrap();
        assert!(markdown.contains("# The Obsidian Citadel!"));
        assert!(markdown.contains("![Arrival](chapter_01.png)"));
        // chapter 2 had no illustration
        assert!(!markdown.contains("chapter_02.png"));

        assert!(out.join("chapter_01.png").exists());
        assert!(out.join("chapter_01.wav").exists());
        assert!(!out.join("chapter_02.wav").exists());
    }
}
