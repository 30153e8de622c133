//! Explore command handler.

use super::forge::{ForgeInvocation, handle_forge_command};
use crate::config::ForgeConfig;
use crate::explore::{FeaturedSeed, daily_seed, featured_seeds};
use fable_core::GenerationParams;
use fable_error::{ConfigError, FableResult};
use fable_pipeline::ForgeSettings;
use std::path::PathBuf;

fn print_seed(number: usize, seed: &FeaturedSeed) {
    println!("{}. {} ({} / {})", number, seed.title, seed.genre, seed.tone);
    println!("   {}", seed.seed);
    println!();
}

/// Handles the explore command: list the seeds, optionally forge one.
pub async fn handle_explore_command(
    config: &ForgeConfig,
    forge_seed: Option<usize>,
) -> FableResult<()> {
    let seeds = featured_seeds();
    let daily = daily_seed();

    let Some(number) = forge_seed else {
        println!("Featured seeds:");
        println!();
        for (index, seed) in seeds.iter().enumerate() {
            print_seed(index + 1, seed);
        }
        println!("Daily seed (0):");
        print_seed(0, &daily);
        println!("Forge one with: fable-forge explore --forge <N>");
        return Ok(());
    };

    let seed = match number {
        0 => daily,
        n if n <= seeds.len() => seeds[n - 1],
        n => {
            return Err(
                ConfigError::new(format!("no featured seed numbered {}", n)).into(),
            );
        }
    };

    println!("Forging featured seed: {}", seed.title);
    let params = GenerationParams::builder()
        .prompt(seed.seed)
        .genre(seed.genre)
        .tone(seed.tone)
        .chapter_count(config.chapter_count)
        .build()
        .map_err(|e| ConfigError::new(e.to_string()))?;

    let invocation = ForgeInvocation {
        params,
        settings: ForgeSettings {
            image_style: config.image_style,
            ..Default::default()
        },
        narrate: false,
        voice: config.voice,
        out_dir: config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("stories")),
    };

    handle_forge_command(invocation).await
}
