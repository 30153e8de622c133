//! Fable Forge CLI entry point.

use clap::Parser;
use fable_error::{FableError, FableErrorKind};
use fable_forge::cli::{Cli, Commands, build_invocation, handle_explore_command,
    handle_forge_command, handle_library_command, handle_settings_command, list_styles,
    list_voices};
use fable_forge::ForgeConfig;
use tracing_subscriber::EnvFilter;

/// Exit code for fatal pipeline errors.
const EXIT_PIPELINE: i32 = 1;
/// Exit code for usage and configuration errors.
const EXIT_CONFIG: i32 = 2;

fn exit_code_for(error: &FableError) -> i32 {
    match error.kind() {
        FableErrorKind::Config(_) => EXIT_CONFIG,
        FableErrorKind::Gemini(gemini)
            if gemini.kind == fable_error::GeminiErrorKind::MissingApiKey =>
        {
            EXIT_CONFIG
        }
        _ => EXIT_PIPELINE,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let outcome = run(cli).await;
    if let Err(error) = outcome {
        eprintln!("{}", error);
        std::process::exit(exit_code_for(&error));
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), FableError> {
    match cli.command {
        Commands::Forge {
            prompt,
            genre,
            tone,
            chapters,
            style,
            no_images,
            narrate,
            voice,
            out,
        } => {
            let config = ForgeConfig::load_or_default()?;
            let invocation = build_invocation(
                &config, prompt, genre, tone, chapters, style, no_images, narrate, voice, out,
            )?;
            handle_forge_command(invocation).await
        }
        Commands::Library { command } => handle_library_command(command),
        Commands::Explore { forge } => {
            let config = ForgeConfig::load_or_default()?;
            handle_explore_command(&config, forge).await
        }
        Commands::Voices => {
            list_voices();
            Ok(())
        }
        Commands::Styles => {
            list_styles();
            Ok(())
        }
        Commands::Settings { command } => handle_settings_command(command),
    }
}
