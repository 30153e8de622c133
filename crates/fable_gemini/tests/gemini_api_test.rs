//! Integration tests against the real Gemini API.
//!
//! These compile always but only run with `--features api` and a
//! `GEMINI_API_KEY` in the environment (or a `.env` file).

use fable_core::{Genre, ImageStyle, NarrationVoice, Tone};
use fable_gemini::{GeminiClient, GeminiConfig};
use fable_interface::{
    AspectRatio, ForgeDriver, ImageRequest, NarrationRequest, ScriptRequest,
};

fn client() -> GeminiClient {
    dotenvy::dotenv().ok();
    let config = GeminiConfig::from_env().expect("GEMINI_API_KEY must be set for API tests");
    GeminiClient::new(config)
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn compose_script_returns_json_text() {
    let client = client();
    let request = ScriptRequest::builder()
        .prompt("A lighthouse at the edge of a dying universe")
        .genre(Genre::Fable)
        .tone(Tone::Hopeful)
        .chapter_count(3usize)
        .build()
        .expect("Valid request");

    let response = client
        .compose_script(&request)
        .await
        .expect("API call succeeded");
    assert!(!response.text.is_empty());
    // The schema pins JSON output; at worst it arrives fenced.
    assert!(response.text.contains("chapters"));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn paint_illustration_returns_image_bytes() {
    let client = client();
    let request = ImageRequest::builder()
        .prompt("A lone lighthouse on a cliff under a violet sky, cinematic")
        .style(ImageStyle::Photorealistic)
        .aspect_ratio(AspectRatio::Widescreen)
        .build()
        .expect("Valid request");

    let response = client
        .paint_illustration(&request)
        .await
        .expect("API call succeeded");
    assert!(!response.data.is_empty());
    assert!(response.mime.starts_with("image/"));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn narrate_returns_even_length_pcm() {
    let client = client();
    let request = NarrationRequest::builder()
        .text("The beacon turned, and the last world held its breath.")
        .voice(NarrationVoice::Kore)
        .build()
        .expect("Valid request");

    let response = client.narrate(&request).await.expect("API call succeeded");
    assert!(!response.data.is_empty());
    assert_eq!(response.data.len() % 2, 0);
    assert_eq!(response.sample_rate, 24000);
    assert_eq!(response.channels, 1);
}
