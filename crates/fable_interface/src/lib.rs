//! Trait definitions for the Fable Forge story engine.
//!
//! This crate defines the seam between the pipeline and the generative
//! backend: the request/response DTOs, the [`ForgeDriver`] trait, and the
//! progress events the pipeline emits.

mod driver;
mod events;

pub use driver::{
    AspectRatio, ForgeDriver, ImageRequest, ImageRequestBuilder, ImageResponse, NarrationRequest,
    NarrationRequestBuilder, NarrationResponse, ScriptRequest, ScriptRequestBuilder,
    ScriptResponse,
};
pub use events::ForgeEvent;
