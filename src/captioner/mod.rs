mod client;
mod types;

pub use client::{CaptionGenerator, OpenAiCaptioner, SharedGenerator};
pub use types::ImagePayload;
