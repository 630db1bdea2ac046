use super::types::ImagePayload;
use crate::{Error, Result, config::ModelConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// A caption generator shared across requests. The backend is a process-wide
/// singleton and is not assumed reentrant, so callers take the lock for the
/// duration of each `caption` call.
pub type SharedGenerator = Arc<Mutex<Box<dyn CaptionGenerator>>>;

#[async_trait]
pub trait CaptionGenerator: Send + Sync {
    /// Generates a natural-language description for one image. Idempotent and
    /// stateless across calls; may be slow.
    async fn caption(&self, image: &ImagePayload) -> Result<String>;
}

pub struct OpenAiCaptioner {
    client: Client<OpenAIConfig>,
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiCaptioner {
    pub fn new(config: ModelConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::config("model.api_key must not be empty"));
        }
        if config.model.is_empty() {
            return Err(Error::config("model.model must not be empty"));
        }

        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Ok(Self {
            client,
            model: config.model,
            prompt: config.prompt,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl CaptionGenerator for OpenAiCaptioner {
    async fn caption(&self, image: &ImagePayload) -> Result<String> {
        debug!(
            "Requesting caption for a {} byte {} image",
            image.bytes.len(),
            image.mime_type
        );

        let content: Vec<openai_types::ChatCompletionRequestUserMessageContentPart> = vec![
            openai_types::ChatCompletionRequestMessageContentPartTextArgs::default()
                .text(self.prompt.clone())
                .build()?
                .into(),
            openai_types::ChatCompletionRequestMessageContentPartImageArgs::default()
                .image_url(
                    openai_types::ImageUrlArgs::default()
                        .url(image.to_data_url())
                        .detail(openai_types::ImageDetail::Auto)
                        .build()?,
                )
                .build()?
                .into(),
        ];

        let request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([openai_types::ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()?
                .into()])
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::caption("Captioning backend returned no choices"))?;

        let text = choice.message.content.unwrap_or_default();
        if text.trim().is_empty() {
            return Err(Error::caption("Captioning backend returned an empty caption"));
        }

        debug!("Received caption of {} characters", text.len());
        Ok(text)
    }
}
