use async_trait::async_trait;
use captiond::{
    Error, Result,
    captioner::{CaptionGenerator, ImagePayload, SharedGenerator},
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock caption generator for testing. Captions are scripted and consumed
/// in call order, so tests control exactly which image succeeds or fails.
#[derive(Debug, Clone)]
pub struct MockCaptionGenerator {
    outcomes: Arc<Mutex<Vec<std::result::Result<String, String>>>>,
    calls: Arc<Mutex<usize>>,
    error: Option<String>,
    delay: Option<Duration>,
}

impl MockCaptionGenerator {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(0)),
            error: None,
            delay: None,
        }
    }

    pub fn with_captions(self, captions: &[&str]) -> Self {
        *self.outcomes.lock().unwrap() =
            captions.iter().map(|c| Ok(c.to_string())).collect();
        self
    }

    pub fn with_outcomes(self, outcomes: Vec<std::result::Result<String, String>>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes;
        self
    }

    /// Every call fails with this message, regardless of scripted captions.
    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Every call sleeps before answering, for timeout tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub fn into_shared(self) -> SharedGenerator {
        Arc::new(tokio::sync::Mutex::new(
            Box::new(self) as Box<dyn CaptionGenerator>
        ))
    }
}

impl Default for MockCaptionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptionGenerator for MockCaptionGenerator {
    async fn caption(&self, _image: &ImagePayload) -> Result<String> {
        *self.calls.lock().unwrap() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::caption(error.clone()));
        }

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(Error::caption("No more mock captions available"));
        }

        outcomes.remove(0).map_err(Error::caption)
    }
}
