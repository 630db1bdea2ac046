pub mod report;
mod types;

pub use types::{CaptionError, CaptionOutcome, CaptionReport, CaptionResult};

use crate::captioner::{ImagePayload, SharedGenerator};
use crate::locator;
use crate::{Error, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Runs one caption batch per request: locates images in the requested
/// folder and feeds them to the shared caption generator one at a time.
///
/// Each image is attempted exactly once. A per-image failure is recorded in
/// the report and the loop moves on; only folder-level and readiness
/// failures abort the whole call.
pub struct BatchCaptioner {
    generator: Option<SharedGenerator>,
    caption_timeout: Duration,
}

impl BatchCaptioner {
    pub fn new(generator: Option<SharedGenerator>, caption_timeout: Duration) -> Self {
        Self {
            generator,
            caption_timeout,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn run(&self, folder_location: &str) -> Result<CaptionReport> {
        let generator = self.generator.as_ref().ok_or_else(|| {
            Error::model_unavailable("Captioning service is unavailable. Model not loaded.")
        })?;

        let images = locator::locate(folder_location)?;
        let total_images_found = images.len();

        if total_images_found == 0 {
            info!("No supported images found in folder: {}", folder_location);
            return Ok(report::assemble(0, Vec::new(), Vec::new()));
        }

        info!(
            "Found {} image(s) to process in folder: {}",
            total_images_found, folder_location
        );

        let mut results = Vec::new();
        let mut errors = Vec::new();
        for image in &images {
            match self.caption_one(generator, image).await {
                CaptionOutcome::Captioned(result) => results.push(result),
                CaptionOutcome::Failed(error) => {
                    warn!("Skipping image {}: {}", error.image_path, error.error);
                    errors.push(error);
                }
            }
        }

        Ok(report::assemble(total_images_found, results, errors))
    }

    async fn caption_one(&self, generator: &SharedGenerator, image: &Path) -> CaptionOutcome {
        let image_path = display_path(image);
        debug!("Processing image: {}", image_path);

        match self.attempt(generator, image).await {
            Ok(description) => CaptionOutcome::Captioned(CaptionResult {
                image_path,
                description,
            }),
            Err(e) => CaptionOutcome::Failed(CaptionError {
                image_path,
                error: e.to_string(),
            }),
        }
    }

    async fn attempt(&self, generator: &SharedGenerator, image: &Path) -> Result<String> {
        let bytes = tokio::fs::read(image)
            .await
            .map_err(|e| Error::caption(format!("Failed to read image file: {}", e)))?;

        let payload = ImagePayload::from_bytes(bytes)
            .map_err(|e| Error::caption(format!("Failed to decode image: {}", e)))?;

        // One model call at a time; the backend is shared across requests and
        // not assumed reentrant.
        let generator = generator.lock().await;
        match tokio::time::timeout(self.caption_timeout, generator.caption(&payload)).await {
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(e)) => Err(Error::caption(format!("Caption generation failed: {}", e))),
            Err(_) => Err(Error::caption(format!(
                "Caption generation timed out after {}s",
                self.caption_timeout.as_secs()
            ))),
        }
    }
}

fn display_path(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
