use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CaptionResult {
    pub image_path: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptionError {
    pub image_path: String,
    pub error: String,
}

/// Summary of one batch. `successfully_captioned + errors.len()` always
/// equals `total_images_found`; `results` and `errors` partition the
/// located files in enumeration order.
#[derive(Debug, Serialize)]
pub struct CaptionReport {
    pub total_images_found: usize,
    pub successfully_captioned: usize,
    pub results: Vec<CaptionResult>,
    pub message: String,
    pub errors: Vec<CaptionError>,
}

/// Outcome of a single per-image attempt. Failures are values rather than
/// errors so the batch loop is a plain fold that never aborts mid-batch.
#[derive(Debug)]
pub enum CaptionOutcome {
    Captioned(CaptionResult),
    Failed(CaptionError),
}
