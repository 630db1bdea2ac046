use super::types::{CaptionError, CaptionReport, CaptionResult};

/// Folds accumulated per-image outcomes into the final report, deriving the
/// counts and the human-readable summary message. Pure transformation.
pub fn assemble(
    total_images_found: usize,
    results: Vec<CaptionResult>,
    errors: Vec<CaptionError>,
) -> CaptionReport {
    let successfully_captioned = results.len();

    let message = if total_images_found == 0 {
        "No images found in the specified folder.".to_string()
    } else if errors.is_empty() {
        format!(
            "Successfully generated captions for all {} found image(s).",
            total_images_found
        )
    } else if successfully_captioned > 0 {
        format!(
            "Generated captions for {} out of {} found image(s). See errors for details on failures.",
            successfully_captioned, total_images_found
        )
    } else {
        format!(
            "Attempted to process {} image(s), but no captions were successfully generated. See errors for details.",
            total_images_found
        )
    };

    CaptionReport {
        total_images_found,
        successfully_captioned,
        results,
        message,
        errors,
    }
}
