use super::types::{CaptionRequest, ErrorResponse};
use crate::{
    Error,
    batch::{BatchCaptioner, CaptionReport},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub batcher: Arc<BatchCaptioner>,
}

pub async fn caption_images(
    State(state): State<AppState>,
    payload: Result<Json<CaptionRequest>, JsonRejection>,
) -> Result<Json<CaptionReport>, (StatusCode, Json<ErrorResponse>)> {
    // A missing or malformed body is a client input problem, so answer 400
    // rather than letting the default rejection pick the status.
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid request body: {}", rejection.body_text()),
            }),
        )
    })?;

    info!(
        "Received caption request for folder: {}",
        request.folder_location
    );

    if request.folder_location.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "folder_location must be a non-empty path".to_string(),
            }),
        ));
    }

    match state.batcher.run(&request.folder_location).await {
        Ok(report) => {
            info!(
                "Completed batch for folder {}: {}",
                request.folder_location, report.message
            );
            Ok(Json(report))
        }
        Err(e) => {
            error!(
                "Failed to process folder {}: {}",
                request.folder_location, e
            );
            Err((
                status_for(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::InvalidFolder(_) => StatusCode::BAD_REQUEST,
        Error::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
