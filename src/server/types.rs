use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
    pub folder_location: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
