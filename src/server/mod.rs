pub mod handlers;
pub mod types;

use crate::batch::BatchCaptioner;
use crate::captioner::{CaptionGenerator, OpenAiCaptioner, SharedGenerator};
use crate::{Result, config::Config};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/caption-images/", post(handlers::caption_images))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the shared application state from config. A generator that fails
/// to initialize leaves the service running in a degraded state where every
/// batch request is answered with 503.
pub fn build_state(config: &Config) -> AppState {
    let generator: Option<SharedGenerator> = match OpenAiCaptioner::new(config.model.clone()) {
        Ok(captioner) => {
            info!(
                "Caption generator initialized with model: {}",
                config.model.model
            );
            Some(Arc::new(Mutex::new(
                Box::new(captioner) as Box<dyn CaptionGenerator>
            )))
        }
        Err(e) => {
            error!("Failed to initialize caption generator: {}", e);
            None
        }
    };

    AppState {
        batcher: Arc::new(BatchCaptioner::new(
            generator,
            Duration::from_secs(config.server.caption_timeout_secs),
        )),
    }
}

pub async fn run(config: Config) -> Result<()> {
    let app_state = build_state(&config);
    if !app_state.batcher.is_ready() {
        error!("Starting in degraded mode: all caption requests will fail with 503");
    }

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
