pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::batch::BatchService;
use crate::services::cleaner::MetadataCleaner;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::clean::clean_batch,
        api::handlers::clean::clean_single,
        api::handlers::clean::clean_archive,
        api::handlers::health::health_check,
    ),
    components(
        schemas(
            api::handlers::clean::CleanReport,
            api::handlers::clean::FileReport,
            api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "clean", description = "Video metadata removal endpoints"),
        (name = "system", description = "Service health and documentation")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub cleaner: Arc<dyn MetadataCleaner>,
    pub batch: Arc<BatchService>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(cleaner: Arc<dyn MetadataCleaner>, config: AppConfig) -> Self {
        let batch = Arc::new(BatchService::new(cleaner.clone()));
        Self {
            cleaner,
            batch,
            config,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(api::handlers::pages::index))
        .route("/health", get(api::handlers::health::health_check))
        .route("/clean", post(api::handlers::clean::clean_batch))
        .route("/clean/file", post(api::handlers::clean::clean_single))
        .route("/clean/archive", post(api::handlers::clean::clean_archive))
        .with_state(state)
}
