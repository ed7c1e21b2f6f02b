use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::services::plan_assembler::PlanAssembler;
use crate::services::plan_generation::PlanGenerationService;
use crate::storage::catalog::ExerciseCatalog;
use crate::storage::plans::PlanStore;

pub mod exercises;
pub mod plans;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn ExerciseCatalog>,
    pub plan_store: Arc<dyn PlanStore>,
    pub plan_service: PlanGenerationService,
    pub plan_assembler: PlanAssembler,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "request.failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/exercises", get(exercises::list_exercises))
        .route("/api/exercises/{exercise_id}", get(exercises::get_exercise))
        .route(
            "/api/exercises/categories/list",
            get(exercises::list_categories),
        )
        .route("/api/plans", get(plans::list_plans))
        .route("/api/plans/generate", post(plans::generate_plan))
        .route("/api/plans/{plan_id}", get(plans::get_plan))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub(crate) fn authenticate_request(headers: &HeaderMap, state: &AppState) -> Result<(), ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    if token != state.config.api_token {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;
    use crate::storage::catalog::StaticCatalog;
    use crate::storage::plans::InMemoryPlanStore;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;

    pub const TOKEN: &str = "test-token";

    pub fn test_state() -> AppState {
        let catalog: Arc<dyn ExerciseCatalog> = Arc::new(StaticCatalog::seeded().unwrap());
        let plan_store: Arc<dyn PlanStore> = Arc::new(InMemoryPlanStore::default());

        AppState {
            config: Config {
                api_token: TOKEN.to_string(),
                port: "0".to_string(),
                gemini_api_key: None,
                gemini_model: "test-model".to_string(),
                llm_timeout: Duration::from_millis(100),
                catalog_path: None,
            },
            catalog: catalog.clone(),
            plan_store: plan_store.clone(),
            plan_service: PlanGenerationService::new(catalog, None, Duration::from_millis(100)),
            plan_assembler: PlanAssembler::new(plan_store),
        }
    }

    pub async fn send(state: AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub fn authed_get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {}", TOKEN))
            .body(Body::empty())
            .unwrap()
    }
}
