use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::api::{ApiError, AppState, authenticate_request};
use crate::models::plan::{PlanRequest, TrainingPlan};
use crate::models::profile::{FitnessProfile, HealthProfile};

/// Caller identity plus the request, profile and anamnesis the engine needs.
#[derive(Debug, Deserialize)]
pub struct GeneratePlanPayload {
    pub user_id: String,
    #[serde(flatten)]
    pub request: PlanRequest,
    #[serde(default)]
    pub profile: FitnessProfile,
    #[serde(default)]
    pub anamnesis: HealthProfile,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: String,
}

pub async fn generate_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GeneratePlanPayload>,
) -> Result<Json<TrainingPlan>, ApiError> {
    authenticate_request(&headers, &state)?;

    tracing::info!(
        user_id = %payload.user_id,
        goal = %payload.request.goal,
        days_per_week = payload.request.days_per_week,
        duration_weeks = payload.request.duration_weeks,
        "plan.generation_requested"
    );

    let outcome = state
        .plan_service
        .generate(&payload.request, &payload.profile, &payload.anamnesis)
        .await?;

    if let Some(reason) = &outcome.fallback_reason {
        tracing::info!(user_id = %payload.user_id, %reason, "plan.served_from_rules");
    }

    let plan = state
        .plan_assembler
        .assemble(&payload.user_id, outcome.plan)
        .await?;

    Ok(Json(plan))
}

pub async fn list_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<TrainingPlan>>, ApiError> {
    authenticate_request(&headers, &state)?;

    let plans = state.plan_store.list_for_user(&query.user_id).await?;
    Ok(Json(plans))
}

pub async fn get_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<String>,
    Query(query): Query<UserQuery>,
) -> Result<Json<TrainingPlan>, ApiError> {
    authenticate_request(&headers, &state)?;

    state
        .plan_store
        .get(&query.user_id, &plan_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("training plan"))
}
