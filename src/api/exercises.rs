use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;

use crate::api::{ApiError, AppState};
use crate::models::exercise::{Category, Difficulty, Exercise, MUSCLE_GROUPS};
use crate::storage::catalog::ExerciseQuery;

pub async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseQuery>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = state
        .catalog
        .list_exercises()
        .await?
        .into_iter()
        .filter(|exercise| query.matches(exercise))
        .collect();

    Ok(Json(exercises))
}

pub async fn get_exercise(
    State(state): State<AppState>,
    Path(exercise_id): Path<String>,
) -> Result<Json<Exercise>, ApiError> {
    state
        .catalog
        .get_exercise(&exercise_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("exercise"))
}

#[derive(Debug, Serialize)]
pub struct LabeledValue {
    pub id: &'static str,
    pub name: &'static str,
}

/// The vocabularies a client needs to build catalog filters.
#[derive(Debug, Serialize)]
pub struct CatalogVocabulary {
    pub categories: Vec<LabeledValue>,
    pub muscle_groups: Vec<&'static str>,
    pub difficulty_levels: Vec<LabeledValue>,
}

pub async fn list_categories() -> Json<CatalogVocabulary> {
    let categories = Category::ALL
        .iter()
        .map(|category| LabeledValue {
            id: category.as_str(),
            name: category.label(),
        })
        .collect();
    let difficulty_levels = Difficulty::ALL
        .iter()
        .map(|difficulty| LabeledValue {
            id: difficulty.as_str(),
            name: difficulty.label(),
        })
        .collect();

    Json(CatalogVocabulary {
        categories,
        muscle_groups: MUSCLE_GROUPS.to_vec(),
        difficulty_levels,
    })
}
