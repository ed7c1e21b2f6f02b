use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;

use crate::models::exercise::{Category, Difficulty, Exercise};

const SEED_CATALOG: &str = include_str!("../../data/exercises.json");

#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Full snapshot in stable order.
    async fn list_exercises(&self) -> Result<Vec<Exercise>>;

    async fn get_exercise(&self, exercise_id: &str) -> Result<Option<Exercise>> {
        Ok(self
            .list_exercises()
            .await?
            .into_iter()
            .find(|exercise| exercise.id == exercise_id))
    }
}

/// Read-only catalog loaded once at startup.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    exercises: Vec<Exercise>,
}

impl StaticCatalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = exercises.iter().find(|e| !seen.insert(e.id.as_str())) {
            anyhow::bail!("Duplicate exercise id in catalog: {}", duplicate.id);
        }

        Ok(Self { exercises })
    }

    pub fn seeded() -> Result<Self> {
        Self::from_json(SEED_CATALOG)
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read exercise catalog from {}", path))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let exercises: Vec<Exercise> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse exercise catalog: {}", e))?;
        Self::new(exercises)
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

#[async_trait]
impl ExerciseCatalog for StaticCatalog {
    async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        Ok(self.exercises.clone())
    }
}

/// Conjunctive catalog filter; unset fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseQuery {
    pub category: Option<Category>,
    pub muscle_group: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub is_rehabilitation: Option<bool>,
}

impl ExerciseQuery {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let category = self.category.is_none_or(|c| exercise.category == c);
        let muscle_group = self
            .muscle_group
            .as_ref()
            .is_none_or(|group| exercise.muscle_groups.contains(group));
        let difficulty = self.difficulty.is_none_or(|d| exercise.difficulty == d);
        let rehabilitation = self
            .is_rehabilitation
            .is_none_or(|flag| exercise.is_rehabilitation == flag);

        category && muscle_group && difficulty && rehabilitation
    }
}
