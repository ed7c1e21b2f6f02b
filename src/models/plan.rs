use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Training goal. Unknown values are kept verbatim so they round-trip into
/// the stored plan, and select the default rule tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Mobility,
    Endurance,
    Rehabilitation,
    Other(String),
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Mobility => "mobility",
            Goal::Endurance => "endurance",
            Goal::Rehabilitation => "rehabilitation",
            Goal::Other(value) => value,
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.as_str() {
            "weight_loss" => Goal::WeightLoss,
            "muscle_gain" => Goal::MuscleGain,
            "mobility" => Goal::Mobility,
            "endurance" => Goal::Endurance,
            "rehabilitation" => Goal::Rehabilitation,
            _ => Goal::Other(value),
        }
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        Goal::from(value.to_string())
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_days_per_week() -> u32 {
    3
}

fn default_duration_weeks() -> u32 {
    4
}

fn default_rest_seconds() -> u32 {
    60
}

/// Treats an explicit `null` like a missing field.
fn rest_seconds_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let rest_seconds = Option::<u32>::deserialize(deserializer)?;
    Ok(rest_seconds.unwrap_or_else(default_rest_seconds))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub goal: Goal,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
    #[serde(default = "default_duration_weeks")]
    pub duration_weeks: u32,
    /// Informational; forwarded to the model prompt but not used for selection.
    #[serde(default)]
    pub focus_areas: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedExercise {
    pub exercise_id: String,
    pub sets: u32,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f32>,
    #[serde(default = "default_rest_seconds", deserialize_with = "rest_seconds_or_default")]
    pub rest_seconds: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Name, description and exercise list produced by either generation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanContent {
    pub name: String,
    pub description: String,
    pub exercises: Vec<PrescribedExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub name: String,
    pub description: String,
    pub goal: Goal,
    pub exercises: Vec<PrescribedExercise>,
    pub days_per_week: u32,
    pub duration_weeks: u32,
    pub is_ai_generated: bool,
}

impl GeneratedPlan {
    pub fn from_content(
        content: PlanContent,
        request: &PlanRequest,
        is_ai_generated: bool,
    ) -> Self {
        Self {
            name: content.name,
            description: content.description,
            goal: request.goal.clone(),
            exercises: content.exercises,
            days_per_week: request.days_per_week,
            duration_weeks: request.duration_weeks,
            is_ai_generated,
        }
    }
}

/// A generated plan stamped with identity and ownership, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: String,
    pub user_id: String,
    pub created_at: String,
    #[serde(flatten)]
    pub plan: GeneratedPlan,
}
