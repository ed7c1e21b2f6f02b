use tracing::warn;

use crate::models::exercise::Exercise;
use crate::models::plan::{Goal, PlanContent, PlanRequest};
use crate::models::profile::{FitnessProfile, HealthProfile};
use crate::services::category_priority::{allowed_difficulties, category_priority};
use crate::services::exercise_selector::{MIN_EXERCISES, SelectionCriteria, select_exercises};
use crate::services::prescription::Prescription;
use crate::services::safety_filter::filter_safe_exercises;

pub fn goal_label(goal: &Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => "Fat Burning",
        Goal::MuscleGain => "Muscle Building",
        Goal::Mobility => "Mobility",
        Goal::Endurance => "Endurance",
        Goal::Rehabilitation => "Rehabilitation",
        Goal::Other(_) => "Fitness",
    }
}

/// Deterministic plan generation: safety filter, selection, prescription.
/// Always available and the fallback for the model-backed path.
pub fn generate_rule_based_plan(
    catalog: &[Exercise],
    request: &PlanRequest,
    fitness: &FitnessProfile,
    health: &HealthProfile,
) -> PlanContent {
    let level = fitness.experience();
    let safe_exercises = filter_safe_exercises(catalog, health);

    let criteria = SelectionCriteria {
        categories: category_priority(&request.goal),
        allowed_difficulties: allowed_difficulties(level),
        joint_problems: &health.joint_problems,
    };
    let selected = select_exercises(&safe_exercises, &criteria);

    if selected.len() < MIN_EXERCISES {
        warn!(
            goal = %request.goal,
            catalog_size = catalog.len(),
            safe_count = safe_exercises.len(),
            selected_count = selected.len(),
            "plan.selection_underfilled"
        );
    }

    let prescription = Prescription::for_goal(&request.goal, level);
    let label = goal_label(&request.goal);

    PlanContent {
        name: format!("Personalized {} Plan", label),
        description: format!(
            "Tailored {} plan based on your profile and health restrictions.",
            label
        ),
        exercises: selected
            .iter()
            .map(|exercise| prescription.prescribe(&exercise.id))
            .collect(),
    }
}
