use crate::models::exercise::{Category, Difficulty, Exercise};
use crate::models::profile::HealthProfile;

/// An exercise is unsafe when it is contraindicated for any of the user's
/// joint problems, or when it is advanced cardio for a user with heart
/// conditions. Blood pressure, diabetes and free-text limitations do not
/// affect filtering.
pub fn is_safe(exercise: &Exercise, health: &HealthProfile) -> bool {
    if exercise.is_contraindicated_for(&health.joint_problems) {
        return false;
    }

    !(health.heart_conditions
        && exercise.category == Category::Cardio
        && exercise.difficulty == Difficulty::Advanced)
}

/// Catalog order is preserved.
pub fn filter_safe_exercises<'a>(
    catalog: &'a [Exercise],
    health: &HealthProfile,
) -> Vec<&'a Exercise> {
    catalog
        .iter()
        .filter(|exercise| is_safe(exercise, health))
        .collect()
}
