use crate::models::exercise::{Category, Difficulty};
use crate::models::plan::Goal;
use crate::models::profile::ExperienceLevel;

/// Categories to favour for a goal, highest priority first.
pub fn category_priority(goal: &Goal) -> &'static [Category] {
    use Category::*;

    match goal {
        Goal::WeightLoss => &[Cardio, Bodyweight, Strength, Flexibility],
        Goal::MuscleGain => &[Strength, Bodyweight, Flexibility],
        Goal::Mobility => &[Flexibility, Bodyweight, Rehabilitation],
        Goal::Endurance => &[Cardio, Bodyweight, Strength],
        Goal::Rehabilitation => &[Rehabilitation, Flexibility, Bodyweight],
        Goal::Other(_) => &[Strength, Bodyweight, Cardio, Flexibility],
    }
}

pub fn allowed_difficulties(level: ExperienceLevel) -> &'static [Difficulty] {
    use Difficulty::*;

    match level {
        ExperienceLevel::Beginner => &[Beginner],
        ExperienceLevel::Intermediate => &[Beginner, Intermediate],
        ExperienceLevel::Advanced => &[Beginner, Intermediate, Advanced],
        ExperienceLevel::Unspecified => &[Beginner, Intermediate],
    }
}
