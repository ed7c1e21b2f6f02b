use crate::models::plan::{Goal, PrescribedExercise};
use crate::models::profile::ExperienceLevel;

pub const FORM_NOTE: &str = "Maintain correct form";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
}

impl Prescription {
    pub fn for_goal(goal: &Goal, level: ExperienceLevel) -> Self {
        let (sets, reps) = match goal {
            Goal::MuscleGain if level == ExperienceLevel::Beginner => (3, 10),
            Goal::MuscleGain => (4, 8),
            Goal::Endurance => (3, 15),
            Goal::Rehabilitation => (2, 12),
            _ => (3, 10),
        };

        let rest_seconds = match goal {
            Goal::MuscleGain => 90,
            _ => 60,
        };

        Self {
            sets,
            reps,
            rest_seconds,
        }
    }

    pub fn prescribe(&self, exercise_id: &str) -> PrescribedExercise {
        PrescribedExercise {
            exercise_id: exercise_id.to_string(),
            sets: self.sets,
            reps: Some(self.reps),
            duration_seconds: None,
            weight_kg: None,
            rest_seconds: self.rest_seconds,
            notes: Some(FORM_NOTE.to_string()),
        }
    }
}
