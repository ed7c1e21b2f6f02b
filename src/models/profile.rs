use serde::{Deserialize, Serialize};

/// Anamnesis: the user's reported health history.
///
/// Only `joint_problems` and `heart_conditions` drive exercise filtering today;
/// the remaining fields are accepted and forwarded to the model prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub heart_conditions: bool,
    #[serde(default)]
    pub high_blood_pressure: bool,
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub joint_problems: Vec<String>,
    pub other_conditions: Option<String>,
    pub medications: Option<String>,
    pub physical_limitations: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessProfile {
    /// Kilograms.
    pub weight: Option<f32>,
    /// Centimetres.
    pub height: Option<f32>,
    pub bmi: Option<f32>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub fitness_goal: Option<String>,
    pub experience_level: Option<String>,
}

impl FitnessProfile {
    pub fn bmi(&self) -> Option<f32> {
        if self.bmi.is_some() {
            return self.bmi;
        }

        match (self.weight, self.height) {
            (Some(weight), Some(height)) if weight > 0.0 && height > 0.0 => {
                let height_m = height / 100.0;
                Some((weight / (height_m * height_m) * 10.0).round() / 10.0)
            }
            _ => None,
        }
    }

    pub fn experience(&self) -> ExperienceLevel {
        ExperienceLevel::parse(self.experience_level.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    /// Missing or unrecognized level.
    Unspecified,
}

impl ExperienceLevel {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("beginner") => ExperienceLevel::Beginner,
            Some("intermediate") => ExperienceLevel::Intermediate,
            Some("advanced") => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Unspecified,
        }
    }
}
