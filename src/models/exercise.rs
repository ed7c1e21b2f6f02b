use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
    Bodyweight,
    Rehabilitation,
}

/// Muscle-group tags used across the catalog.
pub const MUSCLE_GROUPS: [&str; 11] = [
    "chest",
    "back",
    "shoulders",
    "biceps",
    "triceps",
    "core",
    "legs",
    "calves",
    "glutes",
    "forearms",
    "full_body",
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Strength,
        Category::Cardio,
        Category::Flexibility,
        Category::Bodyweight,
        Category::Rehabilitation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Strength => "Strength Training",
            Category::Cardio => "Cardio",
            Category::Flexibility => "Stretching & Mobility",
            Category::Bodyweight => "Bodyweight",
            Category::Rehabilitation => "Rehabilitation",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Cardio => "cardio",
            Category::Flexibility => "flexibility",
            Category::Bodyweight => "bodyweight",
            Category::Rehabilitation => "rehabilitation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry. Contraindications are body-area keywords ("knee",
/// "shoulder", ...) matched against the user's joint problems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub muscle_groups: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default)]
    pub is_rehabilitation: bool,
    pub calories_per_minute: Option<f32>,
}

impl Exercise {
    pub fn is_contraindicated_for(&self, joint_problems: &[String]) -> bool {
        self.contraindications
            .iter()
            .any(|tag| joint_problems.contains(tag))
    }
}
