use crate::models::exercise::{Category, Difficulty, Exercise};
use crate::storage::catalog::StaticCatalog;

pub fn exercise(id: &str, category: Category, difficulty: Difficulty) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: id.replace('-', " "),
        category,
        muscle_groups: vec!["full_body".to_string()],
        difficulty,
        description: String::new(),
        contraindications: vec![],
        is_rehabilitation: false,
        calories_per_minute: None,
    }
}

pub fn contraindicated(mut exercise: Exercise, tags: &[&str]) -> Exercise {
    exercise.contraindications = tags.iter().map(|tag| tag.to_string()).collect();
    exercise
}

pub fn rehab(mut exercise: Exercise) -> Exercise {
    exercise.is_rehabilitation = true;
    exercise
}

pub fn seed_catalog() -> Vec<Exercise> {
    StaticCatalog::seeded().unwrap().exercises().to_vec()
}

pub fn ids(exercises: &[&Exercise]) -> Vec<String> {
    exercises.iter().map(|e| e.id.clone()).collect()
}
