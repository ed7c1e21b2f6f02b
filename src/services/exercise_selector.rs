use std::collections::HashSet;

use crate::models::exercise::{Category, Difficulty, Exercise};

pub const MAX_EXERCISES: usize = 8;
pub const MIN_EXERCISES: usize = 5;
/// Target of the top-up pass when the priority pass falls short of the minimum.
const TOP_UP_TARGET: usize = 6;
const REHAB_BASELINE: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct SelectionCriteria<'a> {
    pub categories: &'a [Category],
    pub allowed_difficulties: &'a [Difficulty],
    pub joint_problems: &'a [String],
}

/// Picks the plan's exercises from an already safety-filtered list.
///
/// Order of passes:
/// 1. up to three rehabilitation exercises when the user reports joint problems,
/// 2. each priority category in turn, until eight are selected,
/// 3. any remaining eligible exercise until six, if fewer than five were found.
///
/// Ties are broken by catalog order only, so identical inputs always yield the
/// same ordered selection.
pub fn select_exercises<'a>(
    safe_exercises: &[&'a Exercise],
    criteria: &SelectionCriteria<'_>,
) -> Vec<&'a Exercise> {
    let mut selection = Selection::default();
    let eligible =
        |exercise: &&Exercise| criteria.allowed_difficulties.contains(&exercise.difficulty);

    if !criteria.joint_problems.is_empty() {
        for exercise in safe_exercises
            .iter()
            .copied()
            .filter(eligible)
            .filter(|e| e.is_rehabilitation)
        {
            if selection.len() >= REHAB_BASELINE {
                break;
            }
            selection.push(exercise);
        }
    }

    'categories: for category in criteria.categories {
        for exercise in safe_exercises
            .iter()
            .copied()
            .filter(eligible)
            .filter(|e| e.category == *category)
        {
            selection.push(exercise);
            if selection.len() >= MAX_EXERCISES {
                break 'categories;
            }
        }
    }

    if selection.len() < MIN_EXERCISES {
        for exercise in safe_exercises.iter().copied().filter(eligible) {
            if selection.len() >= TOP_UP_TARGET {
                break;
            }
            selection.push(exercise);
        }
    }

    selection.exercises
}

#[derive(Default)]
struct Selection<'a> {
    exercises: Vec<&'a Exercise>,
    seen: HashSet<&'a str>,
}

impl<'a> Selection<'a> {
    fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Ignores exercises that are already selected.
    fn push(&mut self, exercise: &'a Exercise) {
        if self.seen.insert(exercise.id.as_str()) {
            self.exercises.push(exercise);
        }
    }
}
