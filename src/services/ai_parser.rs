use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::errors::GenerationFailure;
use crate::models::exercise::Exercise;
use crate::models::plan::{Goal, PlanContent, PrescribedExercise};
use crate::models::profile::HealthProfile;
use crate::services::safety_filter::is_safe;

/// Matches only a fence that opens the response; backticks inside the JSON are left alone.
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\s*```[A-Za-z]*\s*(.*?)\s*(?:```\s*)?\z")
        .expect("code fence pattern is valid")
});

pub fn parse_plan_response(response: &str, goal: &Goal) -> Result<PlanContent, GenerationFailure> {
    let json_content = extract_json_from_response(response);
    let parsed_json = parse_json_string(&json_content)?;
    let exercises = extract_exercises_from_json(&parsed_json)?;
    let name = extract_name_from_json(&parsed_json, goal);
    let description = extract_description_from_json(&parsed_json);

    Ok(PlanContent {
        name,
        description,
        exercises,
    })
}

/// Rejects the whole plan on the first entry that is malformed, unknown to the
/// catalog, or unsafe for the user.
pub fn validate_plan(
    plan: &PlanContent,
    catalog: &[Exercise],
    health: &HealthProfile,
) -> Result<(), GenerationFailure> {
    if plan.exercises.is_empty() {
        return Err(GenerationFailure::EmptyPlan);
    }

    let by_id: HashMap<&str, &Exercise> = catalog
        .iter()
        .map(|exercise| (exercise.id.as_str(), exercise))
        .collect();

    for prescribed in &plan.exercises {
        if prescribed.sets == 0 {
            return Err(GenerationFailure::Schema(format!(
                "'{}' has zero sets",
                prescribed.exercise_id
            )));
        }
        if prescribed.reps == Some(0) {
            return Err(GenerationFailure::Schema(format!(
                "'{}' has zero reps",
                prescribed.exercise_id
            )));
        }

        let exercise = by_id
            .get(prescribed.exercise_id.as_str())
            .ok_or_else(|| GenerationFailure::UnknownExercise(prescribed.exercise_id.clone()))?;

        if !is_safe(exercise, health) {
            return Err(GenerationFailure::UnsafeExercise(
                prescribed.exercise_id.clone(),
            ));
        }
    }

    Ok(())
}

fn extract_json_from_response(response: &str) -> String {
    CODE_FENCE
        .captures(response)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| response.trim().to_string())
}

fn parse_json_string(json_str: &str) -> Result<Value, GenerationFailure> {
    serde_json::from_str(json_str).map_err(|e| GenerationFailure::MalformedJson(e.to_string()))
}

fn extract_exercises_from_json(json: &Value) -> Result<Vec<PrescribedExercise>, GenerationFailure> {
    let exercises_value = json
        .get("exercises")
        .ok_or_else(|| GenerationFailure::Schema("missing 'exercises' field".to_string()))?;

    serde_json::from_value(exercises_value.clone())
        .map_err(|e| GenerationFailure::Schema(format!("invalid exercises array: {}", e)))
}

fn extract_name_from_json(json: &Value, goal: &Goal) -> String {
    json.get("name")
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Training Plan - {}", goal))
}

fn extract_description_from_json(json: &Value) -> String {
    json.get("description")
        .and_then(|d| d.as_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exercise::{Category, Difficulty};
    use crate::test_support::{contraindicated, exercise};

    const PLAN_JSON: &str = r#"{"name": "Strong Start", "description": "Three days a week", "exercises": [{"exercise_id": "lat-pulldown", "sets": 3, "reps": 10, "rest_seconds": 60, "notes": "RPE 7"}, {"exercise_id": "plank", "sets": 3, "reps": null, "rest_seconds": 45, "notes": ""}]}"#;

    fn catalog() -> Vec<Exercise> {
        vec![
            exercise("lat-pulldown", Category::Strength, Difficulty::Beginner),
            exercise("plank", Category::Bodyweight, Difficulty::Beginner),
            contraindicated(
                exercise("squats", Category::Strength, Difficulty::Intermediate),
                &["knee"],
            ),
        ]
    }

    #[test]
    fn test_parse_plain_json() {
        let plan = parse_plan_response(PLAN_JSON, &Goal::MuscleGain).unwrap();

        assert_eq!(plan.name, "Strong Start");
        assert_eq!(plan.description, "Three days a week");
        assert_eq!(plan.exercises.len(), 2);
        assert_eq!(plan.exercises[1].reps, None);
        assert_eq!(plan.exercises[1].rest_seconds, 45);
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{}\n```", PLAN_JSON);
        let bare_fence = format!("```\n{}\n```", PLAN_JSON);
        let indented = format!("  \n```json\n{}\n```\n", PLAN_JSON);
        let unterminated = format!("```json\n{}", PLAN_JSON);

        for response in [fenced, bare_fence, indented, unterminated] {
            let plan = parse_plan_response(&response, &Goal::MuscleGain).unwrap();
            assert_eq!(plan.exercises[0].exercise_id, "lat-pulldown");
        }
    }

    #[test]
    fn test_backticks_inside_unfenced_json_are_kept() {
        let response = r#"{"name": "Plan", "exercises": [{"exercise_id": "plank", "sets": 3, "notes": "see ```cues``` below"}]}"#;

        let plan = parse_plan_response(response, &Goal::Mobility).unwrap();

        assert_eq!(plan.name, "Plan");
        assert_eq!(
            plan.exercises[0].notes.as_deref(),
            Some("see ```cues``` below")
        );
    }

    #[test]
    fn test_backticks_inside_fenced_json_are_kept() {
        let response = "```json\n{\"exercises\": [{\"exercise_id\": \"plank\", \"sets\": 3, \"notes\": \"```\"}]}\n```";

        let plan = parse_plan_response(response, &Goal::Mobility).unwrap();

        assert_eq!(plan.exercises[0].notes.as_deref(), Some("```"));
    }

    #[test]
    fn test_null_rest_seconds_defaults() {
        let plan = parse_plan_response(
            r#"{"exercises": [{"exercise_id": "plank", "sets": 3, "rest_seconds": null}]}"#,
            &Goal::Mobility,
        )
        .unwrap();

        assert_eq!(plan.exercises[0].rest_seconds, 60);
    }

    #[test]
    fn test_missing_name_and_description_use_defaults() {
        let plan = parse_plan_response(
            r#"{"exercises": [{"exercise_id": "plank", "sets": 2}]}"#,
            &Goal::Endurance,
        )
        .unwrap();

        assert_eq!(plan.name, "Training Plan - endurance");
        assert_eq!(plan.description, "");
        assert_eq!(plan.exercises[0].rest_seconds, 60);
    }

    #[test]
    fn test_non_json_is_rejected() {
        let result = parse_plan_response("Sorry, I cannot help with that.", &Goal::Mobility);
        assert!(matches!(result, Err(GenerationFailure::MalformedJson(_))));
    }

    #[test]
    fn test_schema_mismatch_is_rejected() {
        let missing = parse_plan_response(r#"{"name": "Plan"}"#, &Goal::Mobility);
        assert!(matches!(missing, Err(GenerationFailure::Schema(_))));

        let wrong_type = parse_plan_response(
            r#"{"exercises": [{"exercise_id": "plank", "sets": "three"}]}"#,
            &Goal::Mobility,
        );
        assert!(matches!(wrong_type, Err(GenerationFailure::Schema(_))));

        let negative = parse_plan_response(
            r#"{"exercises": [{"exercise_id": "plank", "sets": -1}]}"#,
            &Goal::Mobility,
        );
        assert!(matches!(negative, Err(GenerationFailure::Schema(_))));
    }

    #[test]
    fn test_validate_accepts_known_safe_exercises() {
        let plan = parse_plan_response(PLAN_JSON, &Goal::MuscleGain).unwrap();
        assert_eq!(
            validate_plan(&plan, &catalog(), &HealthProfile::default()),
            Ok(())
        );
    }

    #[test]
    fn test_validate_rejects_unknown_exercise() {
        let plan = parse_plan_response(
            r#"{"exercises": [{"exercise_id": "moon-walk", "sets": 3, "reps": 10}]}"#,
            &Goal::MuscleGain,
        )
        .unwrap();

        assert_eq!(
            validate_plan(&plan, &catalog(), &HealthProfile::default()),
            Err(GenerationFailure::UnknownExercise("moon-walk".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_unsafe_exercise() {
        let response = r#"{"exercises": [
            {"exercise_id": "plank", "sets": 3},
            {"exercise_id": "squats", "sets": 3, "reps": 8}
        ]}"#;
        let plan = parse_plan_response(response, &Goal::MuscleGain).unwrap();
        let health = HealthProfile {
            joint_problems: vec!["knee".to_string()],
            ..Default::default()
        };

        assert_eq!(
            validate_plan(&plan, &catalog(), &health),
            Err(GenerationFailure::UnsafeExercise("squats".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_and_zero_volume_plans() {
        let empty = parse_plan_response(r#"{"exercises": []}"#, &Goal::MuscleGain).unwrap();
        assert_eq!(
            validate_plan(&empty, &catalog(), &HealthProfile::default()),
            Err(GenerationFailure::EmptyPlan)
        );

        let zero_sets = parse_plan_response(
            r#"{"exercises": [{"exercise_id": "plank", "sets": 0}]}"#,
            &Goal::MuscleGain,
        )
        .unwrap();
        assert!(matches!(
            validate_plan(&zero_sets, &catalog(), &HealthProfile::default()),
            Err(GenerationFailure::Schema(_))
        ));
    }
}
