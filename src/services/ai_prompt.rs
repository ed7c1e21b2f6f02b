use crate::models::exercise::Exercise;
use crate::models::plan::PlanRequest;
use crate::models::profile::{FitnessProfile, HealthProfile};

pub const SYSTEM_INSTRUCTION: &str = "You are a fitness expert. Respond ONLY with valid JSON.";

/// Only the head of the catalog is offered to the model.
pub const PROMPT_CATALOG_LIMIT: usize = 50;

const UNKNOWN: &str = "unknown";

pub fn format_profile_for_prompt(profile: &FitnessProfile, request: &PlanRequest) -> String {
    let mut output = String::from("USER PROFILE:\n");
    output.push_str(&format!(
        "- Weight: {} kg\n",
        format_optional(profile.weight)
    ));
    output.push_str(&format!(
        "- Height: {} cm\n",
        format_optional(profile.height)
    ));
    output.push_str(&format!("- BMI: {}\n", format_optional(profile.bmi())));
    output.push_str(&format!("- Age: {}\n", format_optional(profile.age)));
    output.push_str(&format!(
        "- Gender: {}\n",
        profile.gender.as_deref().unwrap_or(UNKNOWN)
    ));
    output.push_str(&format!(
        "- Fitness goal: {}\n",
        profile
            .fitness_goal
            .as_deref()
            .unwrap_or(request.goal.as_str())
    ));
    output.push_str(&format!(
        "- Experience level: {}\n",
        profile.experience_level.as_deref().unwrap_or("beginner")
    ));
    output
}

pub fn format_health_for_prompt(health: &HealthProfile) -> String {
    let joint_problems = if health.joint_problems.is_empty() {
        "none".to_string()
    } else {
        health.joint_problems.join(", ")
    };

    let mut output = String::from("HEALTH HISTORY:\n");
    output.push_str(&format!(
        "- Heart conditions: {}\n",
        yes_no(health.heart_conditions)
    ));
    output.push_str(&format!(
        "- High blood pressure: {}\n",
        yes_no(health.high_blood_pressure)
    ));
    output.push_str(&format!("- Diabetes: {}\n", yes_no(health.diabetes)));
    output.push_str(&format!("- Joint problems: {}\n", joint_problems));
    output.push_str(&format!(
        "- Other limitations: {}\n",
        health.physical_limitations.as_deref().unwrap_or("none")
    ));
    output
}

pub fn format_request_for_prompt(request: &PlanRequest) -> String {
    let focus_areas = match &request.focus_areas {
        Some(areas) if !areas.is_empty() => areas.join(", "),
        _ => "general".to_string(),
    };

    format!(
        "PLAN REQUEST:\n- Goal: {}\n- Training days per week: {}\n- Duration: {} weeks\n- Focus areas: {}\n",
        request.goal, request.days_per_week, request.duration_weeks, focus_areas
    )
}

pub fn format_catalog_for_prompt(catalog: &[Exercise]) -> String {
    catalog
        .iter()
        .take(PROMPT_CATALOG_LIMIT)
        .map(|exercise| {
            format!(
                "- {} (ID: {}, category: {}, muscle groups: {}, difficulty: {})\n",
                exercise.name,
                exercise.id,
                exercise.category,
                exercise.muscle_groups.join(", "),
                exercise.difficulty
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

fn format_optional<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn build_plan_generation_prompt(
    request: &PlanRequest,
    profile: &FitnessProfile,
    health: &HealthProfile,
    catalog: &[Exercise],
) -> String {
    format!(
        r#"You are a professional fitness coach. Create a personalized training plan.

{}
{}
{}
AVAILABLE EXERCISES (use ONLY these IDs):
{}
IMPORTANT: Respect every health restriction. With joint problems, avoid exercises that load the affected joints.

OUTPUT FORMAT:
Return ONLY a JSON object with this exact structure and nothing else:
{{"name": "Plan name", "description": "Description", "exercises": [{{"exercise_id": "ID", "sets": 3, "reps": 10, "rest_seconds": 60, "notes": ""}}]}}"#,
        format_profile_for_prompt(profile, request),
        format_health_for_prompt(health),
        format_request_for_prompt(request),
        format_catalog_for_prompt(catalog)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exercise::{Category, Difficulty};
    use crate::models::plan::Goal;
    use crate::test_support::exercise;

    fn request() -> PlanRequest {
        PlanRequest {
            goal: Goal::Mobility,
            days_per_week: 2,
            duration_weeks: 6,
            focus_areas: Some(vec!["back".to_string(), "hips".to_string()]),
        }
    }

    #[test]
    fn test_catalog_is_truncated_to_limit() {
        let catalog: Vec<Exercise> = (0..60)
            .map(|i| format!("ex-{i}"))
            .map(|id| exercise(&id, Category::Flexibility, Difficulty::Beginner))
            .collect();

        let formatted = format_catalog_for_prompt(&catalog);

        assert_eq!(formatted.lines().count(), PROMPT_CATALOG_LIMIT);
        assert!(formatted.contains("ID: ex-49,"));
        assert!(!formatted.contains("ID: ex-50,"));
        assert!(formatted.contains("category: flexibility"));
        assert!(formatted.contains("difficulty: beginner"));
    }

    #[test]
    fn test_health_section() {
        let health = HealthProfile {
            heart_conditions: true,
            joint_problems: vec!["knee".to_string(), "hip".to_string()],
            ..Default::default()
        };

        let formatted = format_health_for_prompt(&health);

        assert!(formatted.contains("- Heart conditions: yes"));
        assert!(formatted.contains("- Diabetes: no"));
        assert!(formatted.contains("- Joint problems: knee, hip"));
        assert!(formatted.contains("- Other limitations: none"));
    }

    #[test]
    fn test_profile_section_falls_back_to_request_goal() {
        let profile = FitnessProfile {
            weight: Some(70.0),
            height: Some(175.0),
            ..Default::default()
        };

        let formatted = format_profile_for_prompt(&profile, &request());

        assert!(formatted.contains("- Weight: 70 kg"));
        assert!(formatted.contains("- BMI: 22.9"));
        assert!(formatted.contains("- Age: unknown"));
        assert!(formatted.contains("- Fitness goal: mobility"));
        assert!(formatted.contains("- Experience level: beginner"));
    }

    #[test]
    fn test_full_prompt_contains_all_sections() {
        let catalog = vec![exercise("cat-cow", Category::Flexibility, Difficulty::Beginner)];

        let prompt = build_plan_generation_prompt(
            &request(),
            &FitnessProfile::default(),
            &HealthProfile::default(),
            &catalog,
        );

        assert!(prompt.contains("USER PROFILE:"));
        assert!(prompt.contains("HEALTH HISTORY:"));
        assert!(prompt.contains("- Focus areas: back, hips"));
        assert!(prompt.contains("ID: cat-cow"));
        assert!(prompt.contains(r#""exercise_id": "ID""#));
    }
}
