use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::plan::{GeneratedPlan, TrainingPlan};
use crate::storage::plans::PlanStore;

#[derive(Clone)]
pub struct PlanAssembler {
    store: Arc<dyn PlanStore>,
}

impl PlanAssembler {
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        Self { store }
    }

    pub fn stamp(user_id: &str, plan: GeneratedPlan) -> TrainingPlan {
        TrainingPlan {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            created_at: Utc::now().to_rfc3339(),
            plan,
        }
    }

    pub async fn assemble(&self, user_id: &str, plan: GeneratedPlan) -> Result<TrainingPlan> {
        let training_plan = Self::stamp(user_id, plan);
        self.store.persist(training_plan.clone()).await?;

        tracing::info!(
            plan_id = %training_plan.id,
            %user_id,
            is_ai_generated = training_plan.plan.is_ai_generated,
            exercise_count = training_plan.plan.exercises.len(),
            "plan.persisted"
        );

        Ok(training_plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::Goal;
    use crate::storage::plans::InMemoryPlanStore;

    fn generated(is_ai_generated: bool) -> GeneratedPlan {
        GeneratedPlan {
            name: "Personalized Mobility Plan".to_string(),
            description: String::new(),
            goal: Goal::Mobility,
            exercises: vec![],
            days_per_week: 2,
            duration_weeks: 8,
            is_ai_generated,
        }
    }

    #[test]
    fn test_stamp_assigns_fresh_identity() {
        let first = PlanAssembler::stamp("user-1", generated(false));
        let second = PlanAssembler::stamp("user-1", generated(false));

        assert_ne!(first.id, second.id);
        assert_eq!(first.user_id, "user-1");
        let created_at = chrono::DateTime::parse_from_rfc3339(&first.created_at);
        assert!(created_at.is_ok());
        assert_eq!(first.plan, generated(false));
    }

    #[tokio::test]
    async fn test_assemble_persists_with_provenance() {
        let store = Arc::new(InMemoryPlanStore::default());
        let assembler = PlanAssembler::new(store.clone());

        let plan = assembler.assemble("user-1", generated(true)).await.unwrap();

        let stored = store.get("user-1", &plan.id).await.unwrap().unwrap();
        assert!(stored.plan.is_ai_generated);
        assert_eq!(stored, plan);
    }
}
