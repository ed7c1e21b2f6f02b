use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::plan::TrainingPlan;

#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn persist(&self, plan: TrainingPlan) -> Result<String>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<TrainingPlan>>;
    async fn get(&self, user_id: &str, plan_id: &str) -> Result<Option<TrainingPlan>>;
}

#[derive(Default)]
pub struct InMemoryPlanStore {
    plans: Mutex<Vec<TrainingPlan>>,
}

impl InMemoryPlanStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<TrainingPlan>>> {
        self.plans
            .lock()
            .map_err(|_| anyhow::anyhow!("plan store lock poisoned"))
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn persist(&self, plan: TrainingPlan) -> Result<String> {
        let id = plan.id.clone();
        self.lock()?.push(plan);
        Ok(id)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<TrainingPlan>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|plan| plan.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, user_id: &str, plan_id: &str) -> Result<Option<TrainingPlan>> {
        Ok(self
            .lock()?
            .iter()
            .find(|plan| plan.id == plan_id && plan.user_id == user_id)
            .cloned())
    }
}
