use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::clients::llm::{CompletionProvider, CompletionRequest};
use crate::errors::GenerationFailure;
use crate::models::exercise::Exercise;
use crate::models::plan::{GeneratedPlan, PlanContent, PlanRequest};
use crate::models::profile::{FitnessProfile, HealthProfile};
use crate::services::{ai_parser, ai_prompt, rule_based};
use crate::storage::catalog::ExerciseCatalog;

pub const MAX_OUTPUT_TOKENS: u32 = 2000;
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub plan: GeneratedPlan,
    /// Set when the model path was abandoned and the rule engine produced the plan.
    pub fallback_reason: Option<GenerationFailure>,
}

#[derive(Clone)]
pub struct PlanGenerationService {
    catalog: Arc<dyn ExerciseCatalog>,
    llm: Option<Arc<dyn CompletionProvider>>,
    llm_timeout: Duration,
}

impl PlanGenerationService {
    pub fn new(
        catalog: Arc<dyn ExerciseCatalog>,
        llm: Option<Arc<dyn CompletionProvider>>,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            llm,
            llm_timeout,
        }
    }

    /// Tries the language model once and falls back to the rule engine on any
    /// failure. Only a catalog read error is surfaced to the caller.
    pub async fn generate(
        &self,
        request: &PlanRequest,
        profile: &FitnessProfile,
        health: &HealthProfile,
    ) -> Result<GenerationOutcome> {
        let catalog = self.catalog.list_exercises().await?;

        match self
            .generate_with_model(&catalog, request, profile, health)
            .await
        {
            Ok(content) => {
                info!(
                    goal = %request.goal,
                    exercise_count = content.exercises.len(),
                    "plan.ai_generated"
                );
                Ok(GenerationOutcome {
                    plan: GeneratedPlan::from_content(content, request, true),
                    fallback_reason: None,
                })
            }
            Err(failure) => {
                warn!(goal = %request.goal, reason = %failure, "plan.ai_fallback");
                let content =
                    rule_based::generate_rule_based_plan(&catalog, request, profile, health);
                info!(
                    goal = %request.goal,
                    exercise_count = content.exercises.len(),
                    "plan.rule_based_generated"
                );
                Ok(GenerationOutcome {
                    plan: GeneratedPlan::from_content(content, request, false),
                    fallback_reason: Some(failure),
                })
            }
        }
    }

    async fn generate_with_model(
        &self,
        catalog: &[Exercise],
        request: &PlanRequest,
        profile: &FitnessProfile,
        health: &HealthProfile,
    ) -> Result<PlanContent, GenerationFailure> {
        let llm = self.llm.as_ref().ok_or(GenerationFailure::Unconfigured)?;

        let prompt = ai_prompt::build_plan_generation_prompt(request, profile, health, catalog);
        debug!(prompt = %prompt, "llm.prompt");

        let completion = CompletionRequest {
            prompt,
            system_instruction: ai_prompt::SYSTEM_INSTRUCTION.to_string(),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = tokio::time::timeout(self.llm_timeout, llm.complete(&completion))
            .await
            .map_err(|_| GenerationFailure::Timeout(self.llm_timeout))?
            .map_err(|e| GenerationFailure::Provider(format!("{:#}", e)))?;

        debug!(response = %response, "llm.response");

        let content = ai_parser::parse_plan_response(&response, &request.goal)?;
        ai_parser::validate_plan(&content, catalog, health)?;
        Ok(content)
    }
}
