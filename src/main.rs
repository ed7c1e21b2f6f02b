use std::sync::Arc;

use crate::api::AppState;
use crate::clients::gemini::GeminiClient;
use crate::clients::llm::CompletionProvider;
use crate::config::Config;
use crate::services::plan_assembler::PlanAssembler;
use crate::services::plan_generation::PlanGenerationService;
use crate::storage::catalog::{ExerciseCatalog, StaticCatalog};
use crate::storage::plans::{InMemoryPlanStore, PlanStore};

mod api;
mod clients;
mod config;
mod errors;
mod models;
mod services;
mod storage;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::from_path(path)?,
        None => StaticCatalog::seeded()?,
    };
    tracing::info!(exercise_count = catalog.exercises().len(), "catalog.loaded");
    let catalog: Arc<dyn ExerciseCatalog> = Arc::new(catalog);

    let llm: Option<Arc<dyn CompletionProvider>> = match &config.gemini_api_key {
        Some(api_key) => {
            let client: Arc<dyn CompletionProvider> = Arc::new(GeminiClient::new(
                api_key.clone(),
                config.gemini_model.clone(),
            )?);
            tracing::info!(model = %config.gemini_model, "llm.enabled");
            Some(client)
        }
        None => {
            tracing::warn!("llm.disabled");
            None
        }
    };

    let plan_store: Arc<dyn PlanStore> = Arc::new(InMemoryPlanStore::default());
    let plan_service = PlanGenerationService::new(catalog.clone(), llm, config.llm_timeout);
    let plan_assembler = PlanAssembler::new(plan_store.clone());

    let state = AppState {
        config: config.clone(),
        catalog,
        plan_store,
        plan_service,
        plan_assembler,
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
