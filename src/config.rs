use std::env;
use std::time::Duration;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub port: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub llm_timeout: Duration,
    pub catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = env::var("API_TOKEN")?;
        let port = env::var("PORT")?;
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let llm_timeout_secs = match env::var("LLM_TIMEOUT_SECS") {
            Ok(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid LLM_TIMEOUT_SECS '{}': {}", value, e))?,
            Err(_) => DEFAULT_LLM_TIMEOUT_SECS,
        };
        let catalog_path = env::var("EXERCISE_CATALOG_PATH").ok();

        Ok(Self {
            api_token,
            port,
            gemini_api_key,
            gemini_model,
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            catalog_path,
        })
    }
}
