use std::time::Duration;
use thiserror::Error;

/// Why a model-generated plan was rejected in favour of the rule-based one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationFailure {
    #[error("no language model configured")]
    Unconfigured,

    #[error("language model request failed: {0}")]
    Provider(String),

    #[error("language model did not answer within {0:?}")]
    Timeout(Duration),

    #[error("response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("response does not match the plan schema: {0}")]
    Schema(String),

    #[error("plan references unknown exercise '{0}'")]
    UnknownExercise(String),

    #[error("plan references exercise '{0}' which is unsafe for this user")]
    UnsafeExercise(String),

    #[error("plan contains no exercises")]
    EmptyPlan,
}
