pub mod ai_parser;
pub mod ai_prompt;
pub mod category_priority;
pub mod exercise_selector;
pub mod plan_assembler;
pub mod plan_generation;
pub mod prescription;
pub mod rule_based;
pub mod safety_filter;
