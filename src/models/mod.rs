pub mod exercise;
pub mod plan;
pub mod profile;
