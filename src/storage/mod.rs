pub mod catalog;
pub mod plans;
