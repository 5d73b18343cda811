//! HTTP handlers for the plan service.

pub mod health;
pub mod plan;
