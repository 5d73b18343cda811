//! Diet and training plan generation service.
//!
//! `POST /gerar-plano` turns a client questionnaire into a prompt, asks the
//! language model for a JSON plan and relays the validated result.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub const SERVICE_NAME: &str = "plan-service";
