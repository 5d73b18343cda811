//! Domain models for the plan service.

pub mod plan;
pub mod profile;

pub use plan::{GeneratedPlan, MacroAmount, Macros};
pub use profile::{ClientProfile, FieldValue, MAX_FIELD_CHARS};
