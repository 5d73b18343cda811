pub mod extractor;
pub mod planner;
pub mod prompt;
pub mod providers;

pub use extractor::extract_plan;
pub use planner::PlanGenerator;
pub use prompt::build_prompt;
