//! Extraction of the plan JSON from free-text model output.
//!
//! The model is asked for bare JSON but may still wrap it in prose or code
//! fences. The candidate payload is the span from the first `{` to the last
//! `}`; this favours recall over precision and assumes a single object.

use crate::error::PlanError;
use crate::models::plan::{MACRO_KEYS, PLAN_KEYS};
use crate::models::GeneratedPlan;
use serde_json::Value;

/// Greedy brace extraction: first `{` through last `}`, inclusive.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Parse and validate a plan out of raw model text.
pub fn extract_plan(raw: &str) -> Result<GeneratedPlan, PlanError> {
    let candidate = extract_json_object(raw)
        .ok_or_else(|| PlanError::MalformedResponse("no JSON object found".to_string()))?;

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| PlanError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    check_schema(&value)?;

    serde_json::from_value(value).map_err(|e| PlanError::SchemaViolation(e.to_string()))
}

fn is_absent(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_null)
}

/// Required keys must be present and non-null; `macros` must be an object.
fn check_schema(value: &Value) -> Result<(), PlanError> {
    let Some(object) = value.as_object() else {
        return Err(PlanError::MalformedResponse(
            "payload is not a JSON object".to_string(),
        ));
    };

    if let Some(key) = PLAN_KEYS.iter().find(|key| is_absent(object.get(**key))) {
        return Err(PlanError::SchemaViolation((*key).to_string()));
    }

    let macros = object
        .get("macros")
        .and_then(Value::as_object)
        .ok_or_else(|| PlanError::SchemaViolation("macros".to_string()))?;

    if let Some(key) = MACRO_KEYS.iter().find(|key| is_absent(macros.get(**key))) {
        return Err(PlanError::SchemaViolation(format!("macros.{}", key)));
    }

    Ok(())
}
