//! Plan returned by the language model and relayed to the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Top-level keys the model must return.
pub const PLAN_KEYS: [&str; 3] = ["dieta", "macros", "treino"];

/// Keys required inside `macros`.
pub const MACRO_KEYS: [&str; 4] = ["proteina_g", "carboidrato_g", "gordura_g", "fibras_g"];

/// Gram amount as the model wrote it: a bare number or a short text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MacroAmount {
    Grams(Number),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(rename = "proteina_g")]
    pub protein_g: MacroAmount,
    #[serde(rename = "carboidrato_g")]
    pub carbohydrate_g: MacroAmount,
    #[serde(rename = "gordura_g")]
    pub fat_g: MacroAmount,
    #[serde(rename = "fibras_g")]
    pub fiber_g: MacroAmount,
    /// Any additional nutrient the model chose to report.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Diet, macros and training plan.
///
/// `dieta` and `treino` are usually prose but are relayed as-is when the
/// model structures them. Unknown top-level keys are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    #[serde(rename = "dieta")]
    pub diet: Value,
    pub macros: Macros,
    #[serde(rename = "treino")]
    pub training: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
