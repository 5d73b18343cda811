//! Client questionnaire submitted to `POST /gerar-plano`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

/// Longest accepted answer, in characters, after rendering.
pub const MAX_FIELD_CHARS: usize = 500;

/// A single questionnaire answer, normalized to text.
///
/// Strings are trimmed, numbers and booleans keep their JSON spelling and
/// arrays are joined with `", "`. Null, blank and absent answers are all
/// treated as missing. Serializes as the rendered text or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValue(Option<String>);

impl FieldValue {
    /// Rendered in place of a missing answer.
    pub const PLACEHOLDER: &'static str = "não informado";

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    fn from_json(value: &Value) -> Self {
        Self(render_json(value))
    }
}

fn render_json(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render_json).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(Self::PLACEHOLDER))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn validate_field(value: &FieldValue) -> Result<(), ValidationError> {
    match value.as_str() {
        Some(text) if text.chars().count() > MAX_FIELD_CHARS => {
            let mut err = ValidationError::new("too_long");
            err.message = Some(Cow::from(format!(
                "must be at most {} characters",
                MAX_FIELD_CHARS
            )));
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Biometric and lifestyle questionnaire.
///
/// Every answer is optional: missing ones are rendered with
/// [`FieldValue::PLACEHOLDER`]. Present answers are length-limited.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ClientProfile {
    #[serde(rename = "nome")]
    #[validate(custom(function = "validate_field"))]
    pub name: FieldValue,

    #[serde(rename = "idade")]
    #[validate(custom(function = "validate_field"))]
    pub age: FieldValue,

    #[serde(rename = "sexo")]
    #[validate(custom(function = "validate_field"))]
    pub sex: FieldValue,

    #[serde(rename = "objetivo")]
    #[validate(custom(function = "validate_field"))]
    pub goal: FieldValue,

    #[serde(rename = "alturaCm")]
    #[validate(custom(function = "validate_field"))]
    pub height_cm: FieldValue,

    #[serde(rename = "pesoKg")]
    #[validate(custom(function = "validate_field"))]
    pub weight_kg: FieldValue,

    #[serde(rename = "imc")]
    #[validate(custom(function = "validate_field"))]
    pub bmi: FieldValue,

    #[serde(rename = "bodyFat")]
    #[validate(custom(function = "validate_field"))]
    pub body_fat: FieldValue,

    #[serde(rename = "metodo_calculo")]
    #[validate(custom(function = "validate_field"))]
    pub body_fat_method: FieldValue,

    #[serde(rename = "restricoes")]
    #[validate(custom(function = "validate_field"))]
    pub restrictions: FieldValue,

    #[serde(rename = "alergias")]
    #[validate(custom(function = "validate_field"))]
    pub allergies: FieldValue,

    #[serde(rename = "alimentos_odiados")]
    #[validate(custom(function = "validate_field"))]
    pub disliked_foods: FieldValue,

    #[serde(rename = "refeicoes")]
    #[validate(custom(function = "validate_field"))]
    pub meals_per_day: FieldValue,

    #[serde(rename = "custo_dieta")]
    #[validate(custom(function = "validate_field"))]
    pub diet_budget: FieldValue,

    #[serde(rename = "nivel_treino")]
    #[validate(custom(function = "validate_field"))]
    pub training_level: FieldValue,

    #[serde(rename = "local_treino")]
    #[validate(custom(function = "validate_field"))]
    pub training_location: FieldValue,

    #[serde(rename = "dias_treino")]
    #[validate(custom(function = "validate_field"))]
    pub training_days: FieldValue,

    #[serde(rename = "lesoes")]
    #[validate(custom(function = "validate_field"))]
    pub injuries: FieldValue,
}

impl ClientProfile {
    /// All answers keyed by their wire name, in questionnaire order.
    pub fn fields(&self) -> [(&'static str, &FieldValue); 18] {
        [
            ("nome", &self.name),
            ("idade", &self.age),
            ("sexo", &self.sex),
            ("objetivo", &self.goal),
            ("alturaCm", &self.height_cm),
            ("pesoKg", &self.weight_kg),
            ("imc", &self.bmi),
            ("bodyFat", &self.body_fat),
            ("metodo_calculo", &self.body_fat_method),
            ("restricoes", &self.restrictions),
            ("alergias", &self.allergies),
            ("alimentos_odiados", &self.disliked_foods),
            ("refeicoes", &self.meals_per_day),
            ("custo_dieta", &self.diet_budget),
            ("nivel_treino", &self.training_level),
            ("local_treino", &self.training_location),
            ("dias_treino", &self.training_days),
            ("lesoes", &self.injuries),
        ]
    }

    /// True when no answer was given at all.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_missing())
    }
}
