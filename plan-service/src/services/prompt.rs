//! Renders a [`ClientProfile`] into the instruction sent to the model.

use crate::models::{ClientProfile, FieldValue};

/// Answer followed by its unit, or the placeholder alone.
fn with_unit(value: &FieldValue, unit: &str) -> String {
    match value.as_str() {
        Some(v) => format!("{} {}", v, unit),
        None => FieldValue::PLACEHOLDER.to_string(),
    }
}

fn body_fat(profile: &ClientProfile) -> String {
    match profile.body_fat.as_str() {
        Some(v) => format!("{} % ({})", v, profile.body_fat_method),
        None => FieldValue::PLACEHOLDER.to_string(),
    }
}

/// Build the full prompt. Deterministic: the same profile always yields the
/// same text.
pub fn build_prompt(profile: &ClientProfile) -> String {
    format!(
        r#"Você é um nutricionista esportivo e personal trainer de elite.
Seu cliente forneceu os seguintes dados:

== DADOS ==
- Nome: {name}
- Idade: {age}
- Sexo: {sex}
- Objetivo: {goal}
- Altura: {height}
- Peso: {weight}
- IMC: {bmi}
- % Gordura: {body_fat}

== PREFERÊNCIAS ==
- Restrições: {restrictions}
- Alergias: {allergies}
- Não come: {disliked}
- Refeições/dia: {meals}
- Custo: {budget}

== TREINO ==
- Nível: {level}
- Local: {location}
- Frequência: {days}
- Lesões: {injuries}

== TAREFA ==
1. Gere dieta detalhada.
2. Gere treino detalhado.
3. Calcule macros totais (proteina, carbo, gordura, fibras).

Responda APENAS em JSON, sem texto antes ou depois, neste formato:
{{
  "dieta": "...",
  "macros": {{ "proteina_g": "..", "carboidrato_g": "..", "gordura_g": "..", "fibras_g": ".." }},
  "treino": "..."
}}
"#,
        name = profile.name,
        age = with_unit(&profile.age, "anos"),
        sex = profile.sex,
        goal = profile.goal,
        height = with_unit(&profile.height_cm, "cm"),
        weight = with_unit(&profile.weight_kg, "kg"),
        bmi = profile.bmi,
        body_fat = body_fat(profile),
        restrictions = profile.restrictions,
        allergies = profile.allergies,
        disliked = profile.disliked_foods,
        meals = profile.meals_per_day,
        budget = profile.diet_budget,
        level = profile.training_level,
        location = profile.training_location,
        days = profile.training_days,
        injuries = profile.injuries,
    )
}
