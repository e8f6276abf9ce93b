//! Caller-side input validation
//!
//! The engine itself accepts any well-typed [`UserInput`]. These checks
//! mirror the questionnaire's own constraints so that non-browser callers
//! can fail fast before calculating.

use crate::errors::{InputError, ValidationError};
use crate::meal_plan::quantity::format_decimal;
use crate::models::{Goal, UserInput};

/// Validate display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("é obrigatório".to_string());
    }
    if name.chars().count() > 100 {
        return Err("deve ter no máximo 100 caracteres".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age_years: u32) -> Result<(), String> {
    if age_years < 1 {
        return Err("deve ser de pelo menos 1 ano".to_string());
    }
    if age_years > 120 {
        return Err("deve ser de no máximo 120 anos".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("deve ser um número válido".to_string());
    }
    if weight_kg < 20.0 {
        return Err("deve ser de pelo menos 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("deve ser de no máximo 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("deve ser um número válido".to_string());
    }
    if height_cm < 50.0 {
        return Err("deve ser de pelo menos 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("deve ser de no máximo 300 cm".to_string());
    }
    Ok(())
}

/// Validate the weekly rate against the range offered for `goal`
pub fn validate_weekly_rate(rate_kg: f64, goal: Goal) -> Result<(), String> {
    let Some((min, max)) = goal.weekly_rate_bounds() else {
        return Ok(());
    };
    if rate_kg.is_nan() || rate_kg.is_infinite() {
        return Err("deve ser um número válido".to_string());
    }
    if rate_kg < min || rate_kg > max {
        return Err(format!(
            "deve estar entre {} e {} kg por semana",
            format_decimal(min),
            format_decimal(max)
        ));
    }
    Ok(())
}

/// Validate body fat percentage (exclusive of 0 and 100)
pub fn validate_body_fat(percent: f64) -> Result<(), String> {
    if percent.is_nan() || percent.is_infinite() {
        return Err("deve ser um número válido".to_string());
    }
    if percent <= 0.0 || percent >= 100.0 {
        return Err("deve estar entre 0 e 100".to_string());
    }
    Ok(())
}

/// Validate a body circumference (in cm)
pub fn validate_circumference_cm(value_cm: f64) -> Result<(), String> {
    if value_cm.is_nan() || value_cm.is_infinite() {
        return Err("deve ser um número válido".to_string());
    }
    if value_cm <= 0.0 || value_cm > 300.0 {
        return Err("deve estar entre 0 e 300 cm".to_string());
    }
    Ok(())
}

// ============================================================================
// Whole-input checks
// ============================================================================

/// Fields the form requires before it lets the user continue
pub fn missing_required_fields(input: &UserInput) -> Vec<String> {
    let mut missing = Vec::new();
    if input.name.trim().is_empty() {
        missing.push("name".to_string());
    }
    if input.age == 0 {
        missing.push("age".to_string());
    }
    if input.height == 0.0 {
        missing.push("height".to_string());
    }
    if input.weight == 0.0 {
        missing.push("weight".to_string());
    }
    missing
}

/// Run every field check, collecting all failures
pub fn validate_input(input: &UserInput) -> Result<(), InputError> {
    let mut errors = Vec::new();
    let mut check = |field: &str, result: Result<(), String>| {
        if let Err(message) = result {
            errors.push(ValidationError::new(field, &message));
        }
    };

    check("name", validate_name(&input.name));
    check("age", validate_age(input.age));
    check("height", validate_height_cm(input.height));
    check("weight", validate_weight(input.weight));
    if let Some(target) = input.target_weight {
        check("target_weight", validate_weight(target));
    }
    check("weekly_rate", validate_weekly_rate(input.weekly_rate, input.goal));
    if let Some(body_fat) = input.body_fat {
        check("body_fat", validate_body_fat(body_fat));
    }
    for (field, value) in [("waist", input.waist), ("neck", input.neck), ("hip", input.hip)] {
        if let Some(value) = value {
            check(field, validate_circumference_cm(value));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(InputError(errors))
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Nome",
        "gender" => "Sexo",
        "age" => "Idade",
        "height" => "Altura",
        "weight" => "Peso Atual",
        "target_weight" => "Peso Desejável",
        "weekly_rate" => "Ritmo Semanal",
        "activity_level" => "Nível de Atividade",
        "goal" => "Objetivo",
        "training_time" => "Tempo de Treino",
        "discipline" => "Disciplina",
        "diet_history" => "Histórico de Dietas",
        "body_fat" => "Gordura Corporal",
        "waist" => "Cintura",
        "neck" => "Pescoço",
        "hip" => "Quadril",
        _ => field_name,
    }
}

/// Convert a list of technical field names to user-friendly labels
pub fn get_missing_fields_labels(fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .map(|f| get_field_display_label(f).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use proptest::prelude::*;

    fn valid_input() -> UserInput {
        UserInput {
            name: Name().fake(),
            ..UserInput::default()
        }
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(20.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
        assert!(validate_weight(10.0).is_err());
        assert!(validate_weight(600.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(-10.0).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(30).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(121).is_err());
    }

    #[test]
    fn test_validate_weekly_rate_per_goal() {
        assert!(validate_weekly_rate(1.0, Goal::LoseWeight).is_ok());
        assert!(validate_weekly_rate(0.8, Goal::GainMuscle).is_err());
        assert!(validate_weekly_rate(0.5, Goal::GainMuscle).is_ok());
        assert!(validate_weekly_rate(0.0, Goal::LoseWeight).is_err());
        // Maintenance has no rate to check
        assert!(validate_weekly_rate(20.0, Goal::Maintain).is_ok());
        assert_eq!(
            validate_weekly_rate(2.0, Goal::LoseWeight).unwrap_err(),
            "deve estar entre 0,1 e 1 kg por semana"
        );
    }

    #[test]
    fn test_validate_body_fat() {
        assert!(validate_body_fat(18.0).is_ok());
        assert!(validate_body_fat(0.0).is_err());
        assert!(validate_body_fat(100.0).is_err());
    }

    #[test]
    fn test_default_form_state_with_name_is_valid() {
        assert!(validate_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_validate_input_collects_every_failure() {
        let input = UserInput {
            name: "  ".to_string(),
            age: 0,
            weight: 5.0,
            body_fat: Some(120.0),
            waist: Some(-1.0),
            ..UserInput::default()
        };
        let err = validate_input(&input).unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "age", "weight", "body_fat", "waist"]);
    }

    #[test]
    fn test_missing_required_fields() {
        let input = UserInput {
            age: 0,
            ..UserInput::default()
        };
        let missing = missing_required_fields(&input);
        assert_eq!(missing, vec!["name", "age"]);
        assert_eq!(get_missing_fields_labels(&missing), vec!["Nome", "Idade"]);
        assert!(missing_required_fields(&valid_input()).is_empty());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("weekly_rate"), "Ritmo Semanal");
        assert_eq!(get_field_display_label("body_fat"), "Gordura Corporal");
        assert_eq!(get_field_display_label("target_weight"), "Peso Desejável");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_messages_use_form_locale() {
        let input = UserInput {
            name: String::new(),
            weekly_rate: 0.75,
            goal: Goal::GainMuscle,
            ..UserInput::default()
        };
        let err = validate_input(&input).unwrap_err();
        let messages: Vec<_> = err.errors().iter().map(ValidationError::user_message).collect();
        assert_eq!(
            messages,
            vec![
                "Nome: é obrigatório",
                "Ritmo Semanal: deve estar entre 0,1 e 0,5 kg por semana",
            ]
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight(weight).is_err());
        }

        #[test]
        fn prop_loss_rates_in_range_are_valid(rate in 0.1f64..=1.0) {
            prop_assert!(validate_weekly_rate(rate, Goal::LoseWeight).is_ok());
        }
    }
}
