//! Combined entry point
//!
//! One call turns a completed questionnaire into macros, meal plans and a
//! behavioral profile. The three parts only share the input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ComputeError;
use crate::health_metrics::{calculate_macros, MacroResult};
use crate::meal_plan::{generate_meal_plans, MealPlan};
use crate::models::UserInput;
use crate::profile::{classify_profile, ProfileResult};

/// Everything the results screen and the exported document display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub macros: MacroResult,
    pub profile: ProfileResult,
    pub meal_plans: [MealPlan; 3],
}

/// Calculate the full result for a questionnaire
pub fn calculate(input: &UserInput) -> CalculationResult {
    let macros = calculate_macros(input);
    let meal_plans = generate_meal_plans(macros.calories);
    let profile = classify_profile(input.discipline, input.diet_history, input.training_time);

    debug!(
        formula = %macros.formula_used,
        calories = macros.calories,
        weeks_to_goal = macros.weeks_to_goal,
        profile = ?profile.kind,
        "Calculated nutrition plan"
    );

    CalculationResult {
        macros,
        profile,
        meal_plans,
    }
}

/// Decode a JSON questionnaire, calculate, and encode the result as JSON
pub fn calculate_json(input_json: &str) -> Result<String, ComputeError> {
    let input: UserInput = serde_json::from_str(input_json)?;
    Ok(serde_json::to_string(&calculate(&input))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::BmrFormula;
    use crate::models::{DietHistory, Discipline, Goal, TrainingTime};
    use crate::profile::ProfileKind;

    #[test]
    fn test_calculate_bundles_all_parts() {
        let input = UserInput {
            name: "Carlos".to_string(),
            target_weight: Some(72.0),
            ..UserInput::default()
        };
        let result = calculate(&input);

        assert_eq!(result.macros.calories, 2161);
        assert_eq!(result.macros.weeks_to_goal, 16);
        assert_eq!(result.macros.formula_used, BmrFormula::MifflinStJeor);
        assert_eq!(result.profile.kind, ProfileKind::CommittedEvolution);
        assert_eq!(
            result.meal_plans[0].meals.breakfast.items[0],
            "2 ovos mexidos ou cozidos"
        );
    }

    #[test]
    fn test_meal_plans_follow_calorie_target() {
        let input = UserInput {
            goal: Goal::LoseWeight,
            weekly_rate: 20.0,
            ..UserInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.macros.calories, 1000);
        assert_eq!(result.meal_plans, generate_meal_plans(1000));
    }

    #[test]
    fn test_name_has_no_effect() {
        let a = calculate(&UserInput {
            name: "A".to_string(),
            ..UserInput::default()
        });
        let b = calculate(&UserInput {
            name: "Someone Else".to_string(),
            ..UserInput::default()
        });
        assert_eq!(a, b);
    }

    #[test]
    fn test_calculate_json_uses_form_field_names() {
        let input = UserInput {
            discipline: Discipline::High,
            diet_history: DietHistory::None,
            training_time: TrainingTime::Under30,
            body_fat: Some(15.0),
            ..UserInput::default()
        };
        let json = calculate_json(&serde_json::to_string(&input).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["macros"]["formulaUsed"], "Katch-McArdle");
        assert_eq!(value["profile"]["profileName"], "Alta Performance Sustentável");
        assert_eq!(value["mealPlans"].as_array().unwrap().len(), 3);
        assert!(value["macros"]["proteinPerc"].is_i64());
    }

    #[test]
    fn test_calculate_json_rejects_bad_payload() {
        let err = calculate_json(r#"{"gender":"other"}"#).unwrap_err();
        assert!(matches!(err, ComputeError::Json(_)));
    }
}
