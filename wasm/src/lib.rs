//! NutriPlan WASM Module
//!
//! Browser bindings for the questionnaire. Records cross the boundary as
//! JSON strings using the form's field names.

use nutriplan_shared::{
    calculate_json, classify_profile as classify, daily_calorie_adjustment as adjustment,
    generate_meal_plans as generate, ComputeError, DietHistory, Discipline, Goal, TrainingTime,
};
use wasm_bindgen::prelude::*;

fn to_js_error(err: ComputeError) -> JsError {
    JsError::new(&err.to_string())
}

/// Calculate macros, meal plans and profile from a JSON `UserInput`
#[wasm_bindgen(js_name = calculatePlan)]
pub fn calculate_plan(input_json: &str) -> Result<String, JsError> {
    calculate_json(input_json).map_err(to_js_error)
}

/// Meal plans for a calorie target, as JSON
#[wasm_bindgen(js_name = generateMealPlans)]
pub fn generate_meal_plans(calories: i32) -> Result<String, JsError> {
    meal_plans_json(calories).map_err(to_js_error)
}

/// Behavioral profile from option codes (e.g. `"medium"`, `"over_5"`, `"30_45"`), as JSON
#[wasm_bindgen(js_name = classifyProfile)]
pub fn classify_profile(
    discipline: &str,
    diet_history: &str,
    training_time: &str,
) -> Result<String, JsError> {
    profile_json(discipline, diet_history, training_time).map_err(to_js_error)
}

/// Daily kcal deficit/surplus for a weekly rate, shown while picking the rate
#[wasm_bindgen(js_name = dailyCalorieAdjustment)]
pub fn daily_calorie_adjustment(weekly_rate: f64) -> i32 {
    adjustment(weekly_rate)
}

/// `[min, max, default]` weekly rate for a goal code; empty for maintenance
#[wasm_bindgen(js_name = weeklyRateBounds)]
pub fn weekly_rate_bounds(goal: &str) -> Result<Vec<f64>, JsError> {
    rate_bounds(goal).map_err(to_js_error)
}

fn meal_plans_json(calories: i32) -> Result<String, ComputeError> {
    Ok(serde_json::to_string(&generate(calories))?)
}

fn profile_json(
    discipline: &str,
    diet_history: &str,
    training_time: &str,
) -> Result<String, ComputeError> {
    let discipline: Discipline = discipline.parse()?;
    let diet_history: DietHistory = diet_history.parse()?;
    let training_time: TrainingTime = training_time.parse()?;
    Ok(serde_json::to_string(&classify(
        discipline,
        diet_history,
        training_time,
    ))?)
}

fn rate_bounds(goal: &str) -> Result<Vec<f64>, ComputeError> {
    let goal: Goal = goal.parse()?;
    Ok(match goal.weekly_rate_bounds() {
        Some((min, max)) => vec![min, max, goal.default_weekly_rate()],
        None => Vec::new(),
    })
}
