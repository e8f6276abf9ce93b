//! NutriPlan Shared Library
//!
//! The calculation engine behind the nutrition questionnaire: macro
//! targets, scaled meal plans and the behavioral profile. Used by the
//! WASM bindings and the command-line runner.

pub mod calculator;
pub mod errors;
pub mod health_metrics;
pub mod meal_plan;
pub mod models;
pub mod profile;
pub mod validation;

// Re-export commonly used items
pub use calculator::{calculate, calculate_json, CalculationResult};
pub use errors::*;
pub use health_metrics::{calculate_macros, daily_calorie_adjustment, BmrFormula, MacroResult};
pub use meal_plan::{generate_meal_plans, Meal, MealPlan, Meals};
pub use models::*;
pub use profile::{classify_profile, ProfileKind, ProfileResult};
