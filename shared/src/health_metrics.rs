//! Macro calculator
//!
//! Derives the daily calorie target and macronutrient split from a
//! completed [`UserInput`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no validation, no side effects
//! 2. **Form-compatible rounding**: halves round up, like the browser form
//! 3. **Guarded divisions**: zero rates and zero targets never divide

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Gender, Goal, UserInput};

/// Energy content of 1 kg of body mass (kcal)
pub const KCAL_PER_KG: f64 = 7700.0;

/// Lowest calorie target ever emitted for weight loss
pub const MIN_LOSS_CALORIES: f64 = 1000.0;

/// Fat target in grams per kg of body weight, regardless of goal
pub const FAT_GRAMS_PER_KG: f64 = 0.8;

pub const KCAL_PER_GRAM_PROTEIN: i32 = 4;
pub const KCAL_PER_GRAM_CARBS: i32 = 4;
pub const KCAL_PER_GRAM_FAT: i32 = 9;

/// Round half toward positive infinity, as `Math.round` does
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// BMR estimator used for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmrFormula {
    /// Height/age-based estimator
    #[serde(rename = "Mifflin-St Jeor")]
    MifflinStJeor,
    /// Lean-mass-based estimator, used when body fat is known
    #[serde(rename = "Katch-McArdle")]
    KatchMcArdle,
}

impl BmrFormula {
    pub fn name(&self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "Mifflin-St Jeor",
            BmrFormula::KatchMcArdle => "Katch-McArdle",
        }
    }
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Lean body mass from total weight and body fat percentage
pub fn lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Calculate BMR using Katch-McArdle equation
///
/// BMR = 370 + 21.6 × LBM(kg)
pub fn calculate_bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    370.0 + 21.6 * lean_body_mass(weight_kg, body_fat_percent)
}

/// Pick the estimator for this input and compute BMR with it
pub fn calculate_bmr(input: &UserInput) -> (f64, BmrFormula) {
    match input.known_body_fat() {
        Some(body_fat) => (
            calculate_bmr_katch_mcardle(input.weight, body_fat),
            BmrFormula::KatchMcArdle,
        ),
        None => (
            calculate_bmr_mifflin(input.weight, input.height, input.age, input.gender),
            BmrFormula::MifflinStJeor,
        ),
    }
}

// ============================================================================
// Goal adjustment
// ============================================================================

/// Daily calorie change needed to move `weekly_rate_kg` per week
pub fn daily_calorie_adjustment(weekly_rate_kg: f64) -> i32 {
    round_half_up(weekly_rate_kg * KCAL_PER_KG / 7.0) as i32
}

/// Goal-adjusted calorie target, rounded to whole kcal
pub fn calculate_target_calories(tdee: f64, goal: Goal, daily_adjustment: i32) -> i32 {
    let adjustment = f64::from(daily_adjustment);
    let target = match goal {
        Goal::LoseWeight => (tdee - adjustment).max(MIN_LOSS_CALORIES),
        Goal::GainMuscle => tdee + adjustment,
        Goal::Maintain => tdee,
    };
    round_half_up(target) as i32
}

/// Weeks needed to reach `target_weight` at the chosen rate.
///
/// Zero for maintenance, without a positive target weight, or with a non-positive rate.
pub fn calculate_weeks_to_goal(
    weight_kg: f64,
    target_weight_kg: Option<f64>,
    weekly_rate_kg: f64,
    goal: Goal,
) -> u32 {
    match target_weight_kg.filter(|target| *target > 0.0) {
        Some(target) if goal != Goal::Maintain && weekly_rate_kg > 0.0 => {
            ((target - weight_kg).abs() / weekly_rate_kg).ceil() as u32
        }
        _ => 0,
    }
}

// ============================================================================
// Macro partition
// ============================================================================

/// Macro grams for a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: i32,
    pub fat: i32,
    pub carbs: i32,
}

/// Percent of calories per macro; always sums to 100 for positive targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

/// Split a calorie target into protein, fat and carbohydrate grams.
///
/// Protein and fat are set per kg of body weight; carbs fill what is left.
/// When protein and fat already exceed the target, carbs are zero.
pub fn partition_macros(target_calories: i32, weight_kg: f64, goal: Goal) -> MacroGrams {
    let protein = round_half_up(weight_kg * goal.protein_multiplier()) as i32;
    let fat = round_half_up(weight_kg * FAT_GRAMS_PER_KG) as i32;

    let fixed_calories = protein * KCAL_PER_GRAM_PROTEIN + fat * KCAL_PER_GRAM_FAT;
    let remaining = (target_calories - fixed_calories).max(0);
    let carbs = round_half_up(f64::from(remaining) / f64::from(KCAL_PER_GRAM_CARBS)) as i32;

    MacroGrams {
        protein,
        fat,
        carbs,
    }
}

/// Percentage breakdown; fat takes the residual so the three sum to 100
pub fn macro_percentages(grams: &MacroGrams, target_calories: i32) -> MacroPercentages {
    if target_calories <= 0 {
        return MacroPercentages {
            protein: 0,
            carbs: 0,
            fat: 0,
        };
    }

    let share = |calories: i32| {
        round_half_up(f64::from(calories) / f64::from(target_calories) * 100.0) as i32
    };
    let protein = share(grams.protein * KCAL_PER_GRAM_PROTEIN);
    let carbs = share(grams.carbs * KCAL_PER_GRAM_CARBS);

    MacroPercentages {
        protein,
        carbs,
        fat: 100 - protein - carbs,
    }
}

// ============================================================================
// Full result
// ============================================================================

/// Daily nutrition target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroResult {
    /// Daily calorie target (kcal)
    pub calories: i32,
    /// Grams per day
    pub protein: i32,
    pub fat: i32,
    pub carbs: i32,
    pub protein_perc: i32,
    pub carbs_perc: i32,
    pub fat_perc: i32,
    pub formula_used: BmrFormula,
    pub weeks_to_goal: u32,
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
    /// Daily deficit or surplus applied to TDEE (0 for maintenance)
    pub daily_adjustment: i32,
}

/// Calculate the complete macro target for a questionnaire
pub fn calculate_macros(input: &UserInput) -> MacroResult {
    let (bmr, formula_used) = calculate_bmr(input);
    let tdee = bmr * input.activity_level.multiplier();

    let daily_adjustment = match input.goal {
        Goal::Maintain => 0,
        Goal::LoseWeight | Goal::GainMuscle => daily_calorie_adjustment(input.weekly_rate),
    };
    let calories = calculate_target_calories(tdee, input.goal, daily_adjustment);

    let weeks_to_goal =
        calculate_weeks_to_goal(input.weight, input.target_weight, input.weekly_rate, input.goal);

    let grams = partition_macros(calories, input.weight, input.goal);
    let percentages = macro_percentages(&grams, calories);

    MacroResult {
        calories,
        protein: grams.protein,
        fat: grams.fat,
        carbs: grams.carbs,
        protein_perc: percentages.protein,
        carbs_perc: percentages.carbs,
        fat_perc: percentages.fat,
        formula_used,
        weeks_to_goal,
        bmr,
        tdee,
        daily_adjustment,
    }
}
