//! Questionnaire input model
//!
//! A [`UserInput`] is built once the form is complete and is never edited
//! field-by-field afterwards. Wire names match the browser form
//! (`camelCase` fields, snake_case option codes).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ComputeError;

// ============================================================================
// Biometrics
// ============================================================================

/// Sex used by the height/age-based BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Office work, little exercise
    Sedentary,
    /// Light training 1-3 days/week
    LightlyActive,
    /// Moderate training 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard training 6-7 days/week
    VeryActive,
    /// Heavy physical work or athlete
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentário",
            ActivityLevel::LightlyActive => "Levemente Ativo",
            ActivityLevel::ModeratelyActive => "Moderadamente Ativo",
            ActivityLevel::VeryActive => "Muito Ativo",
            ActivityLevel::ExtremelyActive => "Extremamente Ativo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Trabalho de escritório, pouco exercício.",
            ActivityLevel::LightlyActive => "Treino leve 1-3 dias/semana.",
            ActivityLevel::ModeratelyActive => "Treino moderado 3-5 dias/semana.",
            ActivityLevel::VeryActive => "Treino pesado 6-7 dias/semana.",
            ActivityLevel::ExtremelyActive => "Trabalho físico pesado ou atleta.",
        }
    }
}

// ============================================================================
// Goal
// ============================================================================

/// Primary body-composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    LoseWeight,
    Maintain,
    GainMuscle,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseWeight, Goal::Maintain, Goal::GainMuscle];

    /// Protein target in grams per kg of body weight
    pub fn protein_multiplier(&self) -> f64 {
        match self {
            Goal::LoseWeight => 2.0,
            Goal::Maintain => 1.8,
            Goal::GainMuscle => 2.2,
        }
    }

    /// Weekly rate range (kg/week) the form offers for this goal.
    ///
    /// `None` for maintenance, where no rate is asked.
    pub fn weekly_rate_bounds(&self) -> Option<(f64, f64)> {
        match self {
            Goal::LoseWeight => Some((0.1, 1.0)),
            Goal::Maintain => None,
            Goal::GainMuscle => Some((0.1, 0.5)),
        }
    }

    /// Rate preselected when the goal is chosen
    pub fn default_weekly_rate(&self) -> f64 {
        match self {
            Goal::GainMuscle => 0.25,
            Goal::LoseWeight | Goal::Maintain => 0.5,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::Maintain => "maintain",
            Goal::GainMuscle => "gain_muscle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "Emagrecer",
            Goal::Maintain => "Manter Peso",
            Goal::GainMuscle => "Ganhar Massa",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "Perder gordura de forma saudável.",
            Goal::Maintain => "Manter a composição corporal atual.",
            Goal::GainMuscle => "Hipertrofia e ganho de força.",
        }
    }
}

// ============================================================================
// Behavioral inputs
// ============================================================================

/// Time available per training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrainingTime {
    #[serde(rename = "under_30")]
    Under30,
    #[serde(rename = "30_45")]
    Between30And45,
    #[default]
    #[serde(rename = "45_60")]
    Between45And60,
    #[serde(rename = "over_60")]
    Over60,
}

impl TrainingTime {
    pub const ALL: [TrainingTime; 4] = [
        TrainingTime::Under30,
        TrainingTime::Between30And45,
        TrainingTime::Between45And60,
        TrainingTime::Over60,
    ];

    /// Less than 45 minutes per session
    pub fn is_short(&self) -> bool {
        matches!(self, TrainingTime::Under30 | TrainingTime::Between30And45)
    }

    pub fn code(&self) -> &'static str {
        match self {
            TrainingTime::Under30 => "under_30",
            TrainingTime::Between30And45 => "30_45",
            TrainingTime::Between45And60 => "45_60",
            TrainingTime::Over60 => "over_60",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingTime::Under30 => "Menos de 30 min",
            TrainingTime::Between30And45 => "30 a 45 min",
            TrainingTime::Between45And60 => "45 a 60 min",
            TrainingTime::Over60 => "Mais de 60 min",
        }
    }
}

/// Self-reported discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Low,
    #[default]
    Medium,
    High,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Discipline::Low, Discipline::Medium, Discipline::High];

    pub fn code(&self) -> &'static str {
        match self {
            Discipline::Low => "low",
            Discipline::Medium => "medium",
            Discipline::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Low => "Baixa",
            Discipline::Medium => "Média",
            Discipline::High => "Alta",
        }
    }
}

/// Number of past diet attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DietHistory {
    /// First serious attempt
    #[serde(rename = "none")]
    None,
    /// 1 to 2 attempts
    #[serde(rename = "1_2")]
    Few,
    /// 3 to 5 attempts
    #[default]
    #[serde(rename = "3_5")]
    Some,
    /// More than 5 attempts
    #[serde(rename = "over_5")]
    Many,
}

impl DietHistory {
    pub const ALL: [DietHistory; 4] = [
        DietHistory::None,
        DietHistory::Few,
        DietHistory::Some,
        DietHistory::Many,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DietHistory::None => "none",
            DietHistory::Few => "1_2",
            DietHistory::Some => "3_5",
            DietHistory::Many => "over_5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietHistory::None => "Nenhuma",
            DietHistory::Few => "1 a 2",
            DietHistory::Some => "3 a 5",
            DietHistory::Many => "Mais de 5",
        }
    }
}

// Option codes parse from the same strings they serialize to.
macro_rules! impl_option_code {
    ($ty:ty, $field:literal) => {
        impl FromStr for $ty {
            type Err = ComputeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                <$ty>::ALL
                    .into_iter()
                    .find(|option| option.code() == normalized)
                    .ok_or_else(|| ComputeError::unknown_option($field, s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

impl_option_code!(Gender, "gender");
impl_option_code!(ActivityLevel, "activity level");
impl_option_code!(Goal, "goal");
impl_option_code!(TrainingTime, "training time");
impl_option_code!(Discipline, "discipline");
impl_option_code!(DietHistory, "diet history");

// ============================================================================
// User input
// ============================================================================

/// Completed questionnaire, immutable for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// Display only
    #[serde(default)]
    pub name: String,
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: f64,
    /// Current weight in kilograms
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Desired change in kg per week; ignored for maintenance
    pub weekly_rate: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub training_time: TrainingTime,
    pub discipline: Discipline,
    pub diet_history: DietHistory,
    /// Body fat percentage; switches BMR to the lean-mass formula when > 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
}

impl Default for UserInput {
    /// The form's initial state
    fn default() -> Self {
        Self {
            name: String::new(),
            gender: Gender::Male,
            age: 30,
            height: 175.0,
            weight: 80.0,
            target_weight: None,
            weekly_rate: Goal::LoseWeight.default_weekly_rate(),
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::LoseWeight,
            training_time: TrainingTime::Between45And60,
            discipline: Discipline::Medium,
            diet_history: DietHistory::Some,
            body_fat: None,
            waist: None,
            neck: None,
            hip: None,
        }
    }
}

impl UserInput {
    /// Body fat percentage when it should drive the BMR formula
    pub fn known_body_fat(&self) -> Option<f64> {
        self.body_fat.filter(|bf| *bf > 0.0)
    }
}
