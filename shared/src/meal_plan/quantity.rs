//! Quantity scaling for meal-plan items
//!
//! Base quantities are calibrated for a 2000 kcal day and scaled linearly.
//! Countable units snap to half units, masses to 10 g.

use serde::{Deserialize, Serialize};

use crate::health_metrics::round_half_up;

/// Calorie level the catalog quantities are written for
pub const REFERENCE_CALORIES: f64 = 2000.0;

/// Smallest rendered amount of a countable unit
pub const MIN_DISCRETE_QTY: f64 = 0.5;

/// Smallest rendered mass in grams
pub const MIN_MASS_GRAMS: f64 = 10.0;

/// Unit attached to a scaled item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Eggs,
    Slices,
    Pieces,
    Spoons,
    Grams,
}

impl Unit {
    /// Label shown after the number
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Eggs => "ovos",
            Unit::Slices => "fatias",
            Unit::Pieces => "unid",
            Unit::Spoons => "colheres",
            Unit::Grams => "g",
        }
    }

    /// Countable units round to half units; everything else is a mass
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Unit::Grams)
    }

    /// Snap a raw amount to this unit's grid
    pub fn round(&self, qty: f64) -> f64 {
        if self.is_discrete() {
            (round_half_up(qty * 2.0) / 2.0).max(MIN_DISCRETE_QTY)
        } else {
            (round_half_up(qty / 10.0) * 10.0).max(MIN_MASS_GRAMS)
        }
    }
}

/// Scale a 2000 kcal base quantity to `calories` and round it
pub fn scale_quantity(base_qty: f64, unit: Unit, calories: i32) -> f64 {
    let factor = f64::from(calories) / REFERENCE_CALORIES;
    unit.round(base_qty * factor)
}

/// Render a quantity with a decimal comma: `1.5` → `"1,5"`, `2.0` → `"2"`
pub fn format_decimal(qty: f64) -> String {
    qty.to_string().replace('.', ",")
}

/// Scaled quantity followed by its unit label, e.g. `"1,5 ovos"`
pub fn format_quantity(base_qty: f64, unit: Unit, calories: i32) -> String {
    let qty = scale_quantity(base_qty, unit, calories);
    format!("{} {}", format_decimal(qty), unit.label())
}
