//! Meal plan generator
//!
//! Renders the fixed catalog for a calorie target. The catalog lives in
//! [`catalog`]; quantity rounding lives in [`quantity`].

pub mod catalog;
pub mod quantity;

use serde::{Deserialize, Serialize};

use catalog::{ItemTemplate, MealTemplate, PlanTemplate, PLAN_CATALOG, QTY_TOKEN};
use quantity::format_quantity;

/// A titled meal with its rendered food items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub title: String,
    pub items: Vec<String>,
}

/// The four daily meals of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub snack: Meal,
    pub dinner: Meal,
}

impl Meals {
    /// Meals in serving order
    pub fn in_order(&self) -> [&Meal; 4] {
        [&self.breakfast, &self.lunch, &self.snack, &self.dinner]
    }
}

/// One suggested menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub name: String,
    pub description: String,
    pub meals: Meals,
}

impl ItemTemplate {
    fn render(&self, calories: i32) -> String {
        match self {
            ItemTemplate::Fixed(text) => (*text).to_string(),
            ItemTemplate::Scaled { base, unit, text } => {
                text.replacen(QTY_TOKEN, &format_quantity(*base, *unit, calories), 1)
            }
        }
    }
}

impl MealTemplate {
    fn render(&self, calories: i32) -> Meal {
        Meal {
            title: self.title.to_string(),
            items: self.items.iter().map(|item| item.render(calories)).collect(),
        }
    }
}

impl PlanTemplate {
    fn render(&self, calories: i32) -> MealPlan {
        MealPlan {
            name: self.name.to_string(),
            description: self.description.to_string(),
            meals: Meals {
                breakfast: self.breakfast.render(calories),
                lunch: self.lunch.render(calories),
                snack: self.snack.render(calories),
                dinner: self.dinner.render(calories),
            },
        }
    }
}

/// Generate the three catalog plans scaled to `calories`
pub fn generate_meal_plans(calories: i32) -> [MealPlan; 3] {
    std::array::from_fn(|i| PLAN_CATALOG[i].render(calories))
}
