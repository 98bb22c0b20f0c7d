// Record types for recipes and meal plan entries.
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_servings() -> f64 {
    1.0
}

/// A stored recipe. `ingredients` and `instructions` are free text with one
/// ingredient line respectively one preparation step per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    /// Serving baseline the ingredient quantities refer to.
    #[serde(default = "default_servings")]
    pub servings: f64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "imageName")]
    pub image_name: Option<String>,
}

impl Recipe {
    pub fn new(title: &str, ingredients: &str, instructions: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            ingredients: ingredients.to_string(),
            instructions: instructions.to_string(),
            servings: default_servings(),
            url: None,
            image_name: None,
        }
    }

    /// Splits the instruction text into trimmed, non-empty preparation steps
    /// for the step-by-step cooking mode.
    pub fn instruction_steps(&self) -> Vec<String> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Assignment of one recipe to one calendar day.
///
/// `recipe_id` is a weak reference: the recipe may have been deleted since
/// the entry was planned, and consumers must skip such entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(rename = "recipeID")]
    pub recipe_id: Uuid,
}

impl MealPlanEntry {
    pub fn new(day: NaiveDate, recipe_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: day.and_time(NaiveTime::MIN).and_utc(),
            recipe_id,
        }
    }

    /// Same-day comparison; the stored time of day is ignored.
    pub fn is_on_day(&self, day: NaiveDate) -> bool {
        self.date.date_naive() == day
    }
}
