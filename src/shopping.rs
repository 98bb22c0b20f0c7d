// Weekly shopping-list aggregation.
use crate::ingredient::{ParsedIngredient, parse_line};
use crate::store::{MealPlannerStore, RecipeStore};
use crate::week::{start_of_week, week_days};
use chrono::{Local, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// Builds the shopping list for the week containing today's local date.
pub fn generate(recipes: &RecipeStore, plan: &MealPlannerStore) -> Vec<String> {
    generate_for_week(recipes, plan, start_of_week(Local::now().date_naive()))
}

/// Builds the shopping list for the seven days starting at `week_start`.
///
/// Quantified ingredient lines are summed per `"name (unit)"` key across all
/// planned recipes; everything else is collected verbatim. Days without a
/// plan entry and entries whose recipe has been deleted are skipped. The
/// list is rebuilt from scratch on every call, sorted ascending by key.
pub fn generate_for_week(
    recipes: &RecipeStore,
    plan: &MealPlannerStore,
    week_start: NaiveDate,
) -> Vec<String> {
    // BTreeMap keeps the final list in lexicographic key order.
    let mut collected: BTreeMap<String, f64> = BTreeMap::new();
    let mut units: HashMap<String, String> = HashMap::new();

    for day in week_days(week_start) {
        let Some(entry) = plan.get(day) else { continue };
        let Some(recipe) = recipes.get(entry.recipe_id) else {
            continue;
        };

        let lines = recipe
            .ingredients
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());
        for line in lines {
            match parse_line(line) {
                ParsedIngredient::Quantified {
                    quantity,
                    unit,
                    name,
                } => {
                    let key = format!("{name} ({unit})");
                    *collected.entry(key.clone()).or_insert(0.0) += quantity;
                    units.insert(key, unit);
                }
                ParsedIngredient::Unparsed(raw) => {
                    // Unparsable lines count pieces rather than a quantity.
                    *collected.entry(raw.clone()).or_insert(0.0) += 1.0;
                    units.insert(raw, String::new());
                }
            }
        }
    }

    collected
        .iter()
        .map(|(key, total)| match units.get(key) {
            Some(unit) if !unit.is_empty() => {
                let name = key.replace(&format!(" ({unit})"), "");
                format!("{total:.1} {unit} {name}")
            }
            _ => key.clone(),
        })
        .collect()
}
