// In-memory repositories for recipes and the meal plan.
//
// Each store owns its collection and re-persists it in full after every
// mutation. Persist errors are logged but never surfaced: the UI keeps its
// in-memory state either way and the next successful save catches up.
//
// Stores assume a single logical caller; a concurrent host must wrap each
// store in its own mutual exclusion around read-modify-persist sequences.
use crate::model::{MealPlanEntry, Recipe};
use crate::storage::{MEAL_PLAN_KEY, RECIPES_KEY, Storage};
use crate::week::{start_of_week, week_days};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub struct RecipeStore {
    storage: Storage,
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Loads the stored collection; a missing or unreadable file starts
    /// empty.
    pub fn load(storage: Storage) -> Self {
        let recipes = storage.load_collection(RECIPES_KEY);
        Self { storage, recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Appends a recipe. Id uniqueness is the caller's responsibility.
    pub fn add(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
        self.persist();
    }

    /// Replaces the first stored recipe with a matching id; unknown ids are
    /// silently ignored.
    pub fn update(&mut self, recipe: Recipe) {
        if let Some(idx) = self.recipes.iter().position(|r| r.id == recipe.id) {
            self.recipes[idx] = recipe;
            self.persist();
        }
    }

    /// Removes the recipes at the given ordinal positions (list offsets, not
    /// ids). Out-of-range offsets are ignored.
    pub fn delete(&mut self, offsets: &[usize]) {
        let mut offsets: Vec<usize> = offsets
            .iter()
            .copied()
            .filter(|&idx| idx < self.recipes.len())
            .collect();
        offsets.sort_unstable();
        offsets.dedup();
        for idx in offsets.into_iter().rev() {
            self.recipes.remove(idx);
        }
        self.persist();
    }

    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save_collection(RECIPES_KEY, &self.recipes) {
            log::warn!("failed to persist recipes: {e:#}");
        }
    }
}

pub struct MealPlannerStore {
    storage: Storage,
    entries: Vec<MealPlanEntry>,
}

impl MealPlannerStore {
    /// Loads the stored meal plan; a missing or unreadable file starts
    /// empty.
    pub fn load(storage: Storage) -> Self {
        let entries = storage.load_collection(MEAL_PLAN_KEY);
        Self { storage, entries }
    }

    pub fn entries(&self) -> &[MealPlanEntry] {
        &self.entries
    }

    /// Upsert: any entry already planned for that day is replaced.
    pub fn add_or_update(&mut self, recipe_id: Uuid, day: NaiveDate) {
        self.entries.retain(|e| !e.is_on_day(day));
        self.entries.push(MealPlanEntry::new(day, recipe_id));
        self.persist();
    }

    pub fn remove(&mut self, day: NaiveDate) {
        self.entries.retain(|e| !e.is_on_day(day));
        self.persist();
    }

    pub fn get(&self, day: NaiveDate) -> Option<&MealPlanEntry> {
        self.entries.iter().find(|e| e.is_on_day(day))
    }

    /// Fills the current week with randomly drawn recipes, one per day.
    pub fn auto_generate(&mut self, recipes: &[Recipe]) {
        self.auto_generate_for_week(recipes, start_of_week(Local::now().date_naive()));
    }

    /// Clears the seven-day window starting at `week_start`, then assigns
    /// each day one recipe drawn uniformly at random from `recipes`.
    /// Day-to-day repeats are allowed; an empty recipe list is a no-op.
    pub fn auto_generate_for_week(&mut self, recipes: &[Recipe], week_start: NaiveDate) {
        if recipes.is_empty() {
            return;
        }

        let mut rng = fastrand::Rng::new();
        for day in week_days(week_start) {
            self.remove(day);
        }
        for day in week_days(week_start) {
            let pick = &recipes[rng.usize(..recipes.len())];
            self.add_or_update(pick.id, day);
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save_collection(MEAL_PLAN_KEY, &self.entries) {
            log::warn!("failed to persist meal plan: {e:#}");
        }
    }
}
