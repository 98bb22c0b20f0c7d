// File: tests/shopping_list_tests.rs
use chrono::{Duration, NaiveDate};
use mahlzeit::context::TestContext;
use mahlzeit::model::Recipe;
use mahlzeit::shopping::generate_for_week;
use mahlzeit::storage::Storage;
use mahlzeit::store::{MealPlannerStore, RecipeStore};
use std::sync::Arc;
use uuid::Uuid;

fn make_storage() -> Storage {
    Storage::new(Arc::new(TestContext::new()))
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()
}

fn stores() -> (RecipeStore, MealPlannerStore) {
    let storage = make_storage();
    (
        RecipeStore::load(storage.clone()),
        MealPlannerStore::load(storage),
    )
}

#[test]
fn test_quantities_are_summed_per_name_and_unit() {
    let (mut recipes, mut plan) = stores();
    let kuchen = Recipe::new("Kuchen", "100 g Zucker", "Backen");
    let kekse = Recipe::new("Kekse", "50 g Zucker", "Backen");
    plan.add_or_update(kuchen.id, monday());
    plan.add_or_update(kekse.id, monday() + Duration::days(1));
    recipes.add(kuchen);
    recipes.add(kekse);

    let list = generate_for_week(&recipes, &plan, monday());

    assert_eq!(list, vec!["150.0 g Zucker"]);
}

#[test]
fn test_unparsable_line_stays_a_standalone_entry() {
    let (mut recipes, mut plan) = stores();
    let kuchen = Recipe::new("Kuchen", "100 g Zucker", "Backen");
    let kekse = Recipe::new("Kekse", "50 g Zucker", "Backen");
    let suppe = Recipe::new("Suppe", "Prise Salz", "Kochen");
    plan.add_or_update(kuchen.id, monday());
    plan.add_or_update(kekse.id, monday() + Duration::days(1));
    plan.add_or_update(suppe.id, monday() + Duration::days(2));
    recipes.add(kuchen);
    recipes.add(kekse);
    recipes.add(suppe);

    let list = generate_for_week(&recipes, &plan, monday());

    // Keys sort lexicographically: "Prise Salz" before "Zucker (g)".
    assert_eq!(list, vec!["Prise Salz", "150.0 g Zucker"]);
}

#[test]
fn test_unparsable_line_renders_once_across_days() {
    let (mut recipes, mut plan) = stores();
    let suppe = Recipe::new("Suppe", "Prise Salz", "Kochen");
    plan.add_or_update(suppe.id, monday());
    plan.add_or_update(suppe.id, monday() + Duration::days(1));
    recipes.add(suppe);

    let list = generate_for_week(&recipes, &plan, monday());

    assert_eq!(list, vec!["Prise Salz"]);
}

#[test]
fn test_decimal_comma_aggregates_with_period_form() {
    let (mut recipes, mut plan) = stores();
    let a = Recipe::new("Grießbrei", "0,5 l Milch", "Kochen");
    let b = Recipe::new("Pudding", "0.5 l Milch", "Kochen");
    plan.add_or_update(a.id, monday());
    plan.add_or_update(b.id, monday() + Duration::days(1));
    recipes.add(a);
    recipes.add(b);

    let list = generate_for_week(&recipes, &plan, monday());

    assert_eq!(list, vec!["1.0 l Milch"]);
}

#[test]
fn test_same_name_different_unit_stays_separate() {
    let (mut recipes, mut plan) = stores();
    let a = Recipe::new("Teig", "100 g Zucker", "Backen");
    let b = Recipe::new("Glasur", "2 EL Zucker", "Rühren");
    plan.add_or_update(a.id, monday());
    plan.add_or_update(b.id, monday() + Duration::days(1));
    recipes.add(a);
    recipes.add(b);

    let list = generate_for_week(&recipes, &plan, monday());

    assert_eq!(list, vec!["2.0 EL Zucker", "100.0 g Zucker"]);
}

#[test]
fn test_output_is_sorted_by_key() {
    let (mut recipes, mut plan) = stores();
    let recipe = Recipe::new("Auflauf", "200 g Kartoffeln\n100 g Käse\n1 Zwiebel", "Schichten");
    plan.add_or_update(recipe.id, monday());
    recipes.add(recipe);

    let list = generate_for_week(&recipes, &plan, monday());

    // "1 Zwiebel" has no name part; its key " (Zwiebel)" starts with a
    // space and sorts first, and the rendered line keeps a trailing space.
    assert_eq!(
        list,
        vec!["1.0 Zwiebel ", "200.0 g Kartoffeln", "100.0 g Käse"]
    );
}

#[test]
fn test_unplanned_days_are_skipped() {
    let (mut recipes, mut plan) = stores();
    let recipe = Recipe::new("Salat", "1 Kopf Salat", "Waschen");
    plan.add_or_update(recipe.id, monday() + Duration::days(3));
    recipes.add(recipe);

    let list = generate_for_week(&recipes, &plan, monday());

    assert_eq!(list, vec!["1.0 Kopf Salat"]);
}

#[test]
fn test_dangling_recipe_reference_is_skipped() {
    let (mut recipes, mut plan) = stores();
    let kept = Recipe::new("Kuchen", "100 g Zucker", "Backen");
    plan.add_or_update(kept.id, monday());
    plan.add_or_update(Uuid::new_v4(), monday() + Duration::days(1));
    recipes.add(kept);

    let list = generate_for_week(&recipes, &plan, monday());

    assert_eq!(list, vec!["100.0 g Zucker"]);
}

#[test]
fn test_deleting_a_planned_recipe_degrades_gracefully() {
    let (mut recipes, mut plan) = stores();
    let doomed = Recipe::new("Kuchen", "100 g Zucker", "Backen");
    let kept = Recipe::new("Kekse", "50 g Zucker", "Backen");
    plan.add_or_update(doomed.id, monday());
    plan.add_or_update(kept.id, monday() + Duration::days(1));
    recipes.add(doomed);
    recipes.add(kept);

    recipes.delete(&[0]);

    // The plan entry itself must survive the deletion.
    assert_eq!(plan.entries().len(), 2);
    let list = generate_for_week(&recipes, &plan, monday());
    assert_eq!(list, vec!["50.0 g Zucker"]);
}

#[test]
fn test_entries_outside_the_window_do_not_contribute() {
    let (mut recipes, mut plan) = stores();
    let recipe = Recipe::new("Kuchen", "100 g Zucker", "Backen");
    plan.add_or_update(recipe.id, monday() - Duration::days(1));
    plan.add_or_update(recipe.id, monday() + Duration::days(7));
    recipes.add(recipe);

    let list = generate_for_week(&recipes, &plan, monday());

    assert!(list.is_empty());
}

#[test]
fn test_blank_ingredient_lines_are_ignored() {
    let (mut recipes, mut plan) = stores();
    let recipe = Recipe::new("Brot", "500 g Mehl\n\n  \n1 Würfel Hefe", "Backen");
    plan.add_or_update(recipe.id, monday());
    recipes.add(recipe);

    let list = generate_for_week(&recipes, &plan, monday());

    assert_eq!(list, vec!["1.0 Würfel Hefe", "500.0 g Mehl"]);
}
