// Ingredient scaling for the recipe detail view.
use crate::ingredient::split_quantity;

/// Applies `scale_factor` to every quantified line of an ingredient text
/// block and renders the result with one decimal place. Lines without a
/// leading number pass through unchanged, as do line count and order.
///
/// The slider factor is applied exactly as given; `original_servings` only
/// guards degenerate recipes and does not enter the multiplication.
pub fn scale_ingredients(ingredients: &str, original_servings: f64, scale_factor: f64) -> String {
    if original_servings <= 0.0 {
        return ingredients.to_string();
    }

    let scaled: Vec<String> = ingredients
        .lines()
        .map(|line| match split_quantity(line.trim()) {
            Some((quantity, rest)) => format!("{:.1} {}", quantity * scale_factor, rest),
            None => line.to_string(),
        })
        .collect();
    scaled.join("\n")
}
