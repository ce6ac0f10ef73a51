use crate::models::{Drink, DrinkIngredient};

/// Flatten a drink's 15 numbered ingredient/measure slots into an ordered
/// ingredient list.
///
/// A slot contributes an entry iff its name is present and non-blank
/// after trimming; the measure defaults to an empty string when absent.
/// Output order follows slot index ascending.
pub fn ingredient_list(drink: &Drink) -> Vec<DrinkIngredient> {
    drink
        .ingredient_slots()
        .iter()
        .filter_map(|(name, measure)| {
            let name = name.map(str::trim).filter(|n| !n.is_empty())?;
            Some(DrinkIngredient {
                name: name.to_string(),
                measure: measure.map(str::trim).unwrap_or("").to_string(),
            })
        })
        .collect()
}
