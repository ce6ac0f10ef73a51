use askama::Template;

use crate::core::RuleKind;
use crate::models::{Drink, DrinkIngredient, DrinkSummary, MealSummary};
use crate::services::PairingOutcome;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub categories: Vec<String>,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub heading: String,
    pub drinks: Vec<DrinkSummary>,
}

impl SearchTemplate {
    pub fn by_name(term: &str, drinks: Vec<DrinkSummary>) -> Self {
        Self {
            heading: format!("Cocktails matching \u{201c}{}\u{201d}", term),
            drinks,
        }
    }

    pub fn by_ingredient(term: &str, drinks: Vec<DrinkSummary>) -> Self {
        Self {
            heading: format!("Cocktails made with {}", term),
            drinks,
        }
    }
}

#[derive(Template)]
#[template(path = "drink.html")]
pub struct DrinkTemplate {
    pub drink: Drink,
    pub ingredients: Vec<DrinkIngredient>,
    pub pairing: PairingOutcome,
}

impl DrinkTemplate {
    pub fn new(drink: Drink, ingredients: Vec<DrinkIngredient>, pairing: PairingOutcome) -> Self {
        Self { drink, ingredients, pairing }
    }

    /// Link target for "more like this" when the winning rule is a dish
    /// category; cuisine areas have no browse page.
    fn category_link(&self) -> Option<String> {
        match self.pairing.rule.kind {
            RuleKind::Category => Some(format!("/meals/{}", self.pairing.rule.value)),
            RuleKind::Area => None,
        }
    }

    fn rule_label(&self) -> String {
        self.pairing.rule.to_string()
    }
}

#[derive(Template)]
#[template(path = "meals.html")]
pub struct MealsTemplate {
    pub category: String,
    pub meals: Vec<MealSummary>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

impl ErrorTemplate {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;
