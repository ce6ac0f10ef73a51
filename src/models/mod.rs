// Model exports
pub mod drink;
pub mod meal;
pub mod requests;

pub use drink::{CategoryRow, Drink, DrinkIngredient, DrinkSummary, DrinksEnvelope};
pub use meal::{MealSummary, MealsEnvelope};
pub use requests::{HealthResponse, SearchQuery};
