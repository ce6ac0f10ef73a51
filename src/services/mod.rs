// Service exports
pub mod cocktaildb;
pub mod mealdb;

pub use cocktaildb::{CocktailDbClient, CocktailDbError};
pub use mealdb::{MealDbClient, MealDbError, PairingOutcome};
