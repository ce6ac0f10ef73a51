//! Sipside - server-rendered cocktail browser with food pairing suggestions
//!
//! This library provides the pairing logic behind the Sipside web app:
//! flattening a cocktail's ingredient slots, matching the dominant spirit
//! against a static rule table, and fetching matching dishes from the meal
//! API with a randomized fallback cascade.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{ingredient_list, PairingRule, PairingSelector, RandomSource, RuleKind};
pub use crate::models::{Drink, DrinkIngredient, DrinkSummary, MealSummary};
