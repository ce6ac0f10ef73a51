use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, Responder};
use askama::Template;
use askama_actix::TemplateToResponse;
use validator::Validate;

use crate::core::{ingredient_list, PairingSelector};
use crate::models::{Drink, HealthResponse, SearchQuery};
use crate::services::{CocktailDbClient, MealDbClient};
use crate::templates::{
    DrinkTemplate, ErrorTemplate, IndexTemplate, MealsTemplate, NotFoundTemplate, SearchTemplate,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cocktails: Arc<CocktailDbClient>,
    pub meals: Arc<MealDbClient>,
    pub selector: PairingSelector,
}

/// Configure all page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/search", web::get().to(search_by_name))
        .route("/ingredient", web::get().to(search_by_ingredient))
        .route("/random", web::get().to(random_drink))
        .route("/drink/{id}", web::get().to(drink_detail))
        .route("/meals/{category}", web::get().to(meals_by_category))
        .route("/health", web::get().to(health_check));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Home page: search forms plus the drink category list
///
/// GET /
async fn home(state: web::Data<AppState>) -> impl Responder {
    // A failed category fetch degrades to an empty list; the page still
    // renders its search forms.
    let categories = match state.cocktails.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::warn!("Failed to list drink categories: {}", e);
            vec![]
        }
    };

    IndexTemplate { categories }.to_response()
}

/// Search cocktails by name
///
/// GET /search?q={term}
async fn search_by_name(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    if query.validate().is_err() || query.term().is_empty() {
        return redirect_home();
    }

    let term = query.term();

    tracing::info!("Searching cocktails by name: {}", term);

    match state.cocktails.search_by_name(term).await {
        Ok(drinks) => SearchTemplate::by_name(term, drinks).to_response(),
        Err(e) => {
            tracing::error!("Name search failed for {:?}: {}", term, e);
            error_page("The cocktail search is unavailable right now. Please try again shortly.")
        }
    }
}

/// Search cocktails by ingredient
///
/// GET /ingredient?q={term}
async fn search_by_ingredient(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    if query.validate().is_err() || query.term().is_empty() {
        return redirect_home();
    }

    let term = query.term();

    tracing::info!("Searching cocktails by ingredient: {}", term);

    match state.cocktails.filter_by_ingredient(term).await {
        Ok(drinks) => SearchTemplate::by_ingredient(term, drinks).to_response(),
        Err(e) => {
            tracing::error!("Ingredient search failed for {:?}: {}", term, e);
            error_page("Ingredient search is unavailable right now. Please try again shortly.")
        }
    }
}

/// A random cocktail, rendered with the detail template
///
/// GET /random
async fn random_drink(state: web::Data<AppState>) -> impl Responder {
    match state.cocktails.random_drink().await {
        Ok(drink) => render_drink_page(&state, drink).await,
        Err(e) => {
            tracing::error!("Random drink fetch failed: {}", e);
            error_page("Could not pour a random cocktail right now. Please try again shortly.")
        }
    }
}

/// Cocktail detail page with its food pairing
///
/// GET /drink/{id}
async fn drink_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.cocktails.lookup(&id).await {
        Ok(Some(drink)) => render_drink_page(&state, drink).await,
        Ok(None) => {
            tracing::info!("Unknown drink id: {}", id);
            not_found().await
        }
        Err(e) => {
            tracing::error!("Drink lookup failed for {}: {}", id, e);
            error_page("Could not load that cocktail right now. Please try again shortly.")
        }
    }
}

/// Dishes in a meal category
///
/// GET /meals/{category}
async fn meals_by_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let category = path.into_inner();

    match state.meals.filter_by_category(&category).await {
        Ok(meals) => MealsTemplate { category, meals }.to_response(),
        Err(e) => {
            tracing::error!("Meal category fetch failed for {}: {}", category, e);
            error_page("Could not load dishes for that category right now. Please try again shortly.")
        }
    }
}

/// 404 page for unmatched routes
pub async fn not_found() -> HttpResponse {
    render_with_status(NotFoundTemplate, StatusCode::NOT_FOUND)
}

/// Normalizer -> Selector -> Fetcher, then render the detail template.
/// The pairing degrades to empty rather than failing the page.
async fn render_drink_page(state: &web::Data<AppState>, drink: Drink) -> HttpResponse {
    let ingredients = ingredient_list(&drink);
    let rule = state.selector.select_rule(&ingredients);

    tracing::debug!("Pairing rule for {}: {}", drink.str_drink, rule);

    let pairing = state
        .meals
        .find_pairings(&rule, state.selector.random_source())
        .await;

    DrinkTemplate::new(drink, ingredients, pairing).to_response()
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn error_page(message: &str) -> HttpResponse {
    render_with_status(ErrorTemplate::new(message), StatusCode::INTERNAL_SERVER_ERROR)
}

fn render_with_status<T: Template>(template: T, status: StatusCode) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            tracing::error!("Template render failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_home_is_see_other() {
        let response = redirect_home();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/"
        );
    }

    #[test]
    fn test_error_page_status() {
        let response = error_page("boom");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
