// Unit tests for Sipside

use sipside::core::{
    ingredient_list, FixedRandom, PairingRule, PairingSelector, SeededRandom,
    DEFAULT_PAIRINGS, MAX_PAIRINGS,
};
use sipside::models::{Drink, DrinkIngredient};
use sipside::services::MealDbClient;
use std::sync::Arc;

fn ingredients(names: &[&str]) -> Vec<DrinkIngredient> {
    names
        .iter()
        .map(|name| DrinkIngredient {
            name: name.to_string(),
            measure: String::new(),
        })
        .collect()
}

fn margarita() -> Drink {
    serde_json::from_str(
        r#"{
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strCategory": "Ordinary Drink",
            "strGlass": "Cocktail glass",
            "strInstructions": "Shake with ice. Strain into glass.",
            "strIngredient1": "Tequila",
            "strIngredient2": "Triple sec",
            "strIngredient3": "Lime juice",
            "strIngredient4": "Salt",
            "strMeasure1": "1 1/2 oz ",
            "strMeasure2": "1/2 oz ",
            "strMeasure3": "1 oz "
        }"#,
    )
    .unwrap()
}

fn meals_body(count: usize) -> String {
    let meals: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{ "idMeal": "{}", "strMeal": "Meal {}", "strMealThumb": null }}"#,
                i, i
            )
        })
        .collect();
    format!(r#"{{ "meals": [{}] }}"#, meals.join(","))
}

#[test]
fn test_normalizer_populated_slots_in_order() {
    let drink = margarita();
    let list = ingredient_list(&drink);

    assert_eq!(list.len(), 4);
    assert_eq!(list[0].name, "Tequila");
    assert_eq!(list[1].name, "Triple sec");
    assert_eq!(list[2].name, "Lime juice");
    assert_eq!(list[0].measure, "1 1/2 oz");
    // Slot 4 has a name but no measure
    assert_eq!(list[3].name, "Salt");
    assert_eq!(list[3].measure, "");
}

#[test]
fn test_normalizer_excludes_unnamed_slots_even_with_measures() {
    let drink: Drink = serde_json::from_str(
        r#"{
            "idDrink": "1",
            "strDrink": "Sparse",
            "strIngredient1": "Gin",
            "strIngredient2": "",
            "strIngredient3": null,
            "strMeasure1": "2 oz",
            "strMeasure2": "1 oz",
            "strMeasure3": "1 oz"
        }"#,
    )
    .unwrap();

    let list = ingredient_list(&drink);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Gin");
}

#[test]
fn test_selector_margarita_stays_in_tequila_group_for_every_seed() {
    let drink_ingredients = ingredients(&["Tequila", "Triple sec", "Lime juice"]);
    let tequila_options = [
        PairingRule::area("Mexican"),
        PairingRule::category("Pork"),
        PairingRule::category("Seafood"),
    ];

    for seed in 0..100 {
        let selector = PairingSelector::new(Arc::new(SeededRandom::new(seed)));
        let rule = selector.select_rule(&drink_ingredients);
        assert!(
            tequila_options.contains(&rule),
            "seed {} escaped the tequila group: {:?}",
            seed,
            rule
        );
    }
}

#[test]
fn test_selector_all_fillers_stay_in_default_pool_for_every_seed() {
    let drink_ingredients = ingredients(&["Ice", "Soda water"]);

    for seed in 0..100 {
        let selector = PairingSelector::new(Arc::new(SeededRandom::new(seed)));
        let rule = selector.select_rule(&drink_ingredients);
        assert!(
            DEFAULT_PAIRINGS.contains(&rule),
            "seed {} escaped the default pool: {:?}",
            seed,
            rule
        );
    }
}

#[test]
fn test_selector_fixed_source_is_exact() {
    let selector = PairingSelector::new(Arc::new(FixedRandom::new(0)));
    let rule = selector.select_rule(&ingredients(&["Tequila", "Triple sec", "Lime juice"]));
    assert_eq!(rule, PairingRule::area("Mexican"));
}

#[test]
fn test_fetcher_truncates_primary_results_to_six() {
    tokio_test::block_on(async {
        let mut server = mockito::Server::new_async().await;

        let primary = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::UrlEncoded("a".into(), "Mexican".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(meals_body(10))
            .expect(1)
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), 5);
        let rng = FixedRandom::new(0);

        let outcome = client
            .find_pairings(&PairingRule::area("Mexican"), &rng)
            .await;

        primary.assert_async().await;
        assert_eq!(outcome.meals.len(), MAX_PAIRINGS);
        assert_eq!(outcome.meals[0].id_meal, "0");
        assert_eq!(outcome.meals[5].id_meal, "5");
        assert_eq!(outcome.rule, PairingRule::area("Mexican"));
    });
}

#[test]
fn test_fetcher_returns_empty_when_primary_fails_and_fallbacks_are_dry() {
    tokio_test::block_on(async {
        let mut server = mockito::Server::new_async().await;

        // The primary rule's lookup blows up. Registered before the generic
        // mock so mockito prefers it for the a=Mexican request (it picks the
        // first still-unsatisfied matching mock in registration order).
        let primary = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::UrlEncoded("a".into(), "Mexican".into()))
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        // Fallback lookups all come back with the API's "no results" shape.
        let fallbacks = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "meals": null }"#)
            .expect(DEFAULT_PAIRINGS.len())
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), 5);
        let rng = FixedRandom::new(0);

        let outcome = client
            .find_pairings(&PairingRule::area("Mexican"), &rng)
            .await;

        primary.assert_async().await;
        fallbacks.assert_async().await;
        assert!(outcome.meals.is_empty());
    });
}

#[test]
fn test_fetcher_falls_back_to_first_rule_with_results() {
    tokio_test::block_on(async {
        let mut server = mockito::Server::new_async().await;

        // Everything is dry except the Italian fallback.
        let _dry = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "meals": null }"#)
            .create_async()
            .await;

        let italian = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::UrlEncoded("a".into(), "Italian".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(meals_body(3))
            .expect(1)
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), 5);
        // Identity permutation: the cascade tries the default pool in
        // declaration order, and Italian is first.
        let rng = FixedRandom::new(0);

        let outcome = client
            .find_pairings(&PairingRule::category("Goat"), &rng)
            .await;

        italian.assert_async().await;
        assert_eq!(outcome.meals.len(), 3);
        assert_eq!(outcome.rule, PairingRule::area("Italian"));
    });
}

#[test]
fn test_fetcher_uses_category_parameter_for_category_rules() {
    tokio_test::block_on(async {
        let mut server = mockito::Server::new_async().await;

        let by_category = server
            .mock("GET", "/filter.php")
            .match_query(mockito::Matcher::UrlEncoded("c".into(), "Seafood".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(meals_body(2))
            .expect(1)
            .create_async()
            .await;

        let client = MealDbClient::new(server.url(), 5);
        let rng = FixedRandom::new(0);

        let outcome = client
            .find_pairings(&PairingRule::category("Seafood"), &rng)
            .await;

        by_category.assert_async().await;
        assert_eq!(outcome.meals.len(), 2);
    });
}
