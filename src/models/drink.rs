use serde::{Deserialize, Serialize};

/// Full cocktail record as returned by the drink API's search, lookup and
/// random endpoints. Ingredients and measures arrive as 15 numbered field
/// pairs; unused slots are null or empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "idDrink")]
    pub id_drink: String,
    #[serde(rename = "strDrink")]
    pub str_drink: String,
    #[serde(rename = "strCategory", default)]
    pub str_category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub str_alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub str_glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub str_instructions: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    pub str_drink_thumb: Option<String>,
    #[serde(rename = "strIngredient1", default)]
    pub str_ingredient1: Option<String>,
    #[serde(rename = "strIngredient2", default)]
    pub str_ingredient2: Option<String>,
    #[serde(rename = "strIngredient3", default)]
    pub str_ingredient3: Option<String>,
    #[serde(rename = "strIngredient4", default)]
    pub str_ingredient4: Option<String>,
    #[serde(rename = "strIngredient5", default)]
    pub str_ingredient5: Option<String>,
    #[serde(rename = "strIngredient6", default)]
    pub str_ingredient6: Option<String>,
    #[serde(rename = "strIngredient7", default)]
    pub str_ingredient7: Option<String>,
    #[serde(rename = "strIngredient8", default)]
    pub str_ingredient8: Option<String>,
    #[serde(rename = "strIngredient9", default)]
    pub str_ingredient9: Option<String>,
    #[serde(rename = "strIngredient10", default)]
    pub str_ingredient10: Option<String>,
    #[serde(rename = "strIngredient11", default)]
    pub str_ingredient11: Option<String>,
    #[serde(rename = "strIngredient12", default)]
    pub str_ingredient12: Option<String>,
    #[serde(rename = "strIngredient13", default)]
    pub str_ingredient13: Option<String>,
    #[serde(rename = "strIngredient14", default)]
    pub str_ingredient14: Option<String>,
    #[serde(rename = "strIngredient15", default)]
    pub str_ingredient15: Option<String>,
    #[serde(rename = "strMeasure1", default)]
    pub str_measure1: Option<String>,
    #[serde(rename = "strMeasure2", default)]
    pub str_measure2: Option<String>,
    #[serde(rename = "strMeasure3", default)]
    pub str_measure3: Option<String>,
    #[serde(rename = "strMeasure4", default)]
    pub str_measure4: Option<String>,
    #[serde(rename = "strMeasure5", default)]
    pub str_measure5: Option<String>,
    #[serde(rename = "strMeasure6", default)]
    pub str_measure6: Option<String>,
    #[serde(rename = "strMeasure7", default)]
    pub str_measure7: Option<String>,
    #[serde(rename = "strMeasure8", default)]
    pub str_measure8: Option<String>,
    #[serde(rename = "strMeasure9", default)]
    pub str_measure9: Option<String>,
    #[serde(rename = "strMeasure10", default)]
    pub str_measure10: Option<String>,
    #[serde(rename = "strMeasure11", default)]
    pub str_measure11: Option<String>,
    #[serde(rename = "strMeasure12", default)]
    pub str_measure12: Option<String>,
    #[serde(rename = "strMeasure13", default)]
    pub str_measure13: Option<String>,
    #[serde(rename = "strMeasure14", default)]
    pub str_measure14: Option<String>,
    #[serde(rename = "strMeasure15", default)]
    pub str_measure15: Option<String>,
}

impl Drink {
    /// The 15 (ingredient, measure) slot pairs in slot order.
    pub fn ingredient_slots(&self) -> [(Option<&str>, Option<&str>); 15] {
        [
            (self.str_ingredient1.as_deref(), self.str_measure1.as_deref()),
            (self.str_ingredient2.as_deref(), self.str_measure2.as_deref()),
            (self.str_ingredient3.as_deref(), self.str_measure3.as_deref()),
            (self.str_ingredient4.as_deref(), self.str_measure4.as_deref()),
            (self.str_ingredient5.as_deref(), self.str_measure5.as_deref()),
            (self.str_ingredient6.as_deref(), self.str_measure6.as_deref()),
            (self.str_ingredient7.as_deref(), self.str_measure7.as_deref()),
            (self.str_ingredient8.as_deref(), self.str_measure8.as_deref()),
            (self.str_ingredient9.as_deref(), self.str_measure9.as_deref()),
            (self.str_ingredient10.as_deref(), self.str_measure10.as_deref()),
            (self.str_ingredient11.as_deref(), self.str_measure11.as_deref()),
            (self.str_ingredient12.as_deref(), self.str_measure12.as_deref()),
            (self.str_ingredient13.as_deref(), self.str_measure13.as_deref()),
            (self.str_ingredient14.as_deref(), self.str_measure14.as_deref()),
            (self.str_ingredient15.as_deref(), self.str_measure15.as_deref()),
        ]
    }

    /// Helper to get the thumbnail URL, defaulting to an empty string.
    pub fn thumb(&self) -> &str {
        self.str_drink_thumb.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.str_category.as_deref().unwrap_or("")
    }

    pub fn alcoholic(&self) -> &str {
        self.str_alcoholic.as_deref().unwrap_or("")
    }

    pub fn glass(&self) -> &str {
        self.str_glass.as_deref().unwrap_or("")
    }

    pub fn instructions(&self) -> &str {
        self.str_instructions.as_deref().unwrap_or("")
    }
}

/// One flattened ingredient line: the name plus its (possibly empty)
/// measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkIngredient {
    pub name: String,
    pub measure: String,
}

/// Compact drink shape used on results pages and returned by the filter
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkSummary {
    #[serde(rename = "idDrink")]
    pub id_drink: String,
    #[serde(rename = "strDrink")]
    pub str_drink: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub str_drink_thumb: Option<String>,
}

impl DrinkSummary {
    pub fn thumb(&self) -> &str {
        self.str_drink_thumb.as_deref().unwrap_or("")
    }
}

/// Envelope for every drink API response: `{ "drinks": [...] }` with null
/// standing in for "no results".
#[derive(Debug, Clone, Deserialize)]
pub struct DrinksEnvelope<T> {
    pub drinks: Option<Vec<T>>,
}

/// Row of the category list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    #[serde(rename = "strCategory")]
    pub str_category: String,
}
