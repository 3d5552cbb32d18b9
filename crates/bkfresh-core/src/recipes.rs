use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One line of a recipe's shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub cost: String,
    /// Store the cost was priced at, by display name.
    pub store: String,
}

/// A budget recipe priced against this week's deals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub total_cost: String,
    pub servings: u32,
    pub cost_per_serving: String,
    pub prep_time: String,
    pub tags: Vec<String>,
    pub image: String,
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps in the order they are performed.
    pub steps: Vec<String>,
}

#[must_use]
pub fn builtin_recipes() -> &'static [Recipe] {
    &RECIPES
}

#[must_use]
pub fn find_recipe(id: u32) -> Option<&'static Recipe> {
    builtin_recipes().iter().find(|r| r.id == id)
}

fn ingredient(item: &str, cost: &str, store: &str) -> Ingredient {
    Ingredient {
        item: item.to_string(),
        cost: cost.to_string(),
        store: store.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

static RECIPES: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe {
            id: 1,
            name: "Rice & Beans Bowl".to_string(),
            total_cost: "$4.20".to_string(),
            servings: 4,
            cost_per_serving: "$1.05".to_string(),
            prep_time: "30 min".to_string(),
            tags: strings(&["High Protein", "SNAP Friendly"]),
            image: "🍚".to_string(),
            ingredients: vec![
                ingredient("Long grain rice (2 cups)", "$0.60", "ALDI"),
                ingredient("Black beans, 2 cans", "$1.38", "Key Food"),
                ingredient("Onion (1)", "$0.40", "Food Bazaar"),
                ingredient("Garlic, cumin, salt, lime", "$0.82", "Food Bazaar"),
                ingredient("Hot sauce", "$1.00", "ALDI"),
            ],
            steps: strings(&[
                "Rinse rice, combine with 2 cups water, boil then simmer covered 18 min.",
                "Dice onion, mince garlic. Sauté in oil until soft.",
                "Add drained beans, cumin, salt. Cook 8 min.",
                "Squeeze lime over beans. Serve over rice with hot sauce.",
            ]),
        },
        Recipe {
            id: 2,
            name: "Chicken Stir-Fry".to_string(),
            total_cost: "$6.50".to_string(),
            servings: 4,
            cost_per_serving: "$1.63".to_string(),
            prep_time: "25 min".to_string(),
            tags: strings(&["Quick", "SNAP Friendly"]),
            image: "🍗".to_string(),
            ingredients: vec![
                ingredient("Chicken leg quarters (2 lbs)", "$1.58", "Food Bazaar"),
                ingredient("Frozen stir-fry veggies (16oz)", "$1.99", "Trader Joe's"),
                ingredient("Rice (2 cups)", "$0.60", "ALDI"),
                ingredient("Soy sauce, garlic, ginger, oil", "$0.95", "Food Bazaar"),
            ],
            steps: strings(&[
                "Debone chicken legs, cut bite-size. Season with salt & pepper.",
                "Cook rice per package directions.",
                "Heat oil, cook chicken 6–7 min until golden.",
                "Add garlic and ginger 1 min, add frozen veggies, stir-fry 5 min, add soy sauce. Serve over rice.",
            ]),
        },
        Recipe {
            id: 3,
            name: "Pasta e Fagioli".to_string(),
            total_cost: "$3.80".to_string(),
            servings: 4,
            cost_per_serving: "$0.95".to_string(),
            prep_time: "35 min".to_string(),
            tags: strings(&["Vegetarian", "SNAP Friendly"]),
            image: "🍝".to_string(),
            ingredients: vec![
                ingredient("Pasta (8oz)", "$0.45", "ALDI"),
                ingredient("Canned tomatoes (28oz)", "$0.99", "Key Food"),
                ingredient("White beans, 1 can", "$0.69", "Key Food"),
                ingredient("Onion, garlic, seasoning, olive oil", "$1.00", "Food Bazaar"),
                ingredient("Parmesan (optional)", "$0.67", "Trader Joe's"),
            ],
            steps: strings(&[
                "Dice onion, mince garlic. Sauté in olive oil until golden.",
                "Add canned tomatoes, Italian seasoning, salt. Simmer 10 min.",
                "Add 2 cups water and pasta. Cook until al dente.",
                "Stir in drained beans. Cook 5 more min. Top with parmesan.",
            ]),
        },
        Recipe {
            id: 4,
            name: "Plantain & Egg Breakfast".to_string(),
            total_cost: "$2.60".to_string(),
            servings: 2,
            cost_per_serving: "$1.30".to_string(),
            prep_time: "15 min".to_string(),
            tags: strings(&["Quick", "Breakfast"]),
            image: "🥚".to_string(),
            ingredients: vec![
                ingredient("Green plantains (2)", "$0.98", "Bravo"),
                ingredient("Eggs (4)", "$0.83", "Lidl"),
                ingredient("Oil, salt, pepper, hot sauce", "$0.45", "Pantry"),
            ],
            steps: strings(&[
                "Peel plantains, slice into ½ inch rounds.",
                "Heat oil, fry plantains 3 min per side until golden.",
                "Push plantains aside, scramble or fry eggs in same pan.",
                "Season everything, serve with hot sauce.",
            ]),
        },
    ]
});
