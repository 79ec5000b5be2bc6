//! Compiled-in dataset served by the API.
//!
//! The catalog and histories are fixed at build time; `AppState` loads
//! them once at startup and they are never mutated afterwards.

use super::{PurchaseHistory, Recipe};

/// The fixed recipe catalog
pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            1,
            "Pasta Carbonara",
            &["pasta", "eggs", "cheese", "bacon", "pepper"],
        ),
        Recipe::new(
            2,
            "Greek Salad",
            &["lettuce", "tomato", "cucumber", "olive oil", "feta cheese", "olives"],
        ),
        Recipe::new(
            3,
            "Vegetable Omelette",
            &["eggs", "cheese", "bell pepper", "tomato", "onion", "spinach"],
        ),
        Recipe::new(
            4,
            "Chicken Stir Fry",
            &["chicken", "broccoli", "carrot", "bell pepper", "soy sauce", "rice"],
        ),
        Recipe::new(
            5,
            "Berry Smoothie",
            &["banana", "strawberry", "blueberry", "yogurt", "honey", "milk"],
        ),
        Recipe::new(
            6,
            "Mushroom Risotto",
            &["rice", "mushroom", "onion", "garlic", "broth", "parmesan"],
        ),
        Recipe::new(
            7,
            "Beef Tacos",
            &["beef", "tortilla", "tomato", "lettuce", "cheese", "onion", "salsa"],
        ),
    ]
}

/// The fixed per-user purchase history
pub fn purchase_history() -> PurchaseHistory {
    let mut history = PurchaseHistory::new();

    let user1_events: [&[&str]; 10] = [
        &["milk", "bread", "eggs", "cheese", "chicken", "potatoes", "onions"],
        &["milk", "cereal", "banana", "coffee", "sugar"],
        &["bread", "butter", "jam", "eggs", "bacon"],
        &["chicken", "broccoli", "rice", "soy sauce", "garlic"],
        &["milk", "bread", "coffee", "cereal", "banana"],
        &["pasta", "tomato sauce", "ground beef", "cheese", "onions", "garlic"],
        &["milk", "eggs", "cheese", "potatoes", "chicken", "carrots"],
        &["bread", "peanut butter", "jam", "banana", "milk"],
        &["rice", "beans", "cheese", "salsa", "tortillas"],
        &["milk", "bread", "eggs", "butter", "bacon", "potatoes"],
    ];
    for event in user1_events {
        history.record("user1", event);
    }

    let user2_events: [&[&str]; 5] = [
        &["rice", "beans", "tomato", "onion", "cilantro", "chicken"],
        &["pasta", "tomato sauce", "cheese", "garlic bread"],
        &["lettuce", "tomato", "cucumber", "avocado", "chicken", "dressing"],
        &["rice", "beans", "avocado", "salsa", "tortillas", "cheese"],
        &["quinoa", "kale", "sweet potato", "chickpeas", "tahini"],
    ];
    for event in user2_events {
        history.record("user2", event);
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recipe_ids_are_unique() {
        let recipes = recipes();
        let ids: HashSet<u32> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_catalog_is_non_empty() {
        assert!(!recipes().is_empty());
    }

    #[test]
    fn test_history_users() {
        let history = purchase_history();
        assert_eq!(history.user_count(), 2);
        assert!(history.contains_user("user1"));
        assert!(history.contains_user("user2"));
    }
}
