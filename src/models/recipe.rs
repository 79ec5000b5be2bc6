use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A recipe from the fixed catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: u32,
    /// Name of the dish
    pub name: String,
    /// Ingredient names; fixture entries are lower-case by convention
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Creates a new recipe
    pub fn new(id: u32, name: &str, ingredients: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Ingredient names as a set, for overlap scoring
    pub fn ingredient_set(&self) -> HashSet<&str> {
        self.ingredients.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipe() {
        let recipe = Recipe::new(1, "Pasta Carbonara", &["pasta", "eggs"]);
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.name, "Pasta Carbonara");
        assert_eq!(recipe.ingredients, vec!["pasta", "eggs"]);
    }

    #[test]
    fn test_ingredient_set_collapses_duplicates() {
        let recipe = Recipe::new(1, "Test", &["eggs", "eggs", "cheese"]);
        assert_eq!(recipe.ingredient_set().len(), 2);
    }

    #[test]
    fn test_serialization_shape() {
        let recipe = Recipe::new(5, "Berry Smoothie", &["banana", "milk"]);
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 5,
                "name": "Berry Smoothie",
                "ingredients": ["banana", "milk"],
            })
        );
    }
}
