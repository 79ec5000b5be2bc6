use std::collections::HashSet;

use crate::models::Recipe;

/// Scores catalog recipes against a caller-supplied ingredient list and
/// picks the best match by overlap.
pub struct RecipeMatcher<'a> {
    recipes: &'a [Recipe],
}

impl<'a> RecipeMatcher<'a> {
    /// Creates a matcher over the recipe catalog
    pub fn new(recipes: &'a [Recipe]) -> Self {
        Self { recipes }
    }

    /// Parses a raw comma-separated ingredient string into a query set.
    ///
    /// Tokens are trimmed and lower-cased; duplicates collapse. Empty
    /// tokens are kept, so an empty input yields a set holding a single
    /// empty string, which matches nothing.
    pub fn parse_query(raw: &str) -> HashSet<String> {
        raw.split(',')
            .map(|token| token.trim().to_lowercase())
            .collect()
    }

    /// Fraction of the recipe's ingredients present in the query set,
    /// in [0, 1]
    pub fn score(recipe: &Recipe, query: &HashSet<String>) -> f64 {
        let ingredients = recipe.ingredient_set();
        if ingredients.is_empty() {
            return 0.0;
        }
        let matching = ingredients
            .iter()
            .filter(|&&ingredient| query.contains(ingredient))
            .count();
        matching as f64 / ingredients.len() as f64
    }

    /// Returns the recipe with the highest overlap score, or `None` when
    /// nothing scores above zero. Ties go to the recipe appearing first
    /// in the catalog.
    pub fn best_match(&self, raw_query: &str) -> Option<&'a Recipe> {
        let query = Self::parse_query(raw_query);

        let mut best: Option<(&'a Recipe, f64)> = None;
        for recipe in self.recipes {
            let score = Self::score(recipe, &query);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((recipe, score));
            }
        }

        best.filter(|(_, score)| *score > 0.0)
            .map(|(recipe, _)| recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_score_bounds() {
        let recipes = fixtures::recipes();
        let query = RecipeMatcher::parse_query("pasta,eggs,lettuce,rice");
        for recipe in &recipes {
            let score = RecipeMatcher::score(recipe, &query);
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_score_is_one_iff_query_covers_recipe() {
        let recipe = Recipe::new(1, "Test", &["pasta", "eggs"]);

        let covering = RecipeMatcher::parse_query("pasta,eggs,extra");
        assert_eq!(RecipeMatcher::score(&recipe, &covering), 1.0);

        let partial = RecipeMatcher::parse_query("pasta");
        assert!(RecipeMatcher::score(&recipe, &partial) < 1.0);
    }

    #[test]
    fn test_exact_match_returns_carbonara() {
        let recipes = fixtures::recipes();
        let matcher = RecipeMatcher::new(&recipes);
        let best = matcher.best_match("pasta,eggs,cheese,bacon,pepper").unwrap();
        assert_eq!(best.id, 1);
        assert_eq!(best.name, "Pasta Carbonara");
    }

    #[test]
    fn test_query_is_normalized() {
        let recipes = fixtures::recipes();
        let matcher = RecipeMatcher::new(&recipes);
        let best = matcher
            .best_match(" PASTA , Eggs ,CHEESE, bacon , pepper")
            .unwrap();
        assert_eq!(best.id, 1);
    }

    #[test]
    fn test_empty_tokens_are_kept() {
        let query = RecipeMatcher::parse_query("pasta,,eggs");
        assert_eq!(query.len(), 3);
        assert!(query.contains(""));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let recipes = fixtures::recipes();
        let matcher = RecipeMatcher::new(&recipes);
        assert!(matcher.best_match("").is_none());
    }

    #[test]
    fn test_unknown_ingredients_match_nothing() {
        let recipes = fixtures::recipes();
        let matcher = RecipeMatcher::new(&recipes);
        assert!(matcher.best_match("dragonfruit,durian").is_none());
    }

    #[test]
    fn test_tie_goes_to_first_catalog_entry() {
        // "tomato" scores 1/6 for both Greek Salad (id 2) and Vegetable
        // Omelette (id 3); the earlier catalog entry wins.
        let recipes = fixtures::recipes();
        let matcher = RecipeMatcher::new(&recipes);
        let best = matcher.best_match("tomato").unwrap();
        assert_eq!(best.id, 2);
    }

    #[test]
    fn test_partial_overlap_picks_highest_fraction() {
        // "eggs,cheese" is 2/5 of Pasta Carbonara but only 2/6 of the
        // Vegetable Omelette.
        let recipes = fixtures::recipes();
        let matcher = RecipeMatcher::new(&recipes);
        let best = matcher.best_match("eggs,cheese").unwrap();
        assert_eq!(best.id, 1);
    }
}
