use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::Recipe;
use crate::services::{RecipeMatcher, ShoppingPredictor};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    /// Comma-separated ingredient names
    pub ingredients: String,
}

/// Body of a `/recommend` response: the matched recipe, or a no-match
/// message
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Match(Recipe),
    NoMatch { message: String },
}

#[derive(Debug, Deserialize)]
pub struct PredictParams {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub recommended_items: Vec<String>,
}

// Handlers

/// Liveness status with the available endpoints
pub async fn status() -> Json<Value> {
    Json(json!({
        "status": "API is running",
        "endpoints": ["/recommend", "/predict-shopping-list"],
    }))
}

/// Recommends the recipe best matching the supplied ingredients
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Json<RecommendResponse> {
    let matcher = RecipeMatcher::new(state.recipes());
    let response = match matcher.best_match(&params.ingredients) {
        Some(recipe) => {
            tracing::debug!(recipe_id = recipe.id, "Recipe matched");
            RecommendResponse::Match(recipe.clone())
        }
        None => RecommendResponse::NoMatch {
            message: "No recipe matches found".to_string(),
        },
    };
    Json(response)
}

/// Predicts shopping-list items for a user from purchase histories.
///
/// An unknown user produces an error payload rather than a failure
/// status; the endpoint always answers 200.
pub async fn predict_shopping_list(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
) -> Json<ShoppingListResponse> {
    let predictor = ShoppingPredictor::new(state.history());
    let response = match predictor.predict(&params.user_id) {
        Ok(items) => ShoppingListResponse {
            error: None,
            recommended_items: items,
        },
        Err(error) => {
            tracing::info!(user_id = %params.user_id, error = %error, "Prediction rejected");
            ShoppingListResponse {
                error: Some(error.to_string()),
                recommended_items: Vec::new(),
            }
        }
    };
    Json(response)
}
