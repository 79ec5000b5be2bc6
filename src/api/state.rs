use std::sync::Arc;

use crate::models::{fixtures, PurchaseHistory, Recipe};

/// Shared application state holding the compiled-in dataset.
///
/// Built once at startup and never mutated afterwards, so handlers share
/// it through a plain `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Dataset>,
}

struct Dataset {
    recipes: Vec<Recipe>,
    history: PurchaseHistory,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the state from the compiled-in fixtures
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Dataset {
                recipes: fixtures::recipes(),
                history: fixtures::purchase_history(),
            }),
        }
    }

    /// The recipe catalog, in fixture order
    pub fn recipes(&self) -> &[Recipe] {
        &self.inner.recipes
    }

    /// The per-user purchase history
    pub fn history(&self) -> &PurchaseHistory {
        &self.inner.history
    }
}
