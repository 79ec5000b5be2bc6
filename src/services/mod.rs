mod kmeans;
mod matcher;
mod shopping;

pub use kmeans::KMeans;
pub use matcher::RecipeMatcher;
pub use shopping::{PredictionError, ShoppingPredictor, MAX_RECOMMENDATIONS};
