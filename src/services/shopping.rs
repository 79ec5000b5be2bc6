use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::PurchaseHistory;

use super::KMeans;

/// Maximum number of items returned by a prediction
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Cluster count cap; with fewer users every user is its own cluster
const MAX_CLUSTERS: usize = 2;

/// Fixed seed for centroid initialization so predictions are reproducible
const CLUSTER_SEED: u64 = 42;

/// Error types for shopping-list prediction
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("User {0} not found")]
    UserNotFound(String),
}

/// Predicts shopping-list items for a user from purchase histories.
///
/// Users are partitioned by k-means over binary purchase vectors; items
/// frequently bought by same-cluster peers come first, with globally
/// popular items as the fallback when peers offer nothing new.
pub struct ShoppingPredictor<'a> {
    history: &'a PurchaseHistory,
}

impl<'a> ShoppingPredictor<'a> {
    /// Creates a predictor over the given purchase history
    pub fn new(history: &'a PurchaseHistory) -> Self {
        Self { history }
    }

    /// Returns up to [`MAX_RECOMMENDATIONS`] item names the user has not
    /// purchased yet, most relevant first.
    pub fn predict(&self, user_id: &str) -> Result<Vec<String>, PredictionError> {
        if !self.history.contains_user(user_id) {
            return Err(PredictionError::UserNotFound(user_id.to_string()));
        }

        let frequencies = self.history.item_frequencies();
        let items: Vec<&str> = frequencies.keys().map(String::as_str).collect();
        let users: Vec<&str> = self.history.users().collect();

        // One binary vector per user over the shared item ordering
        let vectors: Vec<Vec<f64>> = users
            .iter()
            .map(|&user| {
                let owned = self.history.flattened_items(user);
                items
                    .iter()
                    .map(|&item| if owned.contains(item) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();

        let k = MAX_CLUSTERS.min(users.len());
        tracing::debug!(
            users = users.len(),
            items = items.len(),
            k,
            "Clustering purchase vectors"
        );
        let labels = KMeans::new(k).with_seed(CLUSTER_SEED).fit(&vectors);

        let target_index = users
            .iter()
            .position(|&user| user == user_id)
            .ok_or_else(|| PredictionError::UserNotFound(user_id.to_string()))?;
        let target_label = labels[target_index];
        let target_items = self.history.flattened_items(user_id);

        // Items owned by same-cluster peers that the target lacks; each
        // peer contributes an item at most once
        let mut peer_counts: BTreeMap<String, usize> = BTreeMap::new();
        for (index, &user) in users.iter().enumerate() {
            if index == target_index || labels[index] != target_label {
                continue;
            }
            for item in self.history.flattened_items(user) {
                if !target_items.contains(&item) {
                    *peer_counts.entry(item).or_insert(0) += 1;
                }
            }
        }

        let mut recommended = rank_descending(peer_counts);

        if recommended.is_empty() {
            tracing::debug!(user_id = %user_id, "No novel peer items, using global popularity");
            let global_counts: BTreeMap<String, usize> = frequencies
                .into_iter()
                .filter(|(item, _)| !target_items.contains(item))
                .collect();
            recommended = rank_descending(global_counts);
        }

        Ok(recommended)
    }
}

/// Orders items by count descending, ties broken lexicographically by
/// item name, capped at [`MAX_RECOMMENDATIONS`]
fn rank_descending(counts: BTreeMap<String, usize>) -> Vec<String> {
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(item, _)| item)
        .collect()
}
