use std::collections::{BTreeMap, BTreeSet};

/// Per-user purchase history: user id mapped to an ordered sequence of
/// purchase events, each a list of item names.
///
/// Backed by a `BTreeMap` so user iteration order is deterministic, which
/// keeps the clustering step reproducible from request to request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseHistory {
    events: BTreeMap<String, Vec<Vec<String>>>,
}

impl PurchaseHistory {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one purchase event for a user
    pub fn record(&mut self, user_id: &str, items: &[&str]) {
        self.events
            .entry(user_id.to_string())
            .or_default()
            .push(items.iter().map(|i| i.to_string()).collect());
    }

    /// Whether the user appears in the history
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.events.contains_key(user_id)
    }

    /// User ids in lexicographic order
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Number of known users
    pub fn user_count(&self) -> usize {
        self.events.len()
    }

    /// The set of distinct items a user has ever purchased, ignoring
    /// event boundaries. Unknown users yield an empty set.
    pub fn flattened_items(&self, user_id: &str) -> BTreeSet<String> {
        self.events
            .get(user_id)
            .map(|events| events.iter().flatten().cloned().collect())
            .unwrap_or_default()
    }

    /// Item mapped to the number of purchase events (across all users)
    /// it appears in. Key order doubles as the fixed item ordering used
    /// to build purchase vectors.
    pub fn item_frequencies(&self) -> BTreeMap<String, usize> {
        let mut frequencies = BTreeMap::new();
        for events in self.events.values() {
            for event in events {
                for item in event {
                    *frequencies.entry(item.clone()).or_insert(0) += 1;
                }
            }
        }
        frequencies
    }
}
