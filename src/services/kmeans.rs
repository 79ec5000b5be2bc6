use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic k-means over dense vectors.
///
/// Lloyd's algorithm with distance-weighted seeding. The same input and
/// seed always produce the same labels, so callers can rely on
/// reproducible partitions.
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    seed: u64,
}

impl KMeans {
    /// Creates a clusterer targeting `k` clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: 300,
            seed: 0,
        }
    }

    /// Sets the seed used for centroid initialization
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Partitions `vectors` and returns one cluster label per vector.
    ///
    /// `k` is clamped to the number of vectors; an empty input yields an
    /// empty label list. All vectors must share the same length.
    pub fn fit(&self, vectors: &[Vec<f64>]) -> Vec<usize> {
        if vectors.is_empty() {
            return Vec::new();
        }
        let k = self.k.max(1).min(vectors.len());
        if k == 1 {
            return vec![0; vectors.len()];
        }

        let mut centroids = self.initial_centroids(vectors, k);
        let mut labels = vec![0usize; vectors.len()];

        for _ in 0..self.max_iterations {
            let next: Vec<usize> = vectors
                .iter()
                .map(|vector| nearest_centroid(vector, &centroids))
                .collect();
            let converged = next == labels;
            labels = next;
            if converged {
                break;
            }

            // Recompute each centroid as the mean of its members
            let dims = vectors[0].len();
            let mut sums = vec![vec![0.0; dims]; k];
            let mut counts = vec![0usize; k];
            for (vector, &label) in vectors.iter().zip(labels.iter()) {
                counts[label] += 1;
                for (slot, value) in sums[label].iter_mut().zip(vector) {
                    *slot += value;
                }
            }
            for (label, centroid) in centroids.iter_mut().enumerate() {
                // An emptied cluster keeps its previous centroid
                if counts[label] > 0 {
                    for (slot, total) in centroid.iter_mut().zip(&sums[label]) {
                        *slot = total / counts[label] as f64;
                    }
                }
            }
        }

        labels
    }

    /// Distance-weighted initialization: the first centroid is sampled
    /// uniformly, later ones proportionally to their squared distance
    /// from the nearest existing centroid.
    fn initial_centroids(&self, vectors: &[Vec<f64>], k: usize) -> Vec<Vec<f64>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut centroids = Vec::with_capacity(k);
        centroids.push(vectors[rng.gen_range(0..vectors.len())].clone());

        while centroids.len() < k {
            let weights: Vec<f64> = vectors
                .iter()
                .map(|vector| {
                    centroids
                        .iter()
                        .map(|centroid| squared_distance(vector, centroid))
                        .fold(f64::MAX, f64::min)
                })
                .collect();

            let total: f64 = weights.iter().sum();
            if total == 0.0 {
                // Every vector already coincides with a centroid
                centroids.push(vectors[rng.gen_range(0..vectors.len())].clone());
                continue;
            }

            let threshold = rng.gen::<f64>() * total;
            let mut cumulative = 0.0;
            let mut chosen = vectors.len() - 1;
            for (index, weight) in weights.iter().enumerate() {
                if *weight <= 0.0 {
                    continue;
                }
                cumulative += weight;
                if cumulative >= threshold {
                    chosen = index;
                    break;
                }
            }
            centroids.push(vectors[chosen].clone());
        }

        centroids
    }
}

/// Index of the centroid nearest to `vector`; ties go to the lower index
fn nearest_centroid(vector: &[f64], centroids: &[Vec<f64>]) -> usize {
    centroids
        .iter()
        .enumerate()
        .map(|(index, centroid)| (index, squared_distance(vector, centroid)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
