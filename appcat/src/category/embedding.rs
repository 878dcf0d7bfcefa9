//! Text embedding and cosine similarity
//!
//! The resolver scores the query text against every canonical category label
//! through an injected `Embedder`, so the scoring backend is an explicit
//! constructor dependency rather than process-wide state. Tests substitute
//! deterministic stubs; the default backend is a feature-hashing embedder
//! that needs no model download.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Sentence-embedding backend
pub trait Embedder: Send + Sync {
    /// Embed a text into a fixed-dimension vector
    fn embed(&self, text: &str) -> Vec<f32>;
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 on dimension mismatch or when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Default embedding dimension
pub const DEFAULT_DIMENSION: usize = 384;

/// Deterministic feature-hashing embedder.
///
/// Hashes word and character-trigram features into a signed fixed-dimension
/// vector and L2-normalizes. Shared vocabulary between texts yields positive
/// cosine similarity; disjoint vocabulary scores near zero. Deterministic
/// within a process run, no network, no model files.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self::with_dimension(DEFAULT_DIMENSION)
    }

    pub fn with_dimension(dimension: usize) -> Self {
        assert!(dimension > 0, "embedding dimension must be non-zero");
        Self { dimension }
    }

    /// Accumulate one hashed feature into the vector (signed hashing)
    fn add_feature(&self, vector: &mut [f32], feature: &str) {
        let mut hasher = DefaultHasher::new();
        feature.hash(&mut hasher);
        let h = hasher.finish();

        let bucket = (h % self.dimension as u64) as usize;
        let sign = if (h >> 63) & 1 == 0 { 1.0 } else { -1.0 };
        vector[bucket] += sign;
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for word in text
            .split(|c: char| !c.is_alphanumeric() && c != '&')
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            self.add_feature(&mut vector, &word);

            // Character trigrams give partial credit to related word forms
            let chars: Vec<char> = word.chars().collect();
            if chars.len() > 3 {
                for gram in chars.windows(3) {
                    let gram: String = gram.iter().collect();
                    self.add_feature(&mut vector, &gram);
                }
            }
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in vector.iter_mut() {
                *v /= norm;
            }
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = vec![0.5, -0.5, 0.7071];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn cosine_handles_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn embeddings_are_deterministic() {
        let embedder = HashEmbedder::new();
        assert_eq!(embedder.embed("strategy game"), embedder.embed("strategy game"));
    }

    #[test]
    fn embeddings_are_unit_norm() {
        let embedder = HashEmbedder::new();
        let v = embedder.embed("photo editor");
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let embedder = HashEmbedder::new();
        let v = embedder.embed("");
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn identical_text_scores_higher_than_unrelated_text() {
        let embedder = HashEmbedder::new();
        let query = embedder.embed("strategy game");
        let same = embedder.embed("strategy game");
        let other = embedder.embed("weather forecast");
        let s_same = cosine_similarity(&query, &same);
        let s_other = cosine_similarity(&query, &other);
        assert!(s_same > s_other);
    }
}
