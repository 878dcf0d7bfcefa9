//! Category resolution
//!
//! Combines per-source tags into one canonical category:
//! 1. Known game catalogs force "Game" (their tags are not inspected)
//! 2. Remaining tags are normalized and keyword-mapped; a single distinct
//!    direct match against the canonical set wins outright
//! 3. Ambiguity (zero or several distinct direct matches) falls back to
//!    semantic similarity between the query text and every canonical label
//! 4. A similarity score below the confidence threshold defers to the cheap
//!    game-source signal before giving up with `Others`

use std::collections::BTreeMap;

use crate::category::embedding::{cosine_similarity, Embedder, HashEmbedder};
use crate::category::keyword_map::{map_keyword, title_case};
use crate::category::normalizer::normalize_tag;
use crate::category::Category;

/// Source display names whose entire catalog is games.
///
/// Entries from these sources are treated as the single tag "Game",
/// bypassing normalization and keyword mapping.
pub const GAME_SOURCES: [&str; 3] = ["Gog", "Itch.io", "My Abandonware"];

/// Per-source raw tag lists, keyed by source display name
pub type RawCategories = BTreeMap<String, Vec<String>>;

/// Category resolver with an injected embedding backend
pub struct CategoryResolver {
    embedder: Box<dyn Embedder>,
    confidence_threshold: f32,
}

impl CategoryResolver {
    /// Create a resolver with an explicit embedding backend
    pub fn new(embedder: Box<dyn Embedder>, confidence_threshold: f32) -> Self {
        Self {
            embedder,
            confidence_threshold,
        }
    }

    /// Create a resolver backed by the default feature-hashing embedder
    pub fn with_default_embedder(confidence_threshold: f32) -> Self {
        Self::new(Box::new(HashEmbedder::new()), confidence_threshold)
    }

    /// Select the main category for an application from its per-source tags.
    ///
    /// Purely functional given the inputs and the embedding backend; the only
    /// side effect is diagnostic tracing.
    pub fn select_main_category(&self, app_name: &str, raw_categories: &RawCategories) -> Category {
        let mut game_detected = false;
        let mut all_keywords: Vec<String> = Vec::new();
        let mut direct_matches: Vec<Category> = Vec::new();

        for (source, tags) in raw_categories {
            if GAME_SOURCES.contains(&source.as_str()) {
                // Effective tag list is exactly ["Game"]; the source's own
                // tags are never normalized or mapped
                game_detected = true;
                tracing::debug!(source = %source, "Game catalog source detected");
                continue;
            }

            let normalized: Vec<String> = tags.iter().map(|t| normalize_tag(t)).collect();
            let mapped: Vec<String> = normalized
                .iter()
                .map(|t| title_case(map_keyword(t)))
                .collect();

            tracing::debug!(
                source = %source,
                raw = ?tags,
                normalized = ?normalized,
                mapped = ?mapped,
                "Normalized source tags"
            );

            for tag in &mapped {
                // Direct matches compare against the 26 canonical labels only
                if let Some(category) = Category::ALL
                    .iter()
                    .copied()
                    .find(|c| c.label() == tag.as_str())
                {
                    tracing::debug!(category = %category, "Direct keyword match");
                    if !direct_matches.contains(&category) {
                        direct_matches.push(category);
                    }
                }
            }

            all_keywords.extend(mapped);
        }

        match direct_matches.as_slice() {
            [single] => {
                // Unambiguous keyword signal short-circuits semantic scoring
                tracing::info!(app = %app_name, category = %single, "Single direct match");
                return *single;
            }
            [] => {
                tracing::debug!(app = %app_name, "No direct matches, trying semantic similarity");
            }
            several => {
                tracing::debug!(
                    app = %app_name,
                    candidates = ?several,
                    "Multiple distinct direct matches, deferring to semantic similarity"
                );
            }
        }

        self.semantic_category(app_name, &all_keywords, game_detected)
    }

    /// Semantic-similarity fallback over the canonical category labels
    fn semantic_category(
        &self,
        app_name: &str,
        all_keywords: &[String],
        game_detected: bool,
    ) -> Category {
        if all_keywords.is_empty() {
            // No text signal at all; similarity scoring is meaningless
            let fallback = if game_detected {
                Category::Game
            } else {
                Category::Others
            };
            tracing::info!(app = %app_name, category = %fallback, "No keywords, using fallback");
            return fallback;
        }

        // Deduplicate keywords, keeping first-occurrence order
        let mut unique_keywords: Vec<&str> = Vec::new();
        for keyword in all_keywords {
            if !unique_keywords.contains(&keyword.as_str()) {
                unique_keywords.push(keyword);
            }
        }

        let query_text = format!("{} {}", app_name, unique_keywords.join(" "));
        tracing::debug!(query = %query_text, "Semantic similarity query");

        let query_embedding = self.embedder.embed(&query_text);

        // Argmax over canonical order; strict > keeps the earliest on ties
        let mut best_category = Category::ALL[0];
        let mut best_score = f32::NEG_INFINITY;
        for category in Category::ALL {
            let score = cosine_similarity(&query_embedding, &self.embedder.embed(category.label()));
            tracing::debug!(category = %category, score = score, "Similarity score");
            if score > best_score {
                best_score = score;
                best_category = category;
            }
        }

        if best_score >= self.confidence_threshold {
            tracing::info!(
                app = %app_name,
                category = %best_category,
                confidence = best_score,
                "Semantic match accepted"
            );
            best_category
        } else if game_detected {
            tracing::info!(
                app = %app_name,
                confidence = best_score,
                "Confidence below threshold, falling back to Game"
            );
            Category::Game
        } else {
            tracing::info!(
                app = %app_name,
                confidence = best_score,
                "Confidence below threshold, falling back to Others"
            );
            Category::Others
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Embedder that fails the test if the semantic path is taken
    struct PanicEmbedder;

    impl Embedder for PanicEmbedder {
        fn embed(&self, text: &str) -> Vec<f32> {
            panic!("semantic similarity must not be consulted (embedded {:?})", text);
        }
    }

    /// Embedder returning fixed vectors per exact text, with a default for
    /// everything else
    struct StubEmbedder {
        vectors: HashMap<String, Vec<f32>>,
        default: Vec<f32>,
    }

    impl StubEmbedder {
        fn new(default: Vec<f32>) -> Self {
            Self {
                vectors: HashMap::new(),
                default,
            }
        }

        fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
            self.vectors.insert(text.to_string(), vector);
            self
        }
    }

    impl Embedder for StubEmbedder {
        fn embed(&self, text: &str) -> Vec<f32> {
            self.vectors.get(text).cloned().unwrap_or_else(|| self.default.clone())
        }
    }

    fn raw(entries: &[(&str, &[&str])]) -> RawCategories {
        entries
            .iter()
            .map(|(source, tags)| {
                (
                    source.to_string(),
                    tags.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn single_direct_match_short_circuits_semantic_path() {
        let resolver = CategoryResolver::new(Box::new(PanicEmbedder), 0.3);
        let categories = raw(&[("Snapcraft", &["development"][..])]);

        let result = resolver.select_main_category("VSCode", &categories);
        assert_eq!(result, Category::DeveloperTool);
    }

    #[test]
    fn duplicate_direct_matches_collapse_to_one() {
        // Two sources implying the same category via different keywords still
        // count as a single distinct direct match
        let resolver = CategoryResolver::new(Box::new(PanicEmbedder), 0.3);
        let categories = raw(&[
            ("Snapcraft", &["games"][..]),
            ("Flathub", &["game"][..]),
        ]);

        let result = resolver.select_main_category("0 A.D.", &categories);
        assert_eq!(result, Category::Game);
    }

    #[test]
    fn game_source_forces_game_without_inspecting_tags() {
        let resolver = CategoryResolver::new(Box::new(PanicEmbedder), 0.3);
        // Tag content is arbitrary garbage; the source name alone decides
        let categories = raw(&[("Gog", &["Role-playing", "Adventure"][..])]);

        let result = resolver.select_main_category("Baldur's Gate", &categories);
        assert_eq!(result, Category::Game);
    }

    #[test]
    fn no_keywords_and_no_game_source_yields_others() {
        let resolver = CategoryResolver::new(Box::new(PanicEmbedder), 0.3);
        let result = resolver.select_main_category("mystery-app", &RawCategories::new());
        assert_eq!(result, Category::Others);
    }

    #[test]
    fn multiple_distinct_matches_defer_to_semantic_similarity() {
        // "games" -> Game and "graphic" -> Graphics & Design: two distinct
        // direct matches, so the stubbed semantic path decides
        let query = "Krita Game Graphics & Design";
        let stub = StubEmbedder::new(vec![0.0, 1.0])
            .with(query, vec![1.0, 0.0])
            .with("Graphics & Design", vec![1.0, 0.0]);
        let resolver = CategoryResolver::new(Box::new(stub), 0.3);

        let categories = raw(&[("Snapcraft", &["games", "graphic"][..])]);
        let result = resolver.select_main_category("Krita", &categories);
        assert_eq!(result, Category::GraphicsAndDesign);
    }

    #[test]
    fn threshold_is_inclusive_at_the_boundary() {
        // Craft a score of ~0.3 for exactly one category, then use the
        // computed score itself as the threshold so equality is exact
        let query = "someapp Strategy";
        let query_vec = vec![1.0f32, 0.0];
        let boundary_vec = vec![3.0f32, 9.539_392];
        let score = cosine_similarity(&query_vec, &boundary_vec);
        assert!((score - 0.3).abs() < 1e-5);

        let stub = StubEmbedder::new(vec![0.0, -1.0])
            .with(query, query_vec)
            .with("Entertainment", boundary_vec);
        let resolver = CategoryResolver::new(Box::new(stub), score);

        let categories = raw(&[("Snapcraft", &["strategy"][..])]);
        let result = resolver.select_main_category("someapp", &categories);
        assert_eq!(result, Category::Entertainment);
    }

    #[test]
    fn below_threshold_falls_back_to_others() {
        let query = "someapp Strategy";
        let stub = StubEmbedder::new(vec![0.0, 1.0]).with(query, vec![1.0, 0.0]);
        let resolver = CategoryResolver::new(Box::new(stub), 0.3);

        let categories = raw(&[("Snapcraft", &["strategy"][..])]);
        let result = resolver.select_main_category("someapp", &categories);
        assert_eq!(result, Category::Others);
    }

    #[test]
    fn below_threshold_with_game_source_falls_back_to_game() {
        let query = "someapp Strategy";
        let stub = StubEmbedder::new(vec![0.0, 1.0]).with(query, vec![1.0, 0.0]);
        let resolver = CategoryResolver::new(Box::new(stub), 0.3);

        let categories = raw(&[
            ("Snapcraft", &["strategy"][..]),
            ("Itch.io", &["whatever"][..]),
        ]);
        let result = resolver.select_main_category("someapp", &categories);
        assert_eq!(result, Category::Game);
    }

    #[test]
    fn ties_resolve_to_first_canonical_category() {
        // Every label embeds identically, so all 26 scores are equal;
        // the first category in canonical order must win
        let stub = StubEmbedder::new(vec![1.0, 0.0]);
        let resolver = CategoryResolver::new(Box::new(stub), 0.3);

        let categories = raw(&[("Snapcraft", &["unmappable"][..])]);
        let result = resolver.select_main_category("someapp", &categories);
        assert_eq!(result, Category::ALL[0]);
        assert_eq!(result, Category::Books);
    }

    #[test]
    fn only_game_sources_with_data_yields_game() {
        // Game sources contribute no keywords, so the semantic path is never
        // reached and the game fallback applies
        let resolver = CategoryResolver::new(Box::new(PanicEmbedder), 0.3);
        let categories = raw(&[
            ("Gog", &["RPG"][..]),
            ("My Abandonware", &[][..]),
        ]);

        let result = resolver.select_main_category("Arcanum", &categories);
        assert_eq!(result, Category::Game);
    }
}
