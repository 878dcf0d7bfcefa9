// Cross-module categorization tests.
//
// Exercises the full pipeline (sources -> resolver -> energy label) with
// stub sources and stub embedders. No network access.

use async_trait::async_trait;
use std::collections::HashMap;

use appcat::category::{CategoryResolver, Embedder};
use appcat::pipeline::{NO_SUCH_APP, UNKNOWN_ENERGY};
use appcat::{AppReport, Categorizer, CategorySource};

/// Source returning fixed tags regardless of the queried name
struct StaticSource {
    name: &'static str,
    tags: Option<Vec<String>>,
}

#[async_trait]
impl CategorySource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn get_categories(&self, _app_name: &str) -> Option<Vec<String>> {
        self.tags.clone()
    }
}

fn source(name: &'static str, tags: Option<&[&str]>) -> Box<dyn CategorySource> {
    Box::new(StaticSource {
        name,
        tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
    })
}

/// Embedder that fails the test when the semantic path is consulted
struct PanicEmbedder;

impl Embedder for PanicEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        panic!("semantic path must not run (embedded {:?})", text);
    }
}

/// Embedder with fixed per-text vectors and a default for everything else
struct KeyedEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    default: Vec<f32>,
}

impl Embedder for KeyedEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        self.vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

#[tokio::test]
async fn all_sources_absent_reports_no_such_app() {
    let categorizer = Categorizer::with_parts(
        vec![
            source("Snapcraft", None),
            source("Flathub", None),
            source("Apple Store", None),
        ],
        CategoryResolver::new(Box::new(PanicEmbedder), 0.3),
    );

    let report = categorizer.process_app("nonexistent-app").await;
    assert_eq!(
        report,
        AppReport {
            app_name: "nonexistent-app".to_string(),
            category: NO_SUCH_APP.to_string(),
            energy_label: UNKNOWN_ENERGY.to_string(),
        }
    );
}

#[tokio::test]
async fn agreeing_keyword_sources_short_circuit_to_the_category() {
    // Both sources map to Social Networking through different raw spellings;
    // one distinct direct match, so the embedder must never run
    let categorizer = Categorizer::with_parts(
        vec![
            source("Snapcraft", Some(&["social"])),
            source("Flathub", Some(&["Social"])),
        ],
        CategoryResolver::new(Box::new(PanicEmbedder), 0.3),
    );

    let report = categorizer.process_app("Mastodon").await;
    assert_eq!(report.category, "Social Networking");
    assert_eq!(report.energy_label, "High Energy Consumption");
}

#[tokio::test]
async fn game_catalog_hit_outweighs_low_confidence_semantics() {
    // Flathub supplies an unmappable tag, GOG lists the title. The semantic
    // score stays below threshold, so the game-source heuristic decides.
    let mut vectors = HashMap::new();
    // Query embeds orthogonally to every label
    vectors.insert("Arcanum Retro".to_string(), vec![0.0, 1.0]);
    let embedder = KeyedEmbedder {
        vectors,
        default: vec![1.0, 0.0],
    };

    let categorizer = Categorizer::with_parts(
        vec![
            source("Flathub", Some(&["Retro"])),
            source("Gog", Some(&["Role-playing"])),
        ],
        CategoryResolver::new(Box::new(embedder), 0.3),
    );

    let report = categorizer.process_app("Arcanum").await;
    assert_eq!(report.category, "Game");
    assert_eq!(report.energy_label, "High Energy Consumption");
}

#[tokio::test]
async fn semantic_fallback_resolves_ambiguous_direct_matches() {
    // "games" and "photo" produce two distinct direct matches; the stubbed
    // semantic scores pick Photo & Video
    let mut vectors = HashMap::new();
    vectors.insert(
        "Shotwell Game Photo & Video".to_string(),
        vec![1.0, 0.0],
    );
    vectors.insert("Photo & Video".to_string(), vec![1.0, 0.0]);
    let embedder = KeyedEmbedder {
        vectors,
        default: vec![0.0, 1.0],
    };

    let categorizer = Categorizer::with_parts(
        vec![source("Snapcraft", Some(&["games", "photo"]))],
        CategoryResolver::new(Box::new(embedder), 0.3),
    );

    let report = categorizer.process_app("Shotwell").await;
    assert_eq!(report.category, "Photo & Video");
    assert_eq!(report.energy_label, "High Energy Consumption");
}

#[tokio::test]
async fn unmappable_tags_below_threshold_fall_back_to_others() {
    let embedder = KeyedEmbedder {
        vectors: HashMap::new(),
        // Every text embeds identically except nothing scores: zero vector
        default: vec![0.0, 0.0],
    };

    let categorizer = Categorizer::with_parts(
        vec![source("Flathub", Some(&["Bespoke"]))],
        CategoryResolver::new(Box::new(embedder), 0.3),
    );

    let report = categorizer.process_app("Oddity").await;
    assert_eq!(report.category, "Others");
    assert_eq!(report.energy_label, "Low/Medium Energy Consumption");
}
