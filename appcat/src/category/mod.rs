//! Category domain: canonical catalog, tag normalization, keyword mapping,
//! semantic embedding, resolution, and energy tiers.

pub mod catalog;
pub mod embedding;
pub mod energy;
pub mod keyword_map;
pub mod normalizer;
pub mod resolver;

pub use catalog::Category;
pub use embedding::{cosine_similarity, Embedder, HashEmbedder};
pub use energy::{assign_energy_tag, EnergyTier};
pub use keyword_map::{map_keyword, title_case};
pub use normalizer::normalize_tag;
pub use resolver::CategoryResolver;
