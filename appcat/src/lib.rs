//! appcat library interface
//!
//! Classifies an application name into one canonical category plus an
//! energy-consumption label by aggregating tags from multiple software
//! catalogs (Snapcraft, Flathub, Apple App Store, GOG, itch.io,
//! My Abandonware) and resolving disagreement through keyword mapping with a
//! semantic-similarity fallback.

pub mod batch;
pub mod category;
pub mod pipeline;
pub mod sources;

pub use crate::category::{Category, CategoryResolver, EnergyTier};
pub use crate::pipeline::{AppReport, Categorizer, RawCategories};
pub use crate::sources::CategorySource;
