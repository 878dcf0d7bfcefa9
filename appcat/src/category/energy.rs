//! Energy tier assignment
//!
//! Coarse power-consumption classification derived solely from the canonical
//! category. The mapping is a total `match` over `Category`, so a newly added
//! category cannot silently fall through to the default tier.

use crate::category::Category;

/// Energy-consumption tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyTier {
    High,
    Medium,
    Low,
    /// Fallback tier for `Others` and unrecognized labels
    LowMedium,
}

impl EnergyTier {
    /// Human-readable label as emitted in reports and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyTier::High => "High Energy Consumption",
            EnergyTier::Medium => "Medium Energy Consumption",
            EnergyTier::Low => "Low Energy Consumption",
            EnergyTier::LowMedium => "Low/Medium Energy Consumption",
        }
    }

    /// Tier for a canonical category (total over the category set)
    pub fn for_category(category: Category) -> EnergyTier {
        match category {
            // Rendering-heavy, media-heavy, or constantly updating
            Category::Game
            | Category::GraphicsAndDesign
            | Category::PhotoAndVideo
            | Category::Entertainment
            | Category::Navigation
            | Category::SocialNetworking => EnergyTier::High,

            Category::DeveloperTool
            | Category::Productivity
            | Category::HealthAndFitness
            | Category::Shopping
            | Category::Sports
            | Category::Travel
            | Category::Utilities
            | Category::WebBrowser
            | Category::News
            | Category::Finance
            | Category::FoodAndDrink => EnergyTier::Medium,

            Category::Books
            | Category::Business
            | Category::Education
            | Category::Kids
            | Category::Lifestyle
            | Category::Music
            | Category::MagazinesAndNewspapers
            | Category::Medical
            | Category::Weather => EnergyTier::Low,

            Category::Others => EnergyTier::LowMedium,
        }
    }
}

impl std::fmt::Display for EnergyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign an energy tier from a category label.
///
/// Labels outside the canonical set (including "Others") yield the
/// Low/Medium fallback tier, keeping this a total function over strings.
pub fn assign_energy_tag(label: &str) -> EnergyTier {
    match Category::from_label(label) {
        Some(category) => EnergyTier::for_category(category),
        None => EnergyTier::LowMedium,
    }
}
