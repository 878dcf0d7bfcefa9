//! Canonical category catalog
//!
//! The classification target is a closed set of 26 human-readable categories
//! plus the explicit `Others` fallback. `Others` is never produced by direct
//! keyword matching or semantic scoring; it only arises as a fallback when no
//! signal clears the confidence threshold.

/// Canonical application category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Books,
    WebBrowser,
    Business,
    DeveloperTool,
    Education,
    Entertainment,
    Finance,
    FoodAndDrink,
    Game,
    GraphicsAndDesign,
    HealthAndFitness,
    Kids,
    Lifestyle,
    MagazinesAndNewspapers,
    Medical,
    Music,
    Navigation,
    News,
    PhotoAndVideo,
    Productivity,
    Shopping,
    SocialNetworking,
    Sports,
    Travel,
    Utilities,
    Weather,
    /// Fallback when no category can be determined with confidence
    Others,
}

impl Category {
    /// The 26 canonical categories in fixed iteration order.
    ///
    /// This order is load-bearing: semantic-similarity ties resolve to the
    /// earliest entry. `Others` is the fallback variant and is not a scoring
    /// candidate.
    pub const ALL: [Category; 26] = [
        Category::Books,
        Category::WebBrowser,
        Category::Business,
        Category::DeveloperTool,
        Category::Education,
        Category::Entertainment,
        Category::Finance,
        Category::FoodAndDrink,
        Category::Game,
        Category::GraphicsAndDesign,
        Category::HealthAndFitness,
        Category::Kids,
        Category::Lifestyle,
        Category::MagazinesAndNewspapers,
        Category::Medical,
        Category::Music,
        Category::Navigation,
        Category::News,
        Category::PhotoAndVideo,
        Category::Productivity,
        Category::Shopping,
        Category::SocialNetworking,
        Category::Sports,
        Category::Travel,
        Category::Utilities,
        Category::Weather,
    ];

    /// Human-readable label, as used in catalog tags and reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Books => "Books",
            Category::WebBrowser => "Web Browser",
            Category::Business => "Business",
            Category::DeveloperTool => "Developer Tool",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Finance => "Finance",
            Category::FoodAndDrink => "Food & Drink",
            Category::Game => "Game",
            Category::GraphicsAndDesign => "Graphics & Design",
            Category::HealthAndFitness => "Health & Fitness",
            Category::Kids => "Kids",
            Category::Lifestyle => "Lifestyle",
            Category::MagazinesAndNewspapers => "Magazines & Newspapers",
            Category::Medical => "Medical",
            Category::Music => "Music",
            Category::Navigation => "Navigation",
            Category::News => "News",
            Category::PhotoAndVideo => "Photo & Video",
            Category::Productivity => "Productivity",
            Category::Shopping => "Shopping",
            Category::SocialNetworking => "Social Networking",
            Category::Sports => "Sports",
            Category::Travel => "Travel",
            Category::Utilities => "Utilities",
            Category::Weather => "Weather",
            Category::Others => "Others",
        }
    }

    /// Parse a label back into a category (exact match, including "Others")
    pub fn from_label(label: &str) -> Option<Category> {
        if label == "Others" {
            return Some(Category::Others);
        }
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
