//! Keyword mapping from normalized tags to canonical category labels
//!
//! A static lookup table covering the tag vocabulary the catalogs actually
//! emit. Lookup is exact on the already-normalized input; unmapped tags pass
//! through unchanged so the semantic fallback can still use them.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Normalized phrase → canonical category label
static KEYWORD_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("games", "Game"),
        ("game", "Game"),
        ("3d graphic", "Graphics & Design"),
        ("graphic", "Graphics & Design"),
        ("graphics", "Graphics & Design"),
        ("photo", "Photo & Video"),
        ("audio", "Music"),
        ("photography", "Photo & Video"),
        ("video", "Photo & Video"),
        ("video conference", "Photo & Video"),
        ("network", "Utilities"),
        ("utility", "Utilities"),
        ("tools", "Utilities"),
        ("health fitness", "Health & Fitness"),
        ("food drink", "Food & Drink"),
        ("social", "Social Networking"),
        ("development", "Developer Tool"),
        ("magazines newspapers", "Magazines & Newspapers"),
    ])
});

/// Map a normalized tag through the keyword table; unmapped tags pass through
pub fn map_keyword(normalized: &str) -> &str {
    KEYWORD_MAP.get(normalized).copied().unwrap_or(normalized)
}

/// Title-case a string token by token.
///
/// Every ASCII letter that starts the string or follows a non-letter is
/// uppercased, the rest lowercased ("3d graphics" becomes "3D Graphics").
/// Applied to mapped tags before comparison against canonical labels.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }
    out
}
