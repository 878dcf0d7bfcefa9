//! Raw tag normalization
//!
//! Catalogs disagree wildly on tag spelling: "GraphicsDesign", "photo-video",
//! "Developer_Tools". Normalization canonicalizes every raw tag into a
//! lowercase, whitespace-collapsed token form before keyword mapping.

/// Normalize a raw catalog tag.
///
/// Rules, applied in order:
/// 1. Insert a space before each internal uppercase letter (camel-case split)
/// 2. Lowercase
/// 3. Replace `-` and `_` with spaces
/// 4. Drop everything except ASCII letters, digits, whitespace, and `&`
/// 5. Collapse whitespace runs and trim
///
/// Total over any input; the empty string normalizes to the empty string.
pub fn normalize_tag(raw: &str) -> String {
    // Camel-case split: space before an uppercase letter whose predecessor
    // is not whitespace
    let mut spaced = String::with_capacity(raw.len() + 8);
    let mut prev: Option<char> = None;
    for ch in raw.chars() {
        if ch.is_uppercase() {
            if let Some(p) = prev {
                if !p.is_whitespace() {
                    spaced.push(' ');
                }
            }
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    // Lowercase, separator replacement, charset filter
    let mut filtered = String::with_capacity(spaced.len());
    for ch in spaced.chars() {
        let ch = match ch {
            '-' | '_' => ' ',
            other => other,
        };
        for lc in ch.to_lowercase() {
            if lc.is_ascii_alphanumeric() || lc == '&' {
                filtered.push(lc);
            } else if lc.is_whitespace() {
                filtered.push(' ');
            }
        }
    }

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
