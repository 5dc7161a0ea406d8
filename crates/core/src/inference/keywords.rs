/// Tags attached when the refined prompt mentions RGB lighting.
pub const RGB_KEYWORDS: [&str; 2] = ["RGB燈效", "極簡風格"];

/// Tags attached otherwise.
pub const DEFAULT_KEYWORDS: [&str; 2] = ["高效散熱", "現代風格"];

/// Picks keyword tags for a generated text with a substring check.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let keywords = if text.contains("RGB") {
        RGB_KEYWORDS
    } else {
        DEFAULT_KEYWORDS
    };
    keywords.iter().map(|k| k.to_string()).collect()
}
