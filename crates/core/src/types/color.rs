//! Color vocabulary and swatch lookup.
//!
//! The keyword list drives query extraction (every contained keyword counts,
//! not just the first) and the hex map drives swatch rendering. Both are
//! fixed tables loaded once; there is no dynamic reconfiguration.

/// Color keywords recognized in query text, in scan order.
pub const COLOR_KEYWORDS: &[&str] = &[
    "black", "white", "gray", "grey", "blue", "navy", "red", "pink", "brown", "green", "purple",
    "beige", "cream", "blush", "maroon",
];

/// Fallback swatch for colors without a hex entry.
const DEFAULT_HEX: &str = "#e5e7eb";

/// Look up the swatch hex value for a display color name.
///
/// Covers the extraction vocabulary plus a few catalog-only colors
/// ("Light Blue", "Khaki", "Striped"). Case-insensitive.
#[must_use]
pub fn color_hex(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "black" => "#000000",
        "white" => "#ffffff",
        "gray" | "grey" => "#808080",
        "navy" => "#000080",
        "blue" => "#0000ff",
        "red" => "#ff0000",
        "pink" => "#ff69b4",
        "brown" => "#8b4513",
        "green" => "#008000",
        "purple" => "#800080",
        "beige" => "#f5f5dc",
        "cream" => "#fffdd0",
        "blush" => "#de5d83",
        "maroon" => "#800000",
        "light blue" => "#add8e6",
        "khaki" => "#f0e68c",
        "striped" => "#cccccc",
        _ => DEFAULT_HEX,
    }
}

/// Capitalize the first letter of a color keyword for display ("navy" -> "Navy").
#[must_use]
pub fn capitalize(keyword: &str) -> String {
    let mut chars = keyword.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
