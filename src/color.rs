use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Colour used for categories the map was not built with.
pub const DEFAULT_COLOR: &str = "#808080";

/// Generates `n` visually distinct `#rrggbb` colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            format!(
                "#{:02x}{:02x}{:02x}",
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: booster version category → hex colour
// ---------------------------------------------------------------------------

/// Maps booster version categories to distinct colours.
///
/// Built once from the whole dataset so a category keeps its colour no matter
/// which filter is active.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, String>,
}

impl ColorMap {
    /// Build a colour map from the distinct categories, in catalog order.
    pub fn new(categories: &[String]) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> &str {
        self.mapping
            .get(category)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }
}
