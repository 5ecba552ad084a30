//! Provider series colors.
//!
//! An explicit lookup table handed to the chart. Providers missing from the
//! table all get [`FALLBACK_COLOR`], so repeated renders look the same.

use std::collections::HashMap;

use ratatui::style::Color;
use ttiboard_core::provider_key;

/// Neutral gray for providers without an entry.
pub const FALLBACK_COLOR: Color = Color::Rgb(140, 140, 150);

#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, Color>,
    fallback: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Palette {
    /// A palette with no entries; every provider gets the fallback.
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
            fallback: FALLBACK_COLOR,
        }
    }

    pub fn builtin() -> Self {
        let mut palette = Self::empty();
        for (provider, color) in [
            ("e2b", Color::Rgb(255, 136, 0)),
            ("daytona", Color::Rgb(0, 200, 255)),
            ("modal", Color::Rgb(127, 238, 100)),
            ("codesandbox", Color::Rgb(240, 240, 240)),
            ("vercel", Color::Rgb(255, 255, 255)),
            ("blaxel", Color::Rgb(255, 77, 77)),
            ("runloop", Color::Rgb(180, 120, 255)),
            ("cloudflare", Color::Rgb(246, 130, 31)),
            ("railway", Color::Rgb(200, 80, 220)),
            ("fly", Color::Rgb(120, 90, 255)),
        ] {
            palette.insert(provider, color);
        }
        palette
    }

    pub fn insert(&mut self, provider: &str, color: Color) {
        self.colors.insert(provider_key(provider), color);
    }

    /// Case-insensitive lookup.
    pub fn color_for(&self, provider: &str) -> Color {
        self.colors
            .get(&provider_key(provider))
            .copied()
            .unwrap_or(self.fallback)
    }
}

/// Parse `#rrggbb`, an indexed color, or a named ratatui color.
pub fn parse_color(value: &str) -> Option<Color> {
    value.trim().parse::<Color>().ok()
}
