//! Parrot/neon theme tokens for the ttiboard TUI
//!
//! Provides a consistent color palette inspired by:
//! - Parrot color scheme (neon accents on dark background)
//! - Terminal aesthetic with high contrast
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (headers, focus)
//! - **Positive**: Neon green (leader row, healthy success ratio)
//! - **Negative**: Hot pink (errors, failing providers)
//! - **Warning**: Neon orange (slow bars, partial failures)
//! - **Muted**: Steel blue (inactive rows, hints)
//!
//! Provider series colors live in [`crate::palette`], not here.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (leader, high success ratio)
    pub positive: Color,
    /// Hot pink (low success ratio, errors)
    pub negative: Color,
    /// Neon orange (warnings, slow values)
    pub warning: Color,
    /// Steel blue (muted text, inactive rows)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a success ratio in `[0, 1]`.
    pub fn ratio_color(&self, ratio: f64) -> Color {
        match ratio {
            r if r >= 0.95 => self.positive,
            r if r >= 0.8 => self.accent,
            r if r >= 0.5 => self.warning,
            _ => self.negative,
        }
    }

    /// Color for a bar: short bars are fast (lower TTI is better).
    pub fn scale_color(&self, relative_scale: f64) -> Color {
        match relative_scale {
            s if s <= 0.34 => self.positive,
            s if s <= 0.67 => self.accent,
            _ => self.warning,
        }
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn leader(&self) -> Style {
        Style::default()
            .fg(self.positive)
            .add_modifier(Modifier::BOLD)
    }

    pub fn inactive(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent)
    }
}
