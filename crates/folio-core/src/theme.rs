//! Accent color themes for the page.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Accent color theme applied to headings, chips, and highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    /// Pale ice blue, matching the starfield.
    #[default]
    Ice,
    Ember,
    Moss,
    Violet,
}

impl ColorTheme {
    /// The accent color for this theme.
    pub fn color(self) -> Color {
        match self {
            Self::Ice => Color::Rgb(157, 220, 255),
            Self::Ember => Color::Rgb(255, 160, 110),
            Self::Moss => Color::Rgb(150, 220, 150),
            Self::Violet => Color::Rgb(200, 160, 255),
        }
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            Self::Ice => Self::Ember,
            Self::Ember => Self::Moss,
            Self::Moss => Self::Violet,
            Self::Violet => Self::Ice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_returns_to_start() {
        let mut theme = ColorTheme::default();
        for _ in 0..4 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::default());
    }
}
