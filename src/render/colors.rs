//! Terminal colors for the game screen

use crossterm::style::{style, Color, Stylize};

/// Color for item values in the tank drawing
pub const ITEM: Color = Color::Cyan;

/// Color for headings, menu identifiers and prompts
pub const ACCENT: Color = Color::Red;

/// Color for the win banner
pub const WIN: Color = Color::Green;

/// Whether output is styled with ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Render `text` in `color`, or as-is when colors are off
    pub fn paint(&self, text: impl std::fmt::Display, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_is_passthrough() {
        assert_eq!(Palette::plain().paint(42, ITEM), "42");
    }

    #[test]
    fn test_colored_palette_wraps_text() {
        let painted = Palette::colored().paint("COMMANDS", ACCENT);
        assert!(painted.contains("COMMANDS"));
        assert!(painted.len() >= "COMMANDS".len());
    }
}
