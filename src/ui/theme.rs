//! Color themes and ANSI escape sequence generation.
//!
//! Four Catppuccin flavors are embedded in the binary; custom themes are TOML
//! files with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark, warm (default)
//! - `catppuccin-latte`: light
//! - `catppuccin-frappe`: dark, cool
//! - `catppuccin-macchiato`: dark, medium contrast
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#181825"          # optional
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! pending_fg = "#a6e3a1"
//! price_fg = "#fab387"
//! ```

use crate::domain::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

/// A 24-bit color, written as `"#rrggbb"` in theme files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Theme`] for anything but six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || SearchError::Theme(format!("invalid color `{hex}`, expected #rrggbb"));

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(self) -> String {
        format!("\u{001b}[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Background escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(self) -> String {
        format!("\u{001b}[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = SearchError;

    fn try_from(hex: String) -> Result<Self> {
        Self::from_hex(&hex)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    }
}

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Colors for every element of the page and the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page header text.
    pub header_fg: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<Color>,

    /// Selected result row.
    pub selection_fg: Color,
    pub selection_bg: Color,

    pub text_normal: Color,
    /// Descriptions, category labels, footer.
    pub text_dim: Color,

    /// Overlay frame and results panel border.
    pub border: Color,
    pub search_bar_border: Color,

    /// Matched query runs.
    pub match_highlight_fg: Color,
    pub match_highlight_bg: Color,

    pub empty_state_fg: Color,

    /// "Searching" indicator.
    pub pending_fg: Color,

    pub price_fg: Color,
}

impl ThemeColors {
    /// Catppuccin Mocha, also shipped as `themes/catppuccin-mocha.toml`.
    pub const MOCHA: Self = Self {
        header_fg: Color::rgb(0xcd, 0xd6, 0xf4),
        header_bg: Some(Color::rgb(0x18, 0x18, 0x25)),
        selection_fg: Color::rgb(0x1e, 0x1e, 0x2e),
        selection_bg: Color::rgb(0xf5, 0xc2, 0xe7),
        text_normal: Color::rgb(0xcd, 0xd6, 0xf4),
        text_dim: Color::rgb(0x6c, 0x70, 0x86),
        border: Color::rgb(0x45, 0x47, 0x5a),
        search_bar_border: Color::rgb(0xf5, 0xc2, 0xe7),
        match_highlight_fg: Color::rgb(0x1e, 0x1e, 0x2e),
        match_highlight_bg: Color::rgb(0xf9, 0xe2, 0xaf),
        empty_state_fg: Color::rgb(0x89, 0xb4, 0xfa),
        pending_fg: Color::rgb(0xa6, 0xe3, 0xa1),
        price_fg: Color::rgb(0xfa, 0xb3, 0x87),
    };
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        match toml::from_str(source) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(theme_name = name, error = %e, "embedded theme does not parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Theme`] if the file cannot be read, is not valid
    /// TOML, or holds a malformed color.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| SearchError::Theme(format!("{}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| SearchError::Theme(format!("{}: {e}", path.display())))
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors::MOCHA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_all_builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_default_matches_embedded_mocha() {
        assert_eq!(Theme::from_name("catppuccin-mocha").unwrap(), Theme::default());
    }

    #[test]
    fn test_unknown_theme_name() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_color_escapes() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_eq!(color.fg(), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Color::from_hex("000000").unwrap().bg(), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn test_malformed_hex_is_rejected() {
        for hex in ["#abc", "#zzzzzz", "#ff80001", "#ffé000"] {
            assert!(matches!(Color::from_hex(hex), Err(SearchError::Theme(_))), "{hex}");
        }
    }

    #[test]
    fn test_from_file_round_trip() {
        let theme = Theme::from_name("catppuccin-latte").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);
    }

    #[test]
    fn test_from_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SearchError::Theme(_)));
    }

    #[test]
    fn test_from_file_rejects_bad_color() {
        let source = include_str!("../../themes/catppuccin-frappe.toml")
            .replace("price_fg = \"#", "price_fg = \"#zz");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{source}").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("price_fg") || err.to_string().contains("invalid color"));
    }
}
