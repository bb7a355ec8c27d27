// Theme system for the TUI
//
// Two themes, dark and light, toggled at runtime and persisted as the
// literal strings "dark" / "light" in the config file.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Flip to the other theme
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    /// The literal persisted in the config file
    pub fn config_str(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    /// Parse the persisted literal; anything unrecognized is None
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeKind::Dark),
            "light" => Some(ThemeKind::Light),
            _ => None,
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Form
    pub label: Color,
    pub label_focused: Color,
    pub hint: Color,

    // Preview
    pub preview_text: Color,
    pub placeholder: Color,

    // Accents
    pub breaking: Color,
    pub toast: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            label: Color::Gray,
            label_focused: Color::Yellow,
            hint: Color::DarkGray,

            preview_text: Color::White,
            placeholder: Color::DarkGray,

            breaking: Color::Red,
            toast: Color::Green,
            warning: Color::Yellow,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            label: Color::DarkGray,
            label_focused: Color::Blue,
            hint: Color::Gray,

            preview_text: Color::Black,
            placeholder: Color::Gray,

            breaking: Color::Red,
            toast: Color::Green,
            warning: Color::Rgb(184, 134, 11), // Dark goldenrod
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style (unfocused)
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style (focused)
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Field label style, highlighted when the field has focus
    pub fn label_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.label_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(ThemeKind::Dark.toggle(), ThemeKind::Light);
        assert_eq!(ThemeKind::Dark.toggle().toggle(), ThemeKind::Dark);
        assert_eq!(ThemeKind::Light.toggle().toggle(), ThemeKind::Light);
    }

    #[test]
    fn config_literals_round_trip() {
        for kind in [ThemeKind::Dark, ThemeKind::Light] {
            assert_eq!(ThemeKind::from_config_str(kind.config_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_literal_is_rejected() {
        assert_eq!(ThemeKind::from_config_str("solarized"), None);
        assert_eq!(ThemeKind::from_config_str(""), None);
    }

    #[test]
    fn literal_parsing_is_lenient_about_case() {
        assert_eq!(ThemeKind::from_config_str(" Dark "), Some(ThemeKind::Dark));
        assert_eq!(ThemeKind::from_config_str("LIGHT"), Some(ThemeKind::Light));
    }
}
