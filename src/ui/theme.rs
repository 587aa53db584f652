// ui/theme.rs - Colours for the editor window

use ratatui::style::Color;

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub menu_bar_bg: Color,
    pub menu_bar_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub border: Color,
    pub dim: Color,
    pub directory: Color,
    pub error: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            foreground: Color::Rgb(220, 220, 220),
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            menu_bar_bg: Color::Rgb(45, 45, 45),
            menu_bar_fg: Color::Rgb(220, 220, 220),
            menu_selected_bg: Color::Rgb(220, 220, 220),
            menu_selected_fg: Color::Rgb(30, 30, 30),
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            border: Color::DarkGray,
            dim: Color::Gray,
            directory: Color::Rgb(139, 233, 253), // Cyan
            error: Color::Red,
        }
    }
}
