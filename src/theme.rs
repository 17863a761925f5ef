use ratatui::style::Color;

/// Colors for every UI element the renderer draws.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name (e.g., "wordperfect", "dark", "light")
    pub name: String,

    // Editor colors
    pub editor_bg: Color,
    pub editor_fg: Color,

    // Chrome colors
    pub menu_bar_fg: Color,
    pub menu_bar_bg: Color,
    pub menu_hotkey_fg: Color,
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,

    // Overlay colors
    pub popup_border_fg: Color,
    pub popup_bg: Color,
    pub popup_text_fg: Color,
    pub popup_selection_fg: Color,
    pub popup_selection_bg: Color,

    // Splash box colors
    pub splash_fg: Color,
    pub splash_bg: Color,
}

impl Theme {
    /// The classic white-on-blue look of the original.
    pub fn wordperfect() -> Self {
        Self {
            name: "wordperfect".to_string(),

            editor_bg: Color::Rgb(0, 0, 170),
            editor_fg: Color::Rgb(255, 255, 255),

            menu_bar_fg: Color::Rgb(0, 0, 170),
            menu_bar_bg: Color::Rgb(192, 192, 192),
            menu_hotkey_fg: Color::Rgb(170, 0, 0),
            status_bar_fg: Color::Rgb(255, 255, 255),
            status_bar_bg: Color::Rgb(0, 0, 100),

            popup_border_fg: Color::Rgb(255, 255, 255),
            popup_bg: Color::Rgb(0, 0, 130),
            popup_text_fg: Color::Rgb(255, 255, 255),
            popup_selection_fg: Color::Rgb(0, 0, 130),
            popup_selection_bg: Color::Rgb(192, 192, 192),

            splash_fg: Color::Rgb(255, 255, 255),
            splash_bg: Color::Rgb(0, 0, 130),
        }
    }

    /// Dark theme for modern terminals.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            editor_bg: Color::Rgb(30, 30, 30),
            editor_fg: Color::Rgb(212, 212, 212),

            menu_bar_fg: Color::Rgb(212, 212, 212),
            menu_bar_bg: Color::Rgb(50, 50, 50),
            menu_hotkey_fg: Color::Yellow,
            status_bar_fg: Color::Black,
            status_bar_bg: Color::White,

            popup_border_fg: Color::Gray,
            popup_bg: Color::Rgb(30, 30, 30),
            popup_text_fg: Color::White,
            popup_selection_fg: Color::White,
            popup_selection_bg: Color::Rgb(58, 79, 120),

            splash_fg: Color::White,
            splash_bg: Color::Rgb(40, 40, 40),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            editor_bg: Color::Rgb(255, 255, 255),
            editor_fg: Color::Rgb(0, 0, 0),

            menu_bar_fg: Color::Black,
            menu_bar_bg: Color::Rgb(220, 220, 220),
            menu_hotkey_fg: Color::Red,
            status_bar_fg: Color::White,
            status_bar_bg: Color::Blue,

            popup_border_fg: Color::DarkGray,
            popup_bg: Color::Rgb(245, 245, 245),
            popup_text_fg: Color::Black,
            popup_selection_fg: Color::Black,
            popup_selection_bg: Color::Rgb(173, 214, 255),

            splash_fg: Color::Black,
            splash_bg: Color::Rgb(230, 230, 230),
        }
    }

    /// Get a theme by name, defaults to wordperfect if not found.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::wordperfect(),
        }
    }

    /// Get all available theme names
    pub fn available_themes() -> Vec<&'static str> {
        vec!["wordperfect", "dark", "light"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::wordperfect()
    }
}
