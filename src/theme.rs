use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct ThemeTokens {
    pub text_primary: Color,
    pub text_muted: Color,
    pub border: Color,

    pub menu_title: Color,
    pub menu_desc: Color,

    pub status_fg: Color,
    pub status_bg: Color,

    pub accent_success: Color,
    pub accent_danger: Color,

    pub selection_fg: Color,
    pub selection_bg: Color,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::builtin_dark()
    }
}

impl ThemeTokens {
    #[must_use]
    pub fn builtin_dark() -> Self {
        Self {
            text_primary: Color::White,
            text_muted: Color::Gray,
            border: Color::DarkGray,

            menu_title: Color::White,
            menu_desc: Color::DarkGray,

            status_fg: Color::White,
            status_bg: Color::Rgb(24, 24, 24),

            accent_success: Color::Green,
            accent_danger: Color::Red,

            selection_fg: Color::White,
            selection_bg: Color::Rgb(24, 24, 24),
        }
    }

    #[must_use]
    pub fn builtin_light() -> Self {
        Self {
            text_primary: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::Gray,

            menu_title: Color::Black,
            menu_desc: Color::Gray,

            status_fg: Color::Black,
            status_bg: Color::Rgb(230, 230, 230),

            accent_success: Color::Green,
            accent_danger: Color::Red,

            selection_fg: Color::Black,
            selection_bg: Color::Rgb(230, 230, 230),
        }
    }

    /// Resolve a configured theme name; anything unknown maps to dark.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("light") => Self::builtin_light(),
            _ => Self::builtin_dark(),
        }
    }
}
