use ratatui::style::Color;

use crate::events::SourceSlug;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub muted: Color,
    pub active_filter: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            muted: Color::DarkGray,
            active_filter: Color::Yellow,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// For light terminal backgrounds; venue colours stay readable on white.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            title: Color::Rgb(44, 62, 80),
            selected_bg: Color::Rgb(52, 73, 94),
            selected_fg: Color::Rgb(236, 240, 241),
            today: Color::Rgb(39, 174, 96),
            weekday_header: Color::Rgb(127, 140, 141),
            inactive_day: Color::Rgb(189, 195, 199),
            muted: Color::Rgb(127, 140, 141),
            active_filter: Color::Rgb(243, 156, 18),
            status_bar: Color::Rgb(44, 62, 80),
            help_title: Color::Rgb(44, 62, 80),
            help_section: Color::Rgb(211, 84, 0),
            error: Color::Rgb(192, 57, 43),
            success: Color::Rgb(39, 174, 96),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "light"]
    }

    /// Source colours are the same in every theme so a venue is always
    /// recognisable.
    pub fn source_color(&self, slug: SourceSlug) -> Color {
        let (r, g, b) = slug.rgb();
        Color::Rgb(r, g, b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
