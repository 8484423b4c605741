use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Rgb(0x8B, 0x95, 0xF2)
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Rgb(0x2C, 0x32, 0x47)
    }

    /// Headline text
    pub fn headline() -> Color {
        Color::Rgb(0xA5, 0xAE, 0xFF)
    }

    /// Completed session
    pub fn success() -> Color {
        Color::Rgb(0x4A, 0xDE, 0x80)
    }

    /// Field with a valid time
    pub fn valid() -> Color {
        Color::LightGreen
    }

    /// Reset button and destructive prompts
    pub fn danger() -> Color {
        Color::LightRed
    }

    /// Start button
    pub fn action() -> Color {
        Color::LightBlue
    }

    /// Focused input field
    pub fn highlight() -> Color {
        Color::White
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::Gray
    }
}
