use crate::geom::{Color, Emu};

/// Immutable styling configuration handed to the mapper. Everything that was
/// once a scattered constant (palette, font, accent cycles) lives here so a
/// caller can swap the whole look in one place.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub palette: Palette,
    /// Typeface applied to every text run in the deck.
    pub font: String,
    /// Accent colors cycled across icon-grid cards.
    pub grid_accents: Vec<Color>,
    /// Accent colors cycled across pain-point role labels.
    pub role_accents: Vec<Color>,
    /// Colors cycled across timeline phase bars.
    pub phase_colors: Vec<Color>,
    /// Border used on cards and image frames.
    pub card_border: Color,
    /// Fill for image-fallback placeholder rectangles.
    pub placeholder_fill: Color,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub navy: Color,
    pub red: Color,
    pub gray: Color,
    pub light_gray: Color,
    pub white: Color,
    pub green: Color,
    pub orange: Color,
    pub blue: Color,
    pub purple: Color,
    pub body_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let palette = Palette {
            navy: Color::rgb(0x00, 0x24, 0x52),
            red: Color::rgb(0xC5, 0x1F, 0x2A),
            gray: Color::rgb(0x66, 0x66, 0x66),
            light_gray: Color::rgb(0x99, 0x99, 0x99),
            white: Color::rgb(0xFF, 0xFF, 0xFF),
            green: Color::rgb(0x2E, 0x7D, 0x32),
            orange: Color::rgb(0xF5, 0x7C, 0x00),
            blue: Color::rgb(0x19, 0x76, 0xD2),
            purple: Color::rgb(0x7B, 0x1F, 0xA2),
            body_text: Color::rgb(0x33, 0x33, 0x33),
        };
        Theme {
            grid_accents: vec![palette.navy, palette.red, palette.gray, palette.orange],
            role_accents: vec![palette.blue, palette.green, palette.orange, palette.purple],
            phase_colors: vec![palette.navy, palette.red],
            card_border: Color::rgb(0xE0, 0xE0, 0xE0),
            placeholder_fill: Color::rgb(0xF5, 0xF5, 0xF5),
            font: "Malgun Gothic".to_string(),
            palette,
        }
    }
}

impl Theme {
    /// Severity highlight as a pure function of the cell value. Recognized
    /// literals get a bold color; anything else is left unstyled.
    pub fn severity_color(&self, value: &str) -> Option<Color> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(self.palette.red),
            "medium" => Some(self.palette.orange),
            _ => None,
        }
    }

    /// Tone name carried by process-flow steps, resolved against the palette.
    pub fn flow_tone(&self, tone: &str) -> Color {
        match tone.trim().to_ascii_lowercase().as_str() {
            "green" => self.palette.green,
            "orange" => self.palette.orange,
            _ => self.palette.navy,
        }
    }

    pub fn grid_accent(&self, i: usize) -> Color {
        self.grid_accents[i % self.grid_accents.len()]
    }

    pub fn role_accent(&self, i: usize) -> Color {
        self.role_accents[i % self.role_accents.len()]
    }

    pub fn phase_color(&self, i: usize) -> Color {
        self.phase_colors[i % self.phase_colors.len()]
    }
}

/// Fixed slide geometry: 16:9 at the standard widescreen size.
pub const SLIDE_WIDTH: Emu = Emu(12_192_000);
pub const SLIDE_HEIGHT: Emu = Emu(6_858_000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_pure_and_case_insensitive() {
        let theme = Theme::default();
        assert_eq!(theme.severity_color("High"), Some(theme.palette.red));
        assert_eq!(
            theme.severity_color("  MEDIUM "),
            Some(theme.palette.orange)
        );
        assert_eq!(theme.severity_color("Low"), None);
        assert_eq!(theme.severity_color(""), None);
    }

    #[test]
    fn accent_cycles_wrap() {
        let theme = Theme::default();
        assert_eq!(theme.grid_accent(0), theme.grid_accent(4));
        assert_eq!(theme.role_accent(1), theme.role_accent(5));
        assert_eq!(theme.phase_color(0), theme.phase_color(2));
    }

    #[test]
    fn unknown_flow_tone_defaults_to_navy() {
        let theme = Theme::default();
        assert_eq!(theme.flow_tone("chartreuse"), theme.palette.navy);
        assert_eq!(theme.flow_tone("GREEN"), theme.palette.green);
    }
}
