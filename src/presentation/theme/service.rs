use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DEFAULT_ACCENT: Color = Color::Indexed(208);
const DEFAULT_INACTIVE: Color = Color::Gray;

/// Colours shared by the screens and widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Active tab tint, primary buttons and focus.
    pub accent: Color,
    /// Inactive tab tint and unfocused borders.
    pub inactive: Color,
    /// Sign-out button and discount badges.
    pub danger: Color,
    /// Secondary text.
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(DEFAULT_ACCENT, DEFAULT_INACTIVE)
    }
}

impl Theme {
    /// Theme from colour names or hex codes; unparsable values fall back to the defaults.
    #[must_use]
    pub fn new(accent_color_str: &str, inactive_color_str: &str) -> Self {
        let accent = parse_color(accent_color_str).unwrap_or(DEFAULT_ACCENT);
        let inactive = parse_color(inactive_color_str).unwrap_or(DEFAULT_INACTIVE);
        Self::from_colors(accent, inactive)
    }

    /// Theme from already parsed colours.
    #[must_use]
    pub fn from_colors(accent: Color, inactive: Color) -> Self {
        Self {
            accent,
            inactive,
            danger: Color::Red,
            dimmed_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Style for the focused affordance of a screen.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Border style for a focused or unfocused container.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.inactive)
        }
    }
}

fn parse_color(s: &str) -> Option<Color> {
    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Some(Color::Rgb(r, g, b));
    }

    match s.to_lowercase().as_str() {
        "orange" => return Some(Color::Indexed(208)),
        "grey" => return Some(Color::Gray),
        _ => {}
    }

    Color::from_str(s).ok()
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1].repeat(2), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[1..2].repeat(2), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[2..3].repeat(2), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}
