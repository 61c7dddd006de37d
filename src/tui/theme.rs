use ratatui::style::Color;

use crate::model::UiConfig;

/// Colors used by the to-do screen. Every slot can be overridden from
/// `[ui.colors]` in config.toml using the field name as the key.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Focused borders, titles and the edit modal frame
    pub accent: Color,
    /// Placeholders, key hints, unfocused borders
    pub muted: Color,
    /// The row's edit affordance
    pub edit: Color,
    /// The row's delete affordance and error messages
    pub delete: Color,
    /// Background of the row under the list cursor
    pub cursor_bg: Color,
    pub match_bg: Color,
    pub match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: rgb(0x0C001B),
            text: rgb(0xB0AAFF),
            text_bright: rgb(0xFFFFFF),
            accent: rgb(0xFB4196),
            muted: rgb(0x7D78BF),
            edit: rgb(0x4CA746),
            delete: rgb(0xFF4444),
            cursor_bg: rgb(0x3D1438),
            match_bg: rgb(0x40E0D0),
            match_fg: rgb(0x0C001B),
        }
    }
}

fn rgb(value: u32) -> Color {
    Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// "#RRGGBB" to a color. Anything else is rejected.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb)
}

impl Theme {
    /// Default colors with any valid `[ui.colors]` overrides applied.
    /// Unknown slots and malformed values are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (slot, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value)
                && let Some(target) = theme.slot_mut(slot)
            {
                *target = color;
            }
        }
        theme
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Color> {
        Some(match name {
            "background" => &mut self.background,
            "text" => &mut self.text,
            "text_bright" => &mut self.text_bright,
            "accent" => &mut self.accent,
            "muted" => &mut self.muted,
            "edit" => &mut self.edit,
            "delete" => &mut self.delete,
            "cursor_bg" => &mut self.cursor_bg,
            "match_bg" => &mut self.match_bg,
            "match_fg" => &mut self.match_fg,
            _ => return None,
        })
    }
}
