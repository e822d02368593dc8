use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
// Core
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36 - Background
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a - Current line / selection
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2 - Foreground text
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4 - Muted / comments

// Accents
pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #bd93f9
pub const RED: Color = Color::Rgb(0xFF, 0x55, 0x55); // #ff5555

// Keypad surfaces
pub const KEY_NUMBER: Color = CURRENT_LINE;
pub const KEY_OPERATOR: Color = Color::Rgb(0x5A, 0x45, 0x7E); // muted purple
pub const KEY_SPECIAL: Color = Color::Rgb(0x3A, 0x3C, 0x4E); // between bg and selection

/// The single built-in palette.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: BG,
                border: CURRENT_LINE,

                text: FOREGROUND,
                text_secondary: PURPLE,
                text_muted: COMMENT,

                key_number: KEY_NUMBER,
                key_operator: KEY_OPERATOR,
                key_special: KEY_SPECIAL,

                accent_primary: PINK,

                error: RED,
                focus: CYAN, // Cyan for active/focused borders
            },
        }
    }
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
