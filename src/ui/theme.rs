use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACCENT_SOFT: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const ACCENT_DEEP: Color = Color::Rgb(0x99, 0x1b, 0x1b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BODY_TEXT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const TRACK: Color = Color::Rgb(0x1f, 0x29, 0x37);
/// Background tint under the pointer.
pub const GLOW: Color = Color::Rgb(0x2a, 0x0b, 0x0b);
