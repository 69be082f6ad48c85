//! Color tokens from schedule files.
//!
//! Accepted forms: `#RGB`, `#RRGGBB`, `#AARRGGBB`, `r,g,b` and `a,r,g,b`
//! decimal lists, and a small table of common color names. Alpha comes
//! first, as in .NET-exported schedules. Anything else resolves to the
//! fallback color.

use egui::Color32;

/// Fallback fill for bars whose color token is missing or malformed.
pub const SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 235);

const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
    ("skyblue", SKY_BLUE),
    ("steelblue", Color32::from_rgb(70, 130, 180)),
    ("navy", Color32::from_rgb(0, 0, 128)),
    ("teal", Color32::from_rgb(0, 128, 128)),
    ("crimson", Color32::from_rgb(220, 20, 60)),
    ("gold", Color32::from_rgb(255, 215, 0)),
];

/// Resolve a color token, falling back to `fallback` when it cannot be read.
pub fn resolve_color_or(token: &str, fallback: Color32) -> Color32 {
    if token.trim().is_empty() {
        return fallback;
    }
    match parse_color(token) {
        Ok(color) => color,
        Err(e) => {
            tracing::debug!("Using fallback bar color: {}", e);
            fallback
        }
    }
}

/// Resolve a color token, falling back to [`SKY_BLUE`].
pub fn resolve_color(token: &str) -> Color32 {
    resolve_color_or(token, SKY_BLUE)
}

/// Parse a color token strictly.
pub fn parse_color(token: &str) -> Result<Color32, String> {
    let s = token.trim();
    if s.contains(',') {
        return parse_decimal_triple(s);
    }
    let name = s.to_ascii_lowercase().replace([' ', '-', '_'], "");
    if let Some((_, color)) = NAMED_COLORS.iter().find(|(n, _)| *n == name) {
        return Ok(*color);
    }
    let Some(hex) = s.strip_prefix('#') else {
        return Err(format!("Unrecognized color '{}'", s));
    };
    if hex.len() == 8 && hex.is_ascii() {
        // #AARRGGBB: move the alpha byte to the end.
        return hex_color::parse_hex_color(&format!("{}{}", &hex[2..], &hex[..2]));
    }
    hex_color::parse_hex_color(s)
}

fn parse_decimal_triple(s: &str) -> Result<Color32, String> {
    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("Invalid color '{}': {}", s, e))?;
    match parts.as_slice() {
        [r, g, b] => Ok(Color32::from_rgb(*r, *g, *b)),
        [a, r, g, b] => Ok(Color32::from_rgba_unmultiplied(*r, *g, *b, *a)),
        _ => Err(format!("Invalid color '{}': expected r,g,b or a,r,g,b", s)),
    }
}

/// Serde helper storing `Color32` as `#RRGGBB` / `#RRGGBBAA` in the app's
/// own JSON files.
pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub fn to_hex(color: Color32) -> String {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color '{}'", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("Invalid hex color '{}': {}", s, e))
        };
        match hex.len() {
            3 => {
                let nibble = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Color32::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!(
                "Invalid hex color '{}': expected 3, 6 or 8 hex digits",
                s
            )),
        }
    }
}
