//! Named and hex color parsing for figure styling

use image::Rgba;

use crate::io::error::{Result, invalid_parameter};

/// Opaque black
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Opaque white
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Opaque pink, the default figure background
pub const PINK: Rgba<u8> = Rgba([255, 192, 203, 255]);

const NAMED_COLORS: [(&str, [u8; 3]); 20] = [
    ("black", rgb(BLACK)),
    ("white", rgb(WHITE)),
    ("pink", rgb(PINK)),
    ("lightpink", [255, 182, 193]),
    ("hotpink", [255, 105, 180]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("beige", [245, 245, 220]),
    ("ivory", [255, 255, 240]),
    ("lavender", [230, 230, 250]),
];

/// Parse a color name or `#rgb`, `#rrggbb`, `#rrggbbaa` hex string
///
/// Names are matched case-insensitively.
///
/// # Errors
///
/// Returns an error if the name is unknown or the hex string is malformed
pub fn parse_color(spec: &str) -> Result<Rgba<u8>> {
    let trimmed = spec.trim();
    let unknown = || invalid_parameter("color", &spec, &"expected a color name or #rrggbb");

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(unknown);
    }

    let lowered = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|&(_, [r, g, b])| Rgba([r, g, b, 255]))
        .ok_or_else(unknown)
}

const fn rgb(color: Rgba<u8>) -> [u8; 3] {
    let [r, g, b, _] = color.0;
    [r, g, b]
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    // Short form repeats each digit: #f0c -> #ff00cc
    let short = |index: usize| channel(index..index + 1).map(|v| v * 17);

    match hex.len() {
        3 => Some(Rgba([short(0)?, short(1)?, short(2)?, 255])),
        6 => Some(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255])),
        8 => Some(Rgba([
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        ])),
        _ => None,
    }
}
