//! Color string parsing and alpha blending.
//!
//! Everything here is pure and total: any string input produces a string
//! output, malformed colors degrade to pass-through, nothing panics.

/// Blend a CSS color string with an opacity factor into an `rgba()` string.
///
/// - empty input → black at the given opacity
/// - `#rgb` / `#rrggbb` → parsed channels at the given opacity
///   (3-digit shorthand expands by doubling each digit)
/// - `rgb()` / `rgba()` → same channels, existing alpha (default 1)
///   multiplied by the factor
/// - anything else → returned unchanged
pub fn blend(color: &str, opacity: f64) -> String {
    if color.is_empty() {
        return format!("rgba(0,0,0,{opacity})");
    }

    if let Some(hex) = color.strip_prefix('#') {
        return match parse_hex(hex) {
            Some((r, g, b)) => format!("rgba({r},{g},{b},{opacity})"),
            None => color.to_string(),
        };
    }

    match parse_rgb_fn(color) {
        Some((r, g, b, a)) => format!("rgba({r},{g},{b},{})", a * opacity),
        None => color.to_string(),
    }
}

/// Parse 3- or 6-digit hex channels (no leading `#`).
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String;
    let hex = match hex.len() {
        3 => {
            expanded = hex.chars().flat_map(|c| [c, c]).collect();
            &expanded
        }
        6 => hex,
        _ => return None,
    };

    let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };
    Some((byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?))
}

/// Parse an `rgb(…)`/`rgba(…)` functional string into channels + alpha
/// (alpha defaults to 1 for the 3-component form).
fn parse_rgb_fn(color: &str) -> Option<(f64, f64, f64, f64)> {
    let rest = color.trim_start().strip_prefix("rgb")?;
    let rest = rest.strip_prefix('a').unwrap_or(rest);
    let rest = rest.trim_start().strip_prefix('(')?;
    let inner = &rest[..rest.find(')')?];

    let mut components = [0.0; 4];
    let mut count = 0;
    for part in inner.split(',') {
        if count == 4 {
            return None;
        }
        components[count] = part.trim().parse::<f64>().ok()?;
        count += 1;
    }

    match count {
        3 => Some((components[0], components[1], components[2], 1.0)),
        4 => Some((components[0], components[1], components[2], components[3])),
        _ => None,
    }
}
