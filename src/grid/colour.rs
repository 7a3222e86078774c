use anyhow::{anyhow, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }

    pub fn from_pixel(px: &image::Rgba<u8>) -> Self {
        Self::rgba(px.0[0], px.0[1], px.0[2], px.0[3])
    }
}

/// Decode a hex triplet (`#rrggbb`, `rrggbb` or the `#rgb` shorthand) and
/// attach `opacity` as the alpha channel.
pub fn resolve(hex: &str, opacity: u8) -> Result<Rgba> {
    let digits = hex.trim().trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(anyhow!("colour '{hex}' is not a 3 or 6 digit hex triplet")),
    };
    let bytes = hex::decode(&expanded).with_context(|| format!("colour '{hex}' is not valid hex"))?;
    Ok(Rgba::rgba(bytes[0], bytes[1], bytes[2], opacity))
}
