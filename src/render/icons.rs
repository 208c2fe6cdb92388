use phf::phf_map;

use crate::page::IconKey;

pub const FALLBACK_GLYPH: &str = "\u{2022}";

static GLYPHS: phf::Map<&'static str, &'static str> = phf_map! {
    "snowflake" => "\u{2744}",
    "heart" => "\u{2665}",
    "sun" => "\u{2600}",
    "calendar-days" => "\u{25a6}",
};

pub fn glyph(icon: &IconKey) -> &'static str {
    GLYPHS.get(icon.as_str()).copied().unwrap_or(FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_keys() {
        assert_eq!(glyph(&"heart".parse().unwrap()), "\u{2665}");
        assert_eq!(glyph(&"calendar-days".parse().unwrap()), "\u{25a6}");
        assert_eq!(glyph(&"dagger".parse().unwrap()), FALLBACK_GLYPH);
    }
}
