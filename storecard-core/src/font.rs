//! Font-size keyword resolution.

/// Pixel size used when the keyword is not recognized.
pub const DEFAULT_FONT_PX: u8 = 16;

/// Map a font-size keyword to pixels. Unknown or empty keywords fall back to `medium`.
#[must_use]
pub fn font_size_px(keyword: &str) -> u8 {
    match keyword {
        "small" => 12,
        "large" => 20,
        _ => DEFAULT_FONT_PX,
    }
}

/// CSS length for a font-size keyword, e.g. `"16px"`.
#[must_use]
pub fn font_size_css(keyword: &str) -> String {
    format!("{}px", font_size_px(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keywords_map_to_fixed_sizes() {
        assert_eq!(font_size_px("small"), 12);
        assert_eq!(font_size_px("medium"), 16);
        assert_eq!(font_size_px("large"), 20);
    }

    #[test]
    fn anything_else_falls_back_to_medium() {
        for keyword in ["", "xlarge", "Large", " small", "16px"] {
            assert_eq!(font_size_px(keyword), DEFAULT_FONT_PX, "keyword {keyword:?}");
        }
        assert_eq!(font_size_css("bogus"), "16px");
    }
}
