//! Closed product option domains: garment sizes and colors.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StoreCardError;

/// Garment size tier offered by the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

impl Size {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Xlarge];

    /// Wire spelling used in configuration keys and select values.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xlarge => "xlarge",
        }
    }

    /// English display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Xlarge => "X-Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Size {
    type Err = StoreCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.key() == s)
            .ok_or_else(|| StoreCardError::UnknownSize(s.to_string()))
    }
}

/// Garment color offered by the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Black,
    White,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::Black, Self::White];

    /// Wire spelling; doubles as the display label.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
        }
    }

    /// Suffix letter used by the `{size}pay{B|W}` link fields.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Black => 'B',
            Self::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Color {
    type Err = StoreCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.key() == s)
            .ok_or_else(|| StoreCardError::UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_parse_from_their_keys() {
        for size in Size::ALL {
            assert_eq!(size.key().parse::<Size>().unwrap(), size);
        }
        assert!(matches!(
            "XL".parse::<Size>(),
            Err(StoreCardError::UnknownSize(raw)) if raw == "XL"
        ));
    }

    #[test]
    fn colors_are_case_sensitive() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::White);
        assert!("black".parse::<Color>().is_err());
        assert!("Red".parse::<Color>().is_err());
    }

    #[test]
    fn defaults_match_initial_selection() {
        assert_eq!(Size::default(), Size::Medium);
        assert_eq!(Color::default(), Color::Black);
    }

    #[test]
    fn serde_uses_wire_spellings() {
        assert_eq!(serde_json::to_string(&Size::Xlarge).unwrap(), "\"xlarge\"");
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"White\"");
        let size: Size = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(size, Size::Small);
    }

    #[test]
    fn xlarge_label_is_hyphenated() {
        assert_eq!(Size::Xlarge.label(), "X-Large");
        assert_eq!(Color::White.initial(), 'W');
    }
}
