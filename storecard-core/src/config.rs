//! Card configuration as supplied by the host page.
//!
//! JSON keys follow the host's prop names (`image1`, `smallpayB`, `fontFamily`, ...),
//! and every field is optional with the defaults enumerated here.
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::catalog::{Color, Size};
use crate::error::StoreCardError;
use crate::font::font_size_px;
use crate::links::LinkTable;

/// Number of image slots a card exposes.
pub const IMAGE_SLOTS: usize = 3;

/// Ordered list of present image URLs.
pub type ImageList<'a> = SmallVec<[&'a str; IMAGE_SLOTS]>;

/// A resolvable image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Missing or `null` reads as empty, which marks the slot absent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ImageRef {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// The eight `{size}pay{B|W}` link fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentLinks {
    #[serde(rename = "smallpayB")]
    pub small_black: String,
    #[serde(rename = "smallpayW")]
    pub small_white: String,
    #[serde(rename = "mediumpayB")]
    pub medium_black: String,
    #[serde(rename = "mediumpayW")]
    pub medium_white: String,
    #[serde(rename = "largepayB")]
    pub large_black: String,
    #[serde(rename = "largepayW")]
    pub large_white: String,
    #[serde(rename = "xlargepayB")]
    pub xlarge_black: String,
    #[serde(rename = "xlargepayW")]
    pub xlarge_white: String,
}

impl PaymentLinks {
    /// Field backing a given combination.
    #[must_use]
    pub fn get(&self, color: Color, size: Size) -> &str {
        match (color, size) {
            (Color::Black, Size::Small) => &self.small_black,
            (Color::White, Size::Small) => &self.small_white,
            (Color::Black, Size::Medium) => &self.medium_black,
            (Color::White, Size::Medium) => &self.medium_white,
            (Color::Black, Size::Large) => &self.large_black,
            (Color::White, Size::Large) => &self.large_white,
            (Color::Black, Size::Xlarge) => &self.xlarge_black,
            (Color::White, Size::Xlarge) => &self.xlarge_white,
        }
    }

    /// Mutable access to the field backing a combination.
    pub fn get_mut(&mut self, color: Color, size: Size) -> &mut String {
        match (color, size) {
            (Color::Black, Size::Small) => &mut self.small_black,
            (Color::White, Size::Small) => &mut self.small_white,
            (Color::Black, Size::Medium) => &mut self.medium_black,
            (Color::White, Size::Medium) => &mut self.medium_white,
            (Color::Black, Size::Large) => &mut self.large_black,
            (Color::White, Size::Large) => &mut self.large_white,
            (Color::Black, Size::Xlarge) => &mut self.xlarge_black,
            (Color::White, Size::Xlarge) => &mut self.xlarge_white,
        }
    }

    /// Build the lookup table covering all eight combinations.
    #[must_use]
    pub fn table(&self) -> LinkTable {
        let mut table = LinkTable::new();
        for color in Color::ALL {
            for size in Size::ALL {
                table.insert(color, size, self.get(color, size));
            }
        }
        table
    }
}

/// Visual styling parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Styling {
    pub font_family: String,
    pub card_color: String,
    pub font_color: String,
    /// Keyword: `small`, `medium` or `large`.
    pub font_size: String,
    pub background_color: String,
    pub center_text: bool,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            font_family: "Arial, sans-serif".to_string(),
            card_color: "#fff".to_string(),
            font_color: "#000".to_string(),
            font_size: "medium".to_string(),
            background_color: "#f4f4f4".to_string(),
            center_text: false,
        }
    }
}

impl Styling {
    #[must_use]
    pub fn font_px(&self) -> u8 {
        font_size_px(&self.font_size)
    }

    #[must_use]
    pub const fn text_align(&self) -> &'static str {
        if self.center_text { "center" } else { "left" }
    }
}

/// Complete configuration of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreCardConfig {
    pub title: String,
    pub subtitle: String,
    pub image1: Option<ImageRef>,
    pub image2: Option<ImageRef>,
    pub image3: Option<ImageRef>,
    #[serde(flatten)]
    pub links: PaymentLinks,
    #[serde(flatten)]
    pub styling: Styling,
}

impl Default for StoreCardConfig {
    fn default() -> Self {
        Self {
            title: "Default Title".to_string(),
            subtitle: "Default Subtitle".to_string(),
            image1: None,
            image2: None,
            image3: None,
            links: PaymentLinks::default(),
            styling: Styling::default(),
        }
    }
}

impl StoreCardConfig {
    /// Parse a JSON configuration and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreCardError::Config`] if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, StoreCardError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Normalize the configuration: image slots with an empty URL become absent.
    #[must_use]
    pub fn validated(mut self) -> Self {
        for (idx, slot) in self.slots_mut().into_iter().enumerate() {
            if slot.as_ref().is_some_and(|image| image.url.is_empty()) {
                log::warn!("image{} has an empty url; treating slot as absent", idx + 1);
                *slot = None;
            }
        }
        self
    }

    fn slots_mut(&mut self) -> [&mut Option<ImageRef>; IMAGE_SLOTS] {
        [&mut self.image1, &mut self.image2, &mut self.image3]
    }

    /// Present image URLs in slot order.
    #[must_use]
    pub fn images(&self) -> ImageList<'_> {
        [&self.image1, &self.image2, &self.image3]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
            .collect()
    }

    #[must_use]
    pub fn link_table(&self) -> LinkTable {
        self.links.table()
    }
}
