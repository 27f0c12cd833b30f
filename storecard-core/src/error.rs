use thiserror::Error;

use crate::catalog::{Color, Size};

/// Message shown to the shopper when no purchase link can be resolved.
pub const LINK_UNAVAILABLE_MESSAGE: &str =
    "No payment link available for the selected size and color.";

#[derive(Debug, Error)]
pub enum StoreCardError {
    /// The selected (color, size) pair has no usable payment link.
    #[error("no payment link for {color} / {size}")]
    LinkUnavailable { color: String, size: String },
    #[error("unknown size: {0}")]
    UnknownSize(String),
    #[error("unknown color: {0}")]
    UnknownColor(String),
    #[error("configuration parsing error: {0}")]
    Config(#[from] serde_json::Error),
}

impl StoreCardError {
    #[must_use]
    pub fn link_unavailable(color: Color, size: Size) -> Self {
        Self::LinkUnavailable {
            color: color.key().to_string(),
            size: size.key().to_string(),
        }
    }

    /// Whether this error should surface as the shopper-facing purchase failure.
    ///
    /// Out-of-domain selections collapse into the same notification.
    #[must_use]
    pub const fn is_purchase_failure(&self) -> bool {
        matches!(
            self,
            Self::LinkUnavailable { .. } | Self::UnknownSize(_) | Self::UnknownColor(_)
        )
    }
}
