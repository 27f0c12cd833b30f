//! StoreCard core
//!
//! Platform-agnostic logic for the StoreCard product widget: option domains,
//! configuration with defaults, carousel/selection state, and purchase-link resolution.
//! This crate has no UI or browser dependencies.

pub mod catalog;
pub mod config;
pub mod error;
pub mod font;
pub mod links;
pub mod purchase;
pub mod state;

pub use catalog::{Color, Size};
pub use config::{IMAGE_SLOTS, ImageList, ImageRef, PaymentLinks, StoreCardConfig, Styling};
pub use error::{LINK_UNAVAILABLE_MESSAGE, StoreCardError};
pub use font::{DEFAULT_FONT_PX, font_size_css, font_size_px};
pub use links::LinkTable;
pub use purchase::{PurchaseOutcome, PurchaseSurface, buy, buy_raw};
pub use state::{CardAction, CardState};
