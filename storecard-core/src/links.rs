//! Payment link lookup keyed by (color, size).
use std::collections::BTreeMap;

use crate::catalog::{Color, Size};
use crate::error::StoreCardError;

/// Fixed 2×4 table of purchase URLs. Missing and empty entries are both unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    links: BTreeMap<(Color, Size), String>,
}

impl LinkTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the link for one combination, replacing any previous value.
    pub fn insert(&mut self, color: Color, size: Size, link: impl Into<String>) {
        self.links.insert((color, size), link.into());
    }

    #[must_use]
    pub fn with(mut self, color: Color, size: Size, link: impl Into<String>) -> Self {
        self.insert(color, size, link);
        self
    }

    /// Resolve the link for a selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreCardError::LinkUnavailable`] when the entry is missing or empty.
    pub fn resolve(&self, color: Color, size: Size) -> Result<&str, StoreCardError> {
        self.links
            .get(&(color, size))
            .map(String::as_str)
            .filter(|link| !link.is_empty())
            .ok_or_else(|| StoreCardError::link_unavailable(color, size))
    }

    /// Resolve a selection given as raw strings, e.g. straight from a select element.
    ///
    /// # Errors
    ///
    /// Returns [`StoreCardError::UnknownColor`] or [`StoreCardError::UnknownSize`] for
    /// values outside the domain, otherwise the same errors as [`Self::resolve`].
    pub fn resolve_raw(&self, color: &str, size: &str) -> Result<&str, StoreCardError> {
        let color: Color = color.parse()?;
        let size: Size = size.parse()?;
        self.resolve(color, size)
    }

    /// Number of combinations with a usable link.
    #[must_use]
    pub fn available(&self) -> usize {
        self.links.values().filter(|link| !link.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_only_the_selected_pair() {
        let table = LinkTable::new()
            .with(Color::Black, Size::Small, "https://pay/sb")
            .with(Color::White, Size::Small, "https://pay/sw");
        assert_eq!(table.resolve(Color::Black, Size::Small).unwrap(), "https://pay/sb");
        assert_eq!(table.resolve(Color::White, Size::Small).unwrap(), "https://pay/sw");
        assert!(table.resolve(Color::Black, Size::Medium).is_err());
    }

    #[test]
    fn empty_link_is_unavailable() {
        let table = LinkTable::new().with(Color::Black, Size::Large, "");
        let err = table.resolve(Color::Black, Size::Large).unwrap_err();
        assert!(matches!(err, StoreCardError::LinkUnavailable { .. }));
        assert_eq!(table.available(), 0);
    }

    #[test]
    fn raw_values_outside_domain_are_rejected() {
        let table = LinkTable::new().with(Color::Black, Size::Medium, "https://pay/mb");
        assert_eq!(table.resolve_raw("Black", "medium").unwrap(), "https://pay/mb");
        assert!(matches!(
            table.resolve_raw("Red", "medium"),
            Err(StoreCardError::UnknownColor(_))
        ));
        assert!(matches!(
            table.resolve_raw("Black", "huge"),
            Err(StoreCardError::UnknownSize(_))
        ));
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut table = LinkTable::new();
        table.insert(Color::White, Size::Xlarge, "a");
        table.insert(Color::White, Size::Xlarge, "b");
        assert_eq!(table.resolve(Color::White, Size::Xlarge).unwrap(), "b");
        assert_eq!(table.available(), 1);
    }
}
