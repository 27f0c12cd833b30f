//! Per-instance interaction state and its transitions.

use crate::catalog::{Color, Size};

/// Interaction that mutates a card's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    NextImage,
    PreviousImage,
    HoverEnter,
    HoverLeave,
    SetSize(Size),
    SetColor(Color),
}

/// State owned by one rendered card. Initial value is (medium, Black, 0, not hovered).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    pub selected_size: Size,
    pub selected_color: Color,
    pub current_image_index: usize,
    pub is_hovered: bool,
}

impl CardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the carousel over `image_count` images, wrapping at the end.
    pub const fn next_image(&mut self, image_count: usize) {
        if image_count > 1 {
            let idx = self.current_image_index % image_count;
            self.current_image_index = (idx + 1) % image_count;
        }
    }

    /// Step the carousel back, wrapping at the start.
    pub const fn previous_image(&mut self, image_count: usize) {
        if image_count > 1 {
            let idx = self.current_image_index % image_count;
            self.current_image_index = (idx + image_count - 1) % image_count;
        }
    }

    pub const fn hover_enter(&mut self) {
        self.is_hovered = true;
    }

    pub const fn hover_leave(&mut self) {
        self.is_hovered = false;
    }

    pub const fn set_size(&mut self, size: Size) {
        self.selected_size = size;
    }

    pub const fn set_color(&mut self, color: Color) {
        self.selected_color = color;
    }

    /// Index of the image to display, or `None` when there are no images.
    ///
    /// Stays in range even if the image list shrank since the last transition.
    #[must_use]
    pub const fn current_index(&self, image_count: usize) -> Option<usize> {
        if image_count == 0 {
            None
        } else {
            Some(self.current_image_index % image_count)
        }
    }

    /// Apply one interaction and return the resulting state.
    #[must_use]
    pub const fn apply(mut self, action: CardAction, image_count: usize) -> Self {
        match action {
            CardAction::NextImage => self.next_image(image_count),
            CardAction::PreviousImage => self.previous_image(image_count),
            CardAction::HoverEnter => self.hover_enter(),
            CardAction::HoverLeave => self.hover_leave(),
            CardAction::SetSize(size) => self.set_size(size),
            CardAction::SetColor(color) => self.set_color(color),
        }
        self
    }
}
