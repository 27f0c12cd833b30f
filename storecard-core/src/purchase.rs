//! The "Buy Now" action.
use crate::error::{LINK_UNAVAILABLE_MESSAGE, StoreCardError};
use crate::links::LinkTable;
use crate::state::CardState;

/// Side effects a purchase may cause. Implemented by the platform layer.
pub trait PurchaseSurface {
    /// Open `link` in a new browsing context. Fire-and-forget.
    fn open_link(&self, link: &str);

    /// Show a blocking, user-visible error notification.
    fn notify(&self, message: &str);
}

/// What a purchase attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Opened(String),
    LinkUnavailable,
}

/// Resolve the current selection to a link and act on it.
///
/// Exactly one surface call is made: `open_link` on success, `notify` otherwise.
pub fn buy<S>(state: &CardState, links: &LinkTable, surface: &S) -> PurchaseOutcome
where
    S: PurchaseSurface + ?Sized,
{
    settle(links.resolve(state.selected_color, state.selected_size), surface)
}

/// Variant of [`buy`] for selections that arrive as raw strings.
pub fn buy_raw<S>(color: &str, size: &str, links: &LinkTable, surface: &S) -> PurchaseOutcome
where
    S: PurchaseSurface + ?Sized,
{
    settle(links.resolve_raw(color, size), surface)
}

fn settle<S>(resolved: Result<&str, StoreCardError>, surface: &S) -> PurchaseOutcome
where
    S: PurchaseSurface + ?Sized,
{
    match resolved {
        Ok(link) => {
            surface.open_link(link);
            PurchaseOutcome::Opened(link.to_string())
        }
        Err(err) => {
            debug_assert!(err.is_purchase_failure());
            surface.notify(LINK_UNAVAILABLE_MESSAGE);
            PurchaseOutcome::LinkUnavailable
        }
    }
}
