use std::rc::Rc;

use storecard_core::{
    CardAction, CardState, Color, LinkTable, PurchaseOutcome, PurchaseSurface, Size, buy,
};
use web_sys::MouseEvent;
use yew::prelude::*;

/// Reducer wrapper so transitions always apply to the latest state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardStore(pub CardState);

/// One transition, carrying the image count it was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEvent {
    pub action: CardAction,
    pub image_count: usize,
}

impl Reducible for CardStore {
    type Action = CardEvent;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        let next = self.0.apply(event.action, event.image_count);
        log::debug!("store card {:?}: {:?} -> {next:?}", event.action, self.0);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

pub fn dispatcher(store: &UseReducerHandle<CardStore>, image_count: usize) -> Callback<CardAction> {
    let dispatch = store.dispatcher();
    Callback::from(move |action| dispatch.dispatch(CardEvent { action, image_count }))
}

pub fn size_change_handler(dispatch: Callback<CardAction>) -> Callback<AttrValue> {
    Callback::from(move |value: AttrValue| match value.parse::<Size>() {
        Ok(size) => dispatch.emit(CardAction::SetSize(size)),
        Err(err) => log::warn!("ignoring size selection: {err}"),
    })
}

pub fn color_change_handler(dispatch: Callback<CardAction>) -> Callback<AttrValue> {
    Callback::from(move |value: AttrValue| match value.parse::<Color>() {
        Ok(color) => dispatch.emit(CardAction::SetColor(color)),
        Err(err) => log::warn!("ignoring color selection: {err}"),
    })
}

/// Debug line for a purchase attempt. The unavailable path is surfaced only to the shopper.
fn purchase_log_line(state: &CardState, outcome: &PurchaseOutcome) -> Option<String> {
    match outcome {
        PurchaseOutcome::Opened(link) => Some(format!(
            "buy {} / {}: opened {link}",
            state.selected_color, state.selected_size
        )),
        PurchaseOutcome::LinkUnavailable => None,
    }
}

pub fn purchase_handler(
    state: CardState,
    links: Rc<LinkTable>,
    surface: Rc<dyn PurchaseSurface>,
    on_purchase: Callback<PurchaseOutcome>,
) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        let outcome = buy(&state, &links, surface.as_ref());
        if let Some(line) = purchase_log_line(&state, &outcome) {
            log::debug!("{line}");
        }
        on_purchase.emit(outcome);
    })
}
