//! StoreCard component - product card with image carousel, size/color selection,
//! and a "Buy Now" action that opens the payment link for the chosen combination.

mod interactions;
mod view_model;

use crate::components::daisy_ui::{Button, Carousel, DaisyColor, DaisySize, Select};
use crate::dom::BrowserSurface;
use interactions::{
    CardStore, color_change_handler, dispatcher, purchase_handler, size_change_handler,
};
use std::rc::Rc;
use storecard_core::{CardAction, PurchaseOutcome, PurchaseSurface, StoreCardConfig};
pub use view_model::{CardViewModel, ImageView, build_card_viewmodel, image_style};
use yew::prelude::*;

fn browser_surface() -> Rc<dyn PurchaseSurface> {
    Rc::new(BrowserSurface)
}

#[derive(Properties, Clone)]
pub struct StoreCardProps {
    /// Card configuration; validated by the caller when built from JSON.
    #[prop_or_default]
    pub config: Rc<StoreCardConfig>,
    /// Where purchase side effects go. Defaults to `window.open` / `window.alert`.
    #[prop_or_else(browser_surface)]
    pub surface: Rc<dyn PurchaseSurface>,
    /// Notified after every purchase attempt.
    #[prop_or_default]
    pub on_purchase: Callback<PurchaseOutcome>,
}

impl PartialEq for StoreCardProps {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && Rc::ptr_eq(&self.surface, &other.surface)
            && self.on_purchase == other.on_purchase
    }
}

#[function_component(StoreCard)]
pub fn store_card(props: &StoreCardProps) -> Html {
    let store = use_reducer(CardStore::default);
    let state = store.0;
    let links = use_memo(props.config.clone(), |config| config.link_table());

    let vm: CardViewModel = build_card_viewmodel(&props.config, &state);
    let dispatch = dispatcher(&store, vm.image_count);

    let on_previous = dispatch.reform(|()| CardAction::PreviousImage);
    let on_next = dispatch.reform(|()| CardAction::NextImage);
    let on_enter = dispatch.reform(|_: MouseEvent| CardAction::HoverEnter);
    let on_leave = dispatch.reform(|_: MouseEvent| CardAction::HoverLeave);
    let on_size = size_change_handler(dispatch.clone());
    let on_color = color_change_handler(dispatch);
    let on_buy = purchase_handler(
        state,
        links,
        props.surface.clone(),
        props.on_purchase.clone(),
    );

    let slide = vm.image.clone().map_or_else(
        || {
            html! {
                <p class="no-image text-sm" style="margin-bottom: 16px;">{ vm.no_image_label.clone() }</p>
            }
        },
        |image| {
            html! {
                <img class="store-card__image"
                     src={image.src}
                     alt={image.alt}
                     style={image.style}
                     onmouseenter={on_enter}
                     onmouseleave={on_leave} />
            }
        },
    );

    html! {
        <div class="store-card__page" style={vm.page_style.clone()}>
            <article class="store-card card" role="article" style={vm.card_style.clone()}>
                <Carousel len={vm.image_count}
                          active={vm.active_index}
                          on_previous={on_previous}
                          on_next={on_next}>
                    { slide }
                </Carousel>
                <h6 class="store-card__title" style={vm.title_style.clone()}>{ vm.title.clone() }</h6>
                <p class="store-card__subtitle" style={vm.subtitle_style.clone()}>{ vm.subtitle.clone() }</p>
                <div class="store-card__options"
                     style="display: flex; justify-content: space-between; gap: 8px; margin-bottom: 16px;">
                    <Select class={classes!("store-card__size")}
                            options={vm.size_options.clone()}
                            value={vm.selected_size.clone()}
                            aria_label={vm.size_label.clone()}
                            style={vm.select_style.clone()}
                            on_change={on_size} />
                    <Select class={classes!("store-card__color")}
                            options={vm.color_options.clone()}
                            value={vm.selected_color.clone()}
                            aria_label={vm.color_label.clone()}
                            style={vm.select_style.clone()}
                            on_change={on_color} />
                </div>
                <Button class={classes!("store-card__buy")}
                        variant={DaisyColor::Primary}
                        size={DaisySize::Block}
                        style={vm.button_style.clone()}
                        label={vm.buy_label.clone()}
                        onclick={on_buy} />
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests;
