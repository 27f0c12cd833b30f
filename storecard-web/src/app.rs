//! Demo host: mounts a single StoreCard from the bundled configuration.

use crate::components::daisy_ui::DaisyColor;
use crate::components::ui::store_card::StoreCard;
use crate::i18n;
use std::rc::Rc;
use storecard_core::{StoreCardConfig, StoreCardError};
use yew::prelude::*;

const DEMO_CONFIG: &str = include_str!("../static/storecard.json");

/// Parse the bundled demo configuration.
///
/// # Errors
///
/// Returns [`StoreCardError::Config`] if the bundled JSON is malformed.
pub fn load_demo_config() -> Result<StoreCardConfig, StoreCardError> {
    StoreCardConfig::from_json(DEMO_CONFIG)
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    /// Raw JSON configuration; the bundled demo is used when absent.
    #[prop_or_default]
    pub config_json: Option<AttrValue>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_memo(props.config_json.clone(), |json| {
        json.as_ref()
            .map_or_else(load_demo_config, |json| StoreCardConfig::from_json(json))
            .map(Rc::new)
            .map_err(|err| err.to_string())
    });

    match &*config {
        Ok(config) => html! { <StoreCard config={config.clone()} /> },
        Err(message) => {
            log::error!("store card configuration rejected: {message}");
            html! {
                <section role="alert" class={classes!("store-card", "alert", DaisyColor::Error.class("alert"))}>
                    <h3>{ i18n::t("card.config_error") }</h3>
                    <p class="error">{ message.clone() }</p>
                </section>
            }
        }
    }
}
