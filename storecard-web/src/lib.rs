#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Some(lang) = web_sys::window()
        .and_then(|win| win.navigator().language())
        .and_then(|tag| tag.split('-').next().map(str::to_string))
    {
        crate::i18n::set_lang(&lang);
    }
    yew::Renderer::<app::App>::new().render();
}
