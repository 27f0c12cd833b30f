use futures::executor::block_on;
use storecard_web::app::{App, AppProps};
use yew::{AttrValue, LocalServerRenderer};

fn render_app(config_json: Option<&'static str>) -> String {
    storecard_web::i18n::set_lang("en");
    let props = AppProps {
        config_json: config_json.map(AttrValue::from),
    };
    block_on(LocalServerRenderer::<App>::with_props(props).render())
}

#[test]
fn demo_config_renders_card() {
    let html = render_app(None);
    assert!(html.contains("Classic Crew Tee"), "{html}");
    assert!(html.contains("assets/tee-front.jpg"));
    assert!(html.contains("carousel-next"));
    assert!(html.contains("text-align: center;"));
}

#[test]
fn host_config_overrides_demo() {
    let html = render_app(Some(r#"{ "title": "Hoodie", "image1": { "url": "h.png" } }"#));
    assert!(html.contains("Hoodie"));
    assert!(html.contains("h.png"));
    assert!(!html.contains("carousel-controls"));
    assert!(html.contains("Default Subtitle"));
}

#[test]
fn malformed_config_renders_error_panel() {
    let html = render_app(Some(r#"{ "centerText": "maybe" }"#));
    assert!(html.contains("Configuration Error"), "{html}");
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("alert-error"));
    assert!(!html.contains("Buy Now"));
}

#[test]
fn spanish_locale_translates_labels() {
    storecard_web::i18n::set_lang("es");
    let props = AppProps {
        config_json: Some(AttrValue::from("{}")),
    };
    let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
    storecard_web::i18n::set_lang("en");
    assert!(html.contains("Comprar ahora"));
    assert!(html.contains("Extra grande"));
}
