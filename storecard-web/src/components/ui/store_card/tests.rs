use super::*;
use futures::executor::block_on;
use std::cell::RefCell;
use storecard_core::ImageRef;
use yew::LocalServerRenderer;

#[derive(Default)]
struct NullSurface {
    calls: RefCell<usize>,
}

impl PurchaseSurface for NullSurface {
    fn open_link(&self, _link: &str) {
        *self.calls.borrow_mut() += 1;
    }

    fn notify(&self, _message: &str) {
        *self.calls.borrow_mut() += 1;
    }
}

fn render(config: StoreCardConfig) -> String {
    crate::i18n::set_lang("en");
    let props = StoreCardProps {
        config: Rc::new(config),
        surface: Rc::new(NullSurface::default()),
        on_purchase: Callback::noop(),
    };
    block_on(LocalServerRenderer::<StoreCard>::with_props(props).render())
}

#[test]
fn default_card_has_placeholder_and_no_controls() {
    let html = render(StoreCardConfig::default());
    assert!(html.contains("Default Title"), "{html}");
    assert!(html.contains("Default Subtitle"));
    assert!(html.contains("No image provided."));
    assert!(html.contains("Buy Now"));
    assert!(!html.contains("carousel-controls"));
    assert!(!html.contains("<img"));
}

#[test]
fn two_images_render_first_with_controls() {
    let html = render(StoreCardConfig {
        image1: Some(ImageRef::new("a.png")),
        image3: Some(ImageRef::new("c.png")),
        ..StoreCardConfig::default()
    });
    assert!(html.contains(r#"src="a.png""#), "{html}");
    assert!(html.contains(r#"alt="slider-0""#));
    assert!(!html.contains("c.png"));
    assert!(html.contains("carousel-prev"));
    assert!(html.contains("carousel-next"));
    assert!(html.contains("Image 1 of 2"));
}

#[test]
fn single_image_hides_navigation() {
    let html = render(StoreCardConfig {
        image2: Some(ImageRef::new("only.png")),
        ..StoreCardConfig::default()
    });
    assert!(html.contains("only.png"));
    assert!(!html.contains("carousel-controls"));
    assert!(html.contains("scale(1)"));
}

#[test]
fn selectors_list_every_option() {
    let html = render(StoreCardConfig::default());
    for label in ["Small", "Medium", "Large", "X-Large", "Black", "White"] {
        assert!(html.contains(label), "missing {label}");
    }
    assert!(html.contains(r#"value="xlarge""#));
}

#[test]
fn styling_applies_to_page_card_and_text() {
    let mut config = StoreCardConfig::default();
    config.styling.font_size = "large".into();
    config.styling.font_family = "Georgia, serif".into();
    config.styling.card_color = "#fafafa".into();
    config.styling.center_text = true;
    let html = render(config);
    assert!(html.contains("font-size: 20px;"));
    assert!(html.contains("font-family: Georgia, serif;"));
    assert!(html.contains("background-color: #fafafa;"));
    assert!(html.contains("text-align: center;"));
    assert!(html.contains("background-color: #f4f4f4;"));
}

#[test]
fn rendering_is_idempotent_and_side_effect_free() {
    let surface = Rc::new(NullSurface::default());
    let config = Rc::new(StoreCardConfig {
        image1: Some(ImageRef::new("a.png")),
        ..StoreCardConfig::default()
    });
    let props = || StoreCardProps {
        config: config.clone(),
        surface: surface.clone(),
        on_purchase: Callback::noop(),
    };
    crate::i18n::set_lang("en");
    let first = block_on(LocalServerRenderer::<StoreCard>::with_props(props()).render());
    let second = block_on(LocalServerRenderer::<StoreCard>::with_props(props()).render());
    assert_eq!(first, second);
    assert_eq!(*surface.calls.borrow(), 0);
}

#[test]
fn props_compare_config_by_value_and_surface_by_pointer() {
    let surface: Rc<dyn PurchaseSurface> = Rc::new(NullSurface::default());
    let a = StoreCardProps {
        config: Rc::new(StoreCardConfig::default()),
        surface: surface.clone(),
        on_purchase: Callback::noop(),
    };
    let b = StoreCardProps {
        config: Rc::new(StoreCardConfig::default()),
        ..a.clone()
    };
    assert!(a == b);
    let c = StoreCardProps {
        surface: Rc::new(NullSurface::default()),
        ..a.clone()
    };
    assert!(a != c);
}
