use crate::components::daisy_ui::SelectOption;
use crate::components::daisy_ui::foundation::style_list;
use crate::i18n;
use storecard_core::{CardState, Color, Size, StoreCardConfig, font_size_css};
use yew::AttrValue;

/// The image currently shown by the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub style: AttrValue,
}

/// Everything the card view renders, resolved from configuration plus state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardViewModel {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub page_style: AttrValue,
    pub card_style: AttrValue,
    pub title_style: AttrValue,
    pub subtitle_style: AttrValue,
    pub select_style: AttrValue,
    pub button_style: AttrValue,
    pub image: Option<ImageView>,
    pub image_count: usize,
    pub active_index: usize,
    pub size_options: Vec<SelectOption>,
    pub color_options: Vec<SelectOption>,
    pub selected_size: AttrValue,
    pub selected_color: AttrValue,
    pub size_label: AttrValue,
    pub color_label: AttrValue,
    pub buy_label: AttrValue,
    pub no_image_label: AttrValue,
}

/// Inline style for the displayed image; hovering magnifies it.
#[must_use]
pub fn image_style(hovered: bool) -> AttrValue {
    style_list(&[
        ("width", "100%"),
        ("height", "200px"),
        ("object-fit", "cover"),
        ("border-radius", "8px"),
        ("transform", if hovered { "scale(1.5)" } else { "scale(1)" }),
        ("transition", "transform 0.3s ease-in-out"),
        ("cursor", if hovered { "zoom-in" } else { "default" }),
    ])
}

fn size_options() -> Vec<SelectOption> {
    Size::ALL
        .into_iter()
        .map(|size| {
            let label = i18n::t_or(&format!("sizes.{}", size.key()), size.label());
            SelectOption::new(size.key(), label)
        })
        .collect()
}

fn color_options() -> Vec<SelectOption> {
    Color::ALL
        .into_iter()
        .map(|color| SelectOption::new(color.key(), i18n::t(&format!("colors.{}", color.key()))))
        .collect()
}

#[must_use]
pub fn build_card_viewmodel(config: &StoreCardConfig, state: &CardState) -> CardViewModel {
    let styling = &config.styling;
    let font_size = font_size_css(&styling.font_size);
    let font_family = styling.font_family.as_str();

    let images = config.images();
    let image_count = images.len();
    let active_index = state.current_index(image_count).unwrap_or(0);
    let image = state.current_index(image_count).map(|idx| ImageView {
        src: AttrValue::from(images[idx].to_string()),
        alt: AttrValue::from(format!("slider-{idx}")),
        style: image_style(state.is_hovered),
    });

    CardViewModel {
        title: AttrValue::from(config.title.clone()),
        subtitle: AttrValue::from(config.subtitle.clone()),
        page_style: style_list(&[
            ("display", "flex"),
            ("justify-content", "center"),
            ("align-items", "center"),
            ("height", "100vh"),
            ("background-color", styling.background_color.as_str()),
            ("padding", "16px"),
            ("box-sizing", "border-box"),
        ]),
        card_style: style_list(&[
            ("border", "1px solid #ccc"),
            ("border-radius", "8px"),
            ("padding", "16px"),
            ("max-width", "300px"),
            ("max-height", "90vh"),
            ("display", "flex"),
            ("flex-direction", "column"),
            ("background-color", styling.card_color.as_str()),
            ("font-family", font_family),
            ("color", styling.font_color.as_str()),
            ("text-align", styling.text_align()),
        ]),
        title_style: style_list(&[
            ("margin-bottom", "8px"),
            ("font-family", font_family),
            ("font-size", font_size.as_str()),
        ]),
        subtitle_style: style_list(&[
            ("margin-bottom", "16px"),
            ("font-family", font_family),
            ("font-size", font_size.as_str()),
        ]),
        select_style: style_list(&[
            ("flex", "1"),
            ("font-family", font_family),
            ("color", styling.font_color.as_str()),
        ]),
        button_style: style_list(&[("width", "100%"), ("font-family", font_family)]),
        image,
        image_count,
        active_index,
        size_options: size_options(),
        color_options: color_options(),
        selected_size: AttrValue::from(state.selected_size.key()),
        selected_color: AttrValue::from(state.selected_color.key()),
        size_label: AttrValue::from(i18n::t("card.size_label")),
        color_label: AttrValue::from(i18n::t("card.color_label")),
        buy_label: AttrValue::from(i18n::t("card.buy")),
        no_image_label: AttrValue::from(i18n::t("card.no_image")),
    }
}
