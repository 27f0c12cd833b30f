use crate::components::daisy_ui::foundation as f;
use crate::i18n;
use std::collections::BTreeMap;

/// Controlled carousel: renders the active slide passed as children and
/// previous/next controls when there is more than one slide.
#[derive(f::Properties, PartialEq, Clone)]
pub struct CarouselProps {
    pub len: usize,
    #[prop_or_default]
    pub active: usize,
    #[prop_or_default]
    pub on_previous: f::Callback<()>,
    #[prop_or_default]
    pub on_next: f::Callback<()>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> f::Html {
    let class = f::class_list(&["carousel", "relative"], &props.class);
    let position = if props.len > 0 {
        let current = (props.active % props.len + 1).to_string();
        let total = props.len.to_string();
        let mut args = BTreeMap::new();
        args.insert("current", current.as_str());
        args.insert("total", total.as_str());
        Some(i18n::tr("card.position", Some(&args)))
    } else {
        None
    };
    let control_style = f::style_list(&[
        ("cursor", "pointer"),
        ("font-size", "20px"),
        ("padding", "4px 12px"),
        ("border", "1px solid #ccc"),
        ("border-radius", "4px"),
    ]);
    let small = f::Classes::from(f::DaisySize::Sm.class("btn"));
    let prev_class = f::class_list(&["btn", "carousel-prev"], &small);
    let next_class = f::class_list(&["btn", "carousel-next"], &small);
    f::html! {
        <div class={class}
             style="position: relative; margin-bottom: 16px; overflow: hidden;"
             aria-roledescription="carousel"
             aria-label={position}>
            { for props.children.iter() }
            { if props.len > 1 {
                let on_previous = props.on_previous.reform(|_: f::MouseEvent| ());
                let on_next = props.on_next.reform(|_: f::MouseEvent| ());
                f::html! {
                    <div class="carousel-controls"
                         style="display: flex; justify-content: space-between; margin-top: 8px;">
                        <button type="button" class={prev_class}
                                style={control_style.clone()}
                                aria-label={i18n::t("card.previous")}
                                onclick={on_previous}>{"<"}</button>
                        <button type="button" class={next_class}
                                style={control_style}
                                aria-label={i18n::t("card.next")}
                                onclick={on_next}>{">"}</button>
                    </div>
                }
            } else { f::Html::default() }}
        </div>
    }
}
