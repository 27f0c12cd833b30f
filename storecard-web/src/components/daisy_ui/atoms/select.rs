use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
}

impl SelectOption {
    pub fn new(value: impl Into<f::AttrValue>, label: impl Into<f::AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub style: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let class = f::class_list(&["select", "select-bordered"], &props.class);
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<f::HtmlSelectElement>() {
                    cb.emit(sel.value().into());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    f::html! {
        <select
            class={class}
            style={props.style.clone()}
            aria-label={props.aria_label.clone()}
            value={props.value.clone().unwrap_or_default()}
            onchange={on_change}
        >
            { for props.options.iter().map(|opt| {
                let selected = props.value.as_ref() == Some(&opt.value);
                f::html! { <option value={opt.value.clone()} selected={selected}>{ opt.label.clone() }</option> }
            })}
        </select>
    }
}
