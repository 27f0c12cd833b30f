pub use web_sys::{Event, HtmlSelectElement, MouseEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum DaisyColor {
    #[default]
    Primary,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DaisySize {
    Sm,
    Block,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Block => "block",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

/// Join `property: value` pairs into an inline `style` attribute.
#[must_use]
pub fn style_list(pairs: &[(&str, &str)]) -> AttrValue {
    let style = pairs
        .iter()
        .map(|(prop, value)| format!("{prop}: {value};"))
        .collect::<Vec<_>>()
        .join(" ");
    AttrValue::from(style)
}
