use once_cell::sync::Lazy;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("es", include_str!("../i18n/es.json")),
];

static PARSED: Lazy<BTreeMap<&'static str, Value>> = Lazy::new(|| {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, data)| match serde_json::from_str(data) {
            Ok(value) => Some((*code, value)),
            Err(err) => {
                log::error!("translation bundle {code} is invalid: {err}");
                None
            }
        })
        .collect()
});

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    PARSED.get(lang).cloned()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));
    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(build_bundle("en").unwrap_or_else(fallback_bundle));
}

/// Set the current language. Unknown codes leave the active bundle untouched.
pub fn set_lang(lang: &str) {
    if let Some(b) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(b));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute("lang", lang);
            }
        }
    } else {
        log::warn!("unsupported locale {lang}; keeping {}", current_lang());
    }
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language, falling back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, using `fallback` when no bundle defines it.
#[must_use]
pub fn t_or(key: &str, fallback: &str) -> String {
    resolve(key, None).unwrap_or_else(|| fallback.to_string())
}

/// Translate a key with `{var}` / `{{var}}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Image {current} of {{total}}".into());
        let mut args = BTreeMap::new();
        args.insert("current", "2");
        args.insert("total", "3");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Image 2 of 3");
    }

    #[test]
    fn missing_keys_fall_back_to_key() {
        set_lang("en");
        assert_eq!(t("card.nope"), "card.nope");
        assert_eq!(t("card.buy"), "Buy Now");
    }

    #[test]
    fn t_or_uses_fallback_only_for_missing_keys() {
        set_lang("en");
        assert_eq!(t_or("card.buy", "unused"), "Buy Now");
        assert_eq!(t_or("sizes.huge", "Huge"), "Huge");
    }

    #[test]
    fn spanish_bundle_translates_and_unknown_locale_is_ignored() {
        set_lang("es");
        assert_eq!(current_lang(), "es");
        assert_eq!(t("card.buy"), "Comprar ahora");
        set_lang("xx");
        assert_eq!(current_lang(), "es");
        set_lang("en");
    }

    #[test]
    fn every_locale_defines_the_english_keys() {
        fn leaves(prefix: &str, value: &Value, out: &mut Vec<String>) {
            if let Value::Object(map) = value {
                for (k, v) in map {
                    let path = if prefix.is_empty() { k.clone() } else { format!("{prefix}.{k}") };
                    leaves(&path, v, out);
                }
            } else {
                out.push(prefix.to_string());
            }
        }
        let mut keys = Vec::new();
        leaves("", &load_translations("en").unwrap(), &mut keys);
        for (code, _) in LOCALE_TABLE {
            let bundle = load_translations(code).unwrap();
            for key in &keys {
                assert!(get_nested_value(&bundle, key).is_some(), "{code} is missing {key}");
            }
        }
    }
}
